use crate::app::components::{IconGlyph, ThemeToggle};
use crate::domain::models::Icon;
use dioxus::prelude::*;

/// Top bar of the dashboard: page title, search box and quick actions
#[component]
pub fn Navbar(title: &'static str) -> Element {
    let mut search_query = use_signal(String::new);

    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__start",
                button { r#type: "button", class: "c-icon-button", title: "Menu",
                    IconGlyph { icon: Icon::Menu }
                }
                h2 { class: "c-navbar__title", "{title}" }
            }

            div { class: "c-navbar__center",
                div { class: "c-navbar__search",
                    IconGlyph { icon: Icon::Search, class: "c-navbar__search-icon" }
                    input {
                        r#type: "text",
                        class: "c-input c-navbar__search-input",
                        placeholder: "Search",
                        value: search_query(),
                        oninput: move |evt| search_query.set(evt.value()),
                    }
                    span { class: "c-navbar__shortcut", "⌘ /" }
                }
            }

            div { class: "c-navbar__actions",
                ThemeToggle {}
                button { r#type: "button", class: "c-icon-button", title: "Refresh",
                    IconGlyph { icon: Icon::Refresh }
                }
                button { r#type: "button", class: "c-icon-button", title: "Notifications",
                    IconGlyph { icon: Icon::Bell }
                }
            }
        }
    }
}
