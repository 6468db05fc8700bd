use crate::app::components::IconGlyph;
use crate::domain::models::Icon;
use crate::shared::hooks::use_theme;
use dioxus::prelude::*;

/// Light/dark switch for the dashboard navbar.
/// Shows the sun while dark (click to go light) and the moon while light.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let is_dark = theme.theme().is_dark();

    let icon = if is_dark { Icon::Sun } else { Icon::Moon };
    let toggle_class = if is_dark {
        "c-icon-button c-theme-toggle c-theme-toggle--dark"
    } else {
        "c-icon-button c-theme-toggle"
    };

    rsx! {
        button {
            r#type: "button",
            class: toggle_class,
            title: "Toggle dark mode",
            onclick: move |_| theme.toggle(),
            IconGlyph { icon }
        }
    }
}
