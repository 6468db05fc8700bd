use crate::app::components::LOGO;
use crate::app::pages::routes::Route;
use crate::config::site;
use crate::domain::models::{
    EntryStyle, Icon, MenuItem, NavigationState, PROFILE_ENTRY, PageId, sidebar_entries,
};
use crate::shared::hooks::use_sidebar_mode;
use crate::shared::logging;
use dioxus::prelude::*;

/// Dashboard sidebar. Reads the navigation state, never writes it directly:
/// clicks go through `on_page_change`.
#[component]
pub fn Sidebar(navigation: NavigationState, on_page_change: EventHandler<PageId>) -> Element {
    let mut mode = use_sidebar_mode();
    let brand = &site().brand;

    let sidebar_class = mode().class();
    let sidebar_state = mode().as_str();
    let expanded = mode().shows_labels();

    rsx! {
        aside {
            class: sidebar_class,
            "data-state": sidebar_state,
            onmouseenter: move |_| {
                let next = mode().on_pointer_enter();
                mode.set(next);
                logging::log_sidebar_transition(next.as_str());
            },
            onmouseleave: move |_| {
                let next = mode().on_pointer_leave();
                mode.set(next);
                logging::log_sidebar_transition(next.as_str());
            },

            div { class: "c-sidebar__inner",
                Link {
                    to: Route::Landing {},
                    class: "c-sidebar__logo",
                    img {
                        src: LOGO,
                        alt: "{brand} Logo",
                        width: "48",
                        height: "48",
                    }
                }

                SidebarMenu { navigation, expanded, on_page_change }
            }
        }
    }
}

/// Menu entries followed by the pinned profile entry
#[component]
pub fn SidebarMenu(
    navigation: NavigationState,
    expanded: bool,
    on_page_change: EventHandler<PageId>,
) -> Element {
    rsx! {
        nav { class: "c-sidebar__nav",
            for item in sidebar_entries() {
                SidebarEntry {
                    key: "{item.id}",
                    item: *item,
                    active: navigation.is_active(item.id),
                    pinned: item.id == PROFILE_ENTRY.id,
                    expanded,
                    on_select: on_page_change,
                }
            }
        }
    }
}

#[component]
fn SidebarEntry(
    item: MenuItem,
    active: bool,
    pinned: bool,
    expanded: bool,
    on_select: EventHandler<PageId>,
) -> Element {
    let style = EntryStyle::for_state(active);
    let page = item.id;
    let slug = page.as_str();
    let accent = item.accent.as_str();
    let glyph = item.icon.glyph();
    let button_class = if pinned {
        format!("{} c-sidebar__item--pinned", style.button)
    } else {
        style.button.to_string()
    };
    let icon_class = if item.icon == Icon::Avatar {
        format!("{} c-sidebar__avatar", style.icon)
    } else {
        style.icon.to_string()
    };

    rsx! {
        button {
            r#type: "button",
            class: "{button_class}",
            title: item.label,
            "data-entry": slug,
            "data-accent": accent,
            onclick: move |_| on_select.call(page),
            span { class: "{icon_class}", "{glyph}" }
            if expanded {
                span { class: style.label, "{item.label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn MenuAt(page: PageId, expanded: bool) -> Element {
        let mut navigation = NavigationState::new();
        navigation.set(page);

        rsx! {
            SidebarMenu {
                navigation,
                expanded,
                on_page_change: move |_: PageId| {},
            }
        }
    }

    fn render_menu(page: PageId, expanded: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            MenuAt,
            MenuAtProps::builder().page(page).expanded(expanded).build(),
        );
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    /// `data-entry` slugs of the buttons rendered with the active class
    fn active_entries(html: &str) -> Vec<String> {
        html.split("<button")
            .skip(1)
            .filter(|button| button.contains("c-sidebar__item--active"))
            .filter_map(|button| {
                let start = button.find("data-entry=\"")? + "data-entry=\"".len();
                let end = button[start..].find('"')?;
                Some(button[start..start + end].to_string())
            })
            .collect()
    }

    #[test]
    fn test_exactly_the_selected_entry_is_active() {
        for page in PageId::ALL {
            let html = render_menu(page, false);
            assert_eq!(active_entries(&html), vec![page.as_str()], "{html}");
        }
    }

    #[test]
    fn test_profile_entry_is_pinned_last() {
        let html = render_menu(PageId::Dashboard, false);
        let buttons: Vec<&str> = html.split("<button").skip(1).collect();

        assert_eq!(buttons.len(), 6);
        let last = buttons[buttons.len() - 1];
        assert!(last.contains("data-entry=\"profile\""));
        assert!(last.contains("c-sidebar__item--pinned"));
        assert_eq!(html.matches("c-sidebar__item--pinned").count(), 1);
    }

    #[test]
    fn test_labels_follow_expanded_flag() {
        let collapsed = render_menu(PageId::Report, false);
        assert!(!collapsed.contains("c-sidebar__label"));

        let expanded = render_menu(PageId::Report, true);
        assert_eq!(expanded.matches("c-sidebar__label\"").count(), 5);
        assert!(expanded.contains("c-sidebar__label c-sidebar__label--active"));
    }
}
