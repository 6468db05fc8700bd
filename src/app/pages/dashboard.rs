//! Dashboard shell: owns the active page and swaps views in memory.

use crate::app::layouts::{Navbar, Sidebar};
use crate::app::pages::views::{
    AIAdvisorPage, AccountsPage, CampaignPage, DashboardPage, ProfilePage, ReportPage,
};
use crate::domain::models::PageId;
use crate::shared::hooks::use_navigation_state;
use crate::shared::logging;

use dioxus::prelude::*;

/// View shown in the main area for a given page id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Dashboard,
    Report,
    AiAdvisor,
    Accounts,
    Campaign,
    Profile,
}

impl PageView {
    pub fn for_page(page: PageId) -> PageView {
        match page {
            PageId::Dashboard => PageView::Dashboard,
            PageId::Report => PageView::Report,
            PageId::Ai => PageView::AiAdvisor,
            PageId::Accounts => PageView::Accounts,
            PageId::Campaign => PageView::Campaign,
            PageId::Profile => PageView::Profile,
        }
    }

    pub fn component_name(&self) -> &'static str {
        match self {
            PageView::Dashboard => "DashboardPage",
            PageView::Report => "ReportPage",
            PageView::AiAdvisor => "AIAdvisorPage",
            PageView::Accounts => "AccountsPage",
            PageView::Campaign => "CampaignPage",
            PageView::Profile => "ProfilePage",
        }
    }
}

#[component]
pub fn PageSelector(page: PageId) -> Element {
    let view = PageView::for_page(page);
    tracing::trace!(page = %page, view = view.component_name(), "Selecting dashboard view");

    match view {
        PageView::Dashboard => rsx! { DashboardPage {} },
        PageView::Report => rsx! { ReportPage {} },
        PageView::AiAdvisor => rsx! { AIAdvisorPage {} },
        PageView::Accounts => rsx! { AccountsPage {} },
        PageView::Campaign => rsx! { CampaignPage {} },
        PageView::Profile => rsx! { ProfilePage {} },
    }
}

/// `/dashboard` route. Sole owner and writer of the navigation state.
#[component]
pub fn Dashboard() -> Element {
    let mut navigation = use_navigation_state();
    let state = navigation();
    let current_page = state.current();

    let on_page_change = move |page: PageId| {
        let previous = navigation.peek().current();
        navigation.write().set(page);
        logging::log_page_change(previous.as_str(), page.as_str());
    };

    rsx! {
        div { class: "c-dashboard",
            Sidebar {
                navigation: state,
                on_page_change,
            }

            div { class: "c-dashboard__body",
                Navbar { title: current_page.title() }

                main { class: "c-dashboard__main",
                    PageSelector { page: current_page }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use dioxus::history::{MemoryHistory, provide_history_context};
    use std::rc::Rc;

    #[component]
    fn AppAt(path: String) -> Element {
        use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path(&path))));
        rsx! { App {} }
    }

    fn render_route(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            AppAt,
            AppAtProps::builder().path(path.to_string()).build(),
        );
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    fn render_page(page: PageId) -> String {
        let mut dom = VirtualDom::new_with_props(
            PageSelector,
            PageSelectorProps::builder().page(page).build(),
        );
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    #[test]
    fn test_each_page_maps_to_its_own_view() {
        let expected = [
            (PageId::Dashboard, PageView::Dashboard, "DashboardPage"),
            (PageId::Report, PageView::Report, "ReportPage"),
            (PageId::Ai, PageView::AiAdvisor, "AIAdvisorPage"),
            (PageId::Accounts, PageView::Accounts, "AccountsPage"),
            (PageId::Campaign, PageView::Campaign, "CampaignPage"),
            (PageId::Profile, PageView::Profile, "ProfilePage"),
        ];

        for (page, view, name) in expected {
            assert_eq!(PageView::for_page(page), view);
            assert_eq!(view.component_name(), name);
        }
    }

    #[test]
    fn test_unknown_slug_selects_dashboard_view() {
        let select = |raw: &str| PageView::for_page(PageId::from_slug(raw));
        assert_eq!(select("settings"), PageView::Dashboard);
        assert_eq!(select(""), PageView::Dashboard);
        assert_eq!(select("AI"), PageView::Dashboard);
        assert_eq!(select("campaign"), PageView::Campaign);
    }

    #[test]
    fn test_rendered_view_matches_page() {
        for page in PageId::ALL {
            let html = render_page(page);
            let marker = format!("data-page=\"{}\"", page.as_str());
            assert!(html.contains(&marker), "{page}: {html}");

            for other in PageId::ALL.iter().filter(|other| **other != page) {
                let other_marker = format!("data-page=\"{}\"", other.as_str());
                assert!(!html.contains(&other_marker), "{page} rendered {other}");
            }
        }
    }

    #[test]
    fn test_dashboard_route_mounts_collapsed_sidebar_on_dashboard() {
        let html = render_route("/dashboard");

        assert!(html.contains("data-state=\"collapsed\""), "{html}");
        assert!(!html.contains("data-state=\"expanded\""));
        assert_eq!(html.matches("c-sidebar__item--active").count(), 1, "{html}");
        assert!(html.contains("data-page=\"dashboard\""));
        assert!(html.contains("c-navbar__title"));
    }

    #[test]
    fn test_active_entry_on_mount_is_dashboard() {
        let html = render_route("/dashboard");
        let active = html
            .split("<button")
            .find(|button| button.contains("c-sidebar__item--active"))
            .unwrap_or_default();
        assert!(active.contains("data-entry=\"dashboard\""), "{active}");
    }
}
