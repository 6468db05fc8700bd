use crate::domain::models::{NavigationState, SidebarMode};
use dioxus::prelude::*;

/// Navigation state cell for the dashboard shell. Call once, in the layout
/// that owns it, and hand the signal's setter down to the sidebar.
pub fn use_navigation_state() -> Signal<NavigationState> {
    use_signal(NavigationState::new)
}

/// Local hover-expand state for one sidebar instance
pub fn use_sidebar_mode() -> Signal<SidebarMode> {
    use_signal(SidebarMode::default)
}
