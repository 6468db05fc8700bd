use super::page::PageId;

/// Active dashboard page. Owned by the dashboard layout; the sidebar only
/// ever writes it through [`NavigationState::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_page: PageId,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PageId {
        self.current_page
    }

    /// Accepts a [`PageId`] or any string-like identifier, coercing unknown
    /// values to the dashboard. Returns the page that was stored.
    pub fn set(&mut self, page: impl AsRef<str>) -> PageId {
        let page = PageId::from_slug(page.as_ref());
        self.current_page = page;
        page
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.current_page == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let state = NavigationState::new();
        assert_eq!(state.current(), PageId::Dashboard);
        assert!(state.is_active(PageId::Dashboard));
    }

    #[test]
    fn test_set_changes_current_page() {
        let mut state = NavigationState::new();
        assert_eq!(state.set(PageId::Campaign), PageId::Campaign);
        assert_eq!(state.current(), PageId::Campaign);
        assert!(!state.is_active(PageId::Dashboard));
    }

    #[test]
    fn test_set_accepts_strings() {
        let mut state = NavigationState::new();
        assert_eq!(state.set("ai"), PageId::Ai);
        assert_eq!(state.set(String::from("profile")), PageId::Profile);
        assert_eq!(state.current(), PageId::Profile);
    }

    #[test]
    fn test_set_unknown_lands_on_dashboard() {
        let mut state = NavigationState::new();
        state.set(PageId::Report);
        assert_eq!(state.set("nope"), PageId::Dashboard);
        assert_eq!(state.current(), PageId::Dashboard);
    }

    #[test]
    fn test_only_the_selected_page_is_active() {
        for target in PageId::ALL {
            let mut state = NavigationState::new();
            state.set(target);

            let active: Vec<PageId> = PageId::ALL
                .into_iter()
                .filter(|page| state.is_active(*page))
                .collect();
            assert_eq!(active, vec![target]);
        }
    }
}
