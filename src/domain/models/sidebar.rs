//! Sidebar hover-expand state machine and entry highlighting.

/// Width state of the dashboard sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarMode {
    #[default]
    Collapsed,
    Expanded,
}

impl SidebarMode {
    pub fn on_pointer_enter(self) -> SidebarMode {
        SidebarMode::Expanded
    }

    pub fn on_pointer_leave(self) -> SidebarMode {
        SidebarMode::Collapsed
    }

    /// Labels are only rendered next to icons when expanded
    pub fn shows_labels(&self) -> bool {
        matches!(self, SidebarMode::Expanded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarMode::Collapsed => "collapsed",
            SidebarMode::Expanded => "expanded",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            SidebarMode::Collapsed => "c-sidebar c-sidebar--collapsed",
            SidebarMode::Expanded => "c-sidebar c-sidebar--expanded",
        }
    }
}

/// CSS classes for one sidebar entry. Depends only on whether the entry is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStyle {
    pub button: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl EntryStyle {
    const ACTIVE: EntryStyle = EntryStyle {
        button: "c-sidebar__item c-sidebar__item--active",
        icon: "c-sidebar__icon c-sidebar__icon--active",
        label: "c-sidebar__label c-sidebar__label--active",
    };

    const IDLE: EntryStyle = EntryStyle {
        button: "c-sidebar__item",
        icon: "c-sidebar__icon",
        label: "c-sidebar__label",
    };

    pub fn for_state(is_active: bool) -> EntryStyle {
        if is_active { Self::ACTIVE } else { Self::IDLE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_collapsed() {
        let mode = SidebarMode::default();
        assert_eq!(mode, SidebarMode::Collapsed);
        assert!(!mode.shows_labels());
    }

    #[test]
    fn test_pointer_enter_then_leave() {
        let mode = SidebarMode::default().on_pointer_enter();
        assert_eq!(mode, SidebarMode::Expanded);
        assert!(mode.shows_labels());

        let mode = mode.on_pointer_leave();
        assert_eq!(mode, SidebarMode::Collapsed);
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mode = SidebarMode::Expanded.on_pointer_enter();
        assert_eq!(mode, SidebarMode::Expanded);
        let mode = SidebarMode::Collapsed.on_pointer_leave();
        assert_eq!(mode, SidebarMode::Collapsed);
    }

    #[test]
    fn test_entry_style_classes() {
        let active = EntryStyle::for_state(true);
        assert!(active.button.contains("--active"));
        assert!(active.icon.contains("--active"));

        let idle = EntryStyle::for_state(false);
        assert_eq!(idle.button, "c-sidebar__item");
        assert_ne!(idle, active);
    }
}
