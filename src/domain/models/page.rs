//! Dashboard page identifiers and the static sidebar menu table.

use std::fmt;
use std::str::FromStr;

/// Closed set of dashboard views. `Dashboard` is both the initial page and
/// the fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Dashboard,
    Report,
    Ai,
    Accounts,
    Campaign,
    Profile,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Dashboard,
        PageId::Report,
        PageId::Ai,
        PageId::Accounts,
        PageId::Campaign,
        PageId::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Report => "report",
            PageId::Ai => "ai",
            PageId::Accounts => "accounts",
            PageId::Campaign => "campaign",
            PageId::Profile => "profile",
        }
    }

    /// Total conversion from a raw identifier. Unknown slugs land on the dashboard.
    pub fn from_slug(slug: &str) -> PageId {
        match slug {
            "dashboard" => PageId::Dashboard,
            "report" => PageId::Report,
            "ai" => PageId::Ai,
            "accounts" => PageId::Accounts,
            "campaign" => PageId::Campaign,
            "profile" => PageId::Profile,
            _ => PageId::Dashboard,
        }
    }

    /// Human title shown in the page header.
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Report => "Report",
            PageId::Ai => "AI Advisor",
            PageId::Accounts => "Accounts",
            PageId::Campaign => "Campaign",
            PageId::Profile => "Profile",
        }
    }
}

impl FromStr for PageId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PageId::from_slug(s))
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic icon reference, resolved to a glyph at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    BarChart,
    FileText,
    Brain,
    CreditCard,
    TrendingUp,
    Avatar,
    Menu,
    Search,
    Sun,
    Moon,
    Refresh,
    Bell,
    Upload,
    Save,
    Share,
    Undo,
    Redo,
    Eye,
    EyeOff,
    Check,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::BarChart => "📊",
            Icon::FileText => "📄",
            Icon::Brain => "🧠",
            Icon::CreditCard => "💳",
            Icon::TrendingUp => "📈",
            Icon::Avatar => "U",
            Icon::Menu => "☰",
            Icon::Search => "🔍",
            Icon::Sun => "☀️",
            Icon::Moon => "🌙",
            Icon::Refresh => "↻",
            Icon::Bell => "🔔",
            Icon::Upload => "⬆",
            Icon::Save => "💾",
            Icon::Share => "🔗",
            Icon::Undo => "↶",
            Icon::Redo => "↷",
            Icon::Eye => "👁",
            Icon::EyeOff => "🙈",
            Icon::Check => "✓",
        }
    }
}

/// Per-entry accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Indigo,
    Green,
    Orange,
    Gray,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Indigo => "indigo",
            Accent::Green => "green",
            Accent::Orange => "orange",
            Accent::Gray => "gray",
        }
    }
}

/// Static sidebar entry descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: PageId,
    pub label: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

/// Primary navigation, in display order. Profile is not part of this table.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        id: PageId::Dashboard,
        label: "Dashboard",
        icon: Icon::BarChart,
        accent: Accent::Blue,
    },
    MenuItem {
        id: PageId::Report,
        label: "Report",
        icon: Icon::FileText,
        accent: Accent::Purple,
    },
    MenuItem {
        id: PageId::Ai,
        label: "AI Advisor",
        icon: Icon::Brain,
        accent: Accent::Indigo,
    },
    MenuItem {
        id: PageId::Accounts,
        label: "Accounts",
        icon: Icon::CreditCard,
        accent: Accent::Green,
    },
    MenuItem {
        id: PageId::Campaign,
        label: "Campaign",
        icon: Icon::TrendingUp,
        accent: Accent::Orange,
    },
];

/// Profile affordance, pinned below the primary menu.
pub const PROFILE_ENTRY: MenuItem = MenuItem {
    id: PageId::Profile,
    label: "Profile",
    icon: Icon::Avatar,
    accent: Accent::Gray,
};

/// Every selectable sidebar entry in render order, profile last.
pub fn sidebar_entries() -> impl Iterator<Item = &'static MenuItem> {
    MENU_ITEMS.iter().chain(std::iter::once(&PROFILE_ENTRY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_round_trips_through_slug() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_slug(page.as_str()), page);
            assert_eq!(page.to_string(), page.as_str());
        }
    }

    #[test]
    fn test_unknown_slug_falls_back_to_dashboard() {
        assert_eq!(PageId::from_slug("settings"), PageId::Dashboard);
        assert_eq!(PageId::from_slug(""), PageId::Dashboard);
        assert_eq!(PageId::from_slug("Report"), PageId::Dashboard);
        assert_eq!("billing".parse::<PageId>(), Ok(PageId::Dashboard));
    }

    #[test]
    fn test_default_page_is_dashboard() {
        assert_eq!(PageId::default(), PageId::Dashboard);
    }

    #[test]
    fn test_menu_order_and_profile_pinned_last() {
        let ids: Vec<PageId> = sidebar_entries().map(|item| item.id).collect();
        assert_eq!(
            ids,
            vec![
                PageId::Dashboard,
                PageId::Report,
                PageId::Ai,
                PageId::Accounts,
                PageId::Campaign,
                PageId::Profile,
            ]
        );
        assert!(MENU_ITEMS.iter().all(|item| item.id != PageId::Profile));
    }

    #[test]
    fn test_menu_accents() {
        let accents: Vec<&str> = MENU_ITEMS.iter().map(|item| item.accent.as_str()).collect();
        assert_eq!(accents, vec!["blue", "purple", "indigo", "green", "orange"]);
    }
}
