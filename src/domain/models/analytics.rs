//! Read-only shapes for the mock figures shown in the dashboard views.

/// Direction of a KPI compared to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "■",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Trend::Up => "c-kpi__delta c-kpi__delta--up",
            Trend::Down => "c-kpi__delta c-kpi__delta--down",
            Trend::Flat => "c-kpi__delta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
    Learning,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Learning => "Learning",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "c-badge c-badge--success",
            CampaignStatus::Paused => "c-badge c-badge--muted",
            CampaignStatus::Learning => "c-badge c-badge--warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignRow {
    pub name: &'static str,
    pub platform: &'static str,
    pub status: CampaignStatus,
    pub daily_budget: &'static str,
    pub ctr: &'static str,
    pub roas: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdAccount {
    pub account_id: &'static str,
    pub name: &'static str,
    pub platform: &'static str,
    pub connected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    pub date: &'static str,
    pub spend: &'static str,
    pub impressions: &'static str,
    pub clicks: &'static str,
    pub conversions: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorTip {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: &'static str,
    pub email: &'static str,
    pub plan: &'static str,
    pub member_since: &'static str,
}

impl UserProfile {
    /// Single uppercase letter for the avatar bubble
    pub fn initial(&self) -> char {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_initial() {
        let profile = UserProfile {
            display_name: "maria",
            email: "maria@example.com",
            plan: "Starter",
            member_since: "2025",
        };
        assert_eq!(profile.initial(), 'M');

        let anonymous = UserProfile { display_name: "", ..profile };
        assert_eq!(anonymous.initial(), 'U');
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(CampaignStatus::Active.label(), "Active");
        assert!(CampaignStatus::Paused.class().contains("--muted"));
        assert_eq!(Trend::Down.arrow(), "▼");
    }
}
