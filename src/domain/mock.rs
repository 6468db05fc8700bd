//! Placeholder figures rendered by the dashboard views.

use crate::domain::models::{
    AdAccount, AdvisorTip, CampaignRow, CampaignStatus, Kpi, ReportRow, Trend, UserProfile,
};

pub const DASHBOARD_KPIS: &[Kpi] = &[
    Kpi { label: "Ad Spend", value: "124 500 DA", delta: "+8.2%", trend: Trend::Up },
    Kpi { label: "Impressions", value: "1.2M", delta: "+12.4%", trend: Trend::Up },
    Kpi { label: "Clicks", value: "38 910", delta: "-1.3%", trend: Trend::Down },
    Kpi { label: "ROAS", value: "3.4x", delta: "0.0%", trend: Trend::Flat },
];

pub const CAMPAIGNS: &[CampaignRow] = &[
    CampaignRow {
        name: "Summer Sale - Retargeting",
        platform: "Facebook",
        status: CampaignStatus::Active,
        daily_budget: "4 000 DA",
        ctr: "2.8%",
        roas: "4.1x",
    },
    CampaignRow {
        name: "New Collection - Reels",
        platform: "Instagram",
        status: CampaignStatus::Learning,
        daily_budget: "2 500 DA",
        ctr: "1.9%",
        roas: "2.2x",
    },
    CampaignRow {
        name: "Brand Awareness",
        platform: "Facebook",
        status: CampaignStatus::Paused,
        daily_budget: "1 500 DA",
        ctr: "0.9%",
        roas: "1.1x",
    },
];

pub const AD_ACCOUNTS: &[AdAccount] = &[
    AdAccount {
        account_id: "act_1029384756",
        name: "Main Store",
        platform: "Facebook Ads",
        connected: true,
    },
    AdAccount {
        account_id: "act_5647382910",
        name: "Outlet",
        platform: "Facebook Ads",
        connected: false,
    },
];

pub const REPORT_ROWS: &[ReportRow] = &[
    ReportRow { date: "2025-06-01", spend: "17 200 DA", impressions: "171 000", clicks: "5 430", conversions: "212" },
    ReportRow { date: "2025-06-02", spend: "18 050 DA", impressions: "179 400", clicks: "5 610", conversions: "230" },
    ReportRow { date: "2025-06-03", spend: "16 900 DA", impressions: "165 800", clicks: "5 120", conversions: "198" },
    ReportRow { date: "2025-06-04", spend: "19 300 DA", impressions: "188 200", clicks: "5 990", conversions: "251" },
];

pub const ADVISOR_TIPS: &[AdvisorTip] = &[
    AdvisorTip {
        title: "Shift budget to Reels",
        body: "Reels placements convert 31% cheaper than feed this week. Move 20% of the feed budget.",
    },
    AdvisorTip {
        title: "Refresh creatives",
        body: "Frequency on Brand Awareness passed 4.0. Rotate in new visuals to avoid ad fatigue.",
    },
    AdvisorTip {
        title: "Pause weak ad sets",
        body: "Two ad sets spent over 5 000 DA without a purchase. Pausing them frees budget for winners.",
    },
];

pub const PROFILE: UserProfile = UserProfile {
    display_name: "User",
    email: "demo@example.com",
    plan: "Professional",
    member_since: "January 2025",
};
