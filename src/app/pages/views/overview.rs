use super::ViewHeader;
use crate::app::components::{Card, KpiCard};
use crate::domain::mock::{CAMPAIGNS, DASHBOARD_KPIS};
use crate::domain::models::CampaignStatus;

use dioxus::prelude::*;

#[component]
pub fn DashboardPage() -> Element {
    let active_campaigns = CAMPAIGNS
        .iter()
        .filter(|campaign| campaign.status == CampaignStatus::Active)
        .count();
    let total_campaigns = CAMPAIGNS.len();

    rsx! {
        section { class: "c-view", "data-page": "dashboard",
            ViewHeader {
                title: "Dashboard",
                subtitle: "Performance across all connected ad accounts, last 7 days",
            }

            div { class: "c-kpi-grid",
                for kpi in DASHBOARD_KPIS.iter() {
                    KpiCard { key: "{kpi.label}", kpi: *kpi }
                }
            }

            Card { title: "Campaigns".to_string(),
                p { class: "c-view__note", "{active_campaigns} of {total_campaigns} campaigns running" }
                ul { class: "c-list",
                    for campaign in CAMPAIGNS.iter() {
                        li { key: "{campaign.name}", class: "c-list__item",
                            span { class: "c-list__primary", "{campaign.name}" }
                            span { class: campaign.status.class(), {campaign.status.label()} }
                        }
                    }
                }
            }
        }
    }
}
