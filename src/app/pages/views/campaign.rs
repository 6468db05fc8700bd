use super::ViewHeader;
use crate::domain::mock::CAMPAIGNS;

use dioxus::prelude::*;

#[component]
pub fn CampaignPage() -> Element {
    rsx! {
        section { class: "c-view", "data-page": "campaign",
            ViewHeader {
                title: "Campaign",
                subtitle: "Budgets and results per campaign",
            }

            table { class: "c-table",
                thead {
                    tr {
                        th { "Campaign" }
                        th { "Platform" }
                        th { "Status" }
                        th { "Daily budget" }
                        th { "CTR" }
                        th { "ROAS" }
                    }
                }
                tbody {
                    for campaign in CAMPAIGNS.iter() {
                        tr { key: "{campaign.name}",
                            td { "{campaign.name}" }
                            td { "{campaign.platform}" }
                            td {
                                span { class: campaign.status.class(), {campaign.status.label()} }
                            }
                            td { "{campaign.daily_budget}" }
                            td { "{campaign.ctr}" }
                            td { "{campaign.roas}" }
                        }
                    }
                }
            }
        }
    }
}
