use super::ViewHeader;
use crate::app::components::ReportHeader;
use crate::domain::mock::REPORT_ROWS;

use dioxus::prelude::*;

#[component]
pub fn ReportPage() -> Element {
    rsx! {
        section { class: "c-view", "data-page": "report",
            ReportHeader {}

            ViewHeader {
                title: "Report",
                subtitle: "Daily delivery for the selected period",
            }

            table { class: "c-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Spend" }
                        th { "Impressions" }
                        th { "Clicks" }
                        th { "Conversions" }
                    }
                }
                tbody {
                    for row in REPORT_ROWS.iter() {
                        tr { key: "{row.date}",
                            td { "{row.date}" }
                            td { "{row.spend}" }
                            td { "{row.impressions}" }
                            td { "{row.clicks}" }
                            td { "{row.conversions}" }
                        }
                    }
                }
            }
        }
    }
}
