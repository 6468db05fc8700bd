use super::ViewHeader;
use crate::domain::mock::AD_ACCOUNTS;

use dioxus::prelude::*;

#[component]
pub fn AccountsPage() -> Element {
    rsx! {
        section { class: "c-view", "data-page": "accounts",
            ViewHeader {
                title: "Accounts",
                subtitle: "Ad accounts linked to your workspace",
            }

            table { class: "c-table",
                thead {
                    tr {
                        th { "Account" }
                        th { "ID" }
                        th { "Platform" }
                        th { "Status" }
                    }
                }
                tbody {
                    for account in AD_ACCOUNTS.iter() {
                        tr { key: "{account.account_id}",
                            td { "{account.name}" }
                            td { class: "c-table__mono", "{account.account_id}" }
                            td { "{account.platform}" }
                            td {
                                if account.connected {
                                    span { class: "c-badge c-badge--success", "Connected" }
                                } else {
                                    span { class: "c-badge c-badge--muted", "Disconnected" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
