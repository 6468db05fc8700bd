// One view per dashboard page, all static mock content
pub mod accounts;
pub mod ai_advisor;
pub mod campaign;
pub mod overview;
pub mod profile;
pub mod report;

pub use accounts::AccountsPage;
pub use ai_advisor::AIAdvisorPage;
pub use campaign::CampaignPage;
pub use overview::DashboardPage;
pub use profile::ProfilePage;
pub use report::ReportPage;

use dioxus::prelude::*;

/// Common heading for dashboard views
#[component]
fn ViewHeader(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        header { class: "c-view__header",
            h1 { class: "c-view__title", "{title}" }
            p { class: "c-view__subtitle", "{subtitle}" }
        }
    }
}
