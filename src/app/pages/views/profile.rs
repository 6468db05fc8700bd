use super::ViewHeader;
use crate::app::components::Card;
use crate::domain::mock::PROFILE;

use dioxus::prelude::*;

#[component]
pub fn ProfilePage() -> Element {
    let initial = PROFILE.initial();

    rsx! {
        section { class: "c-view", "data-page": "profile",
            ViewHeader {
                title: "Profile",
                subtitle: "Your account details",
            }

            Card {
                div { class: "c-profile",
                    div { class: "c-profile__avatar", "{initial}" }
                    dl { class: "c-profile__details",
                        dt { "Name" }
                        dd { "{PROFILE.display_name}" }
                        dt { "Email" }
                        dd { "{PROFILE.email}" }
                        dt { "Plan" }
                        dd { "{PROFILE.plan}" }
                        dt { "Member since" }
                        dd { "{PROFILE.member_since}" }
                    }
                }
            }
        }
    }
}
