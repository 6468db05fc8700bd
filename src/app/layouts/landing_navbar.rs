use crate::app::components::LOGO;
use crate::app::pages::routes::Route;
use crate::config::site;
use dioxus::prelude::*;

const SECTION_LINKS: &[&str] = &["Product", "Pricing", "Resources", "Contact"];

#[component]
pub fn LandingNavbar() -> Element {
    let site = site();

    rsx! {
        nav { class: "c-landing-nav",
            div { class: "c-landing-nav__inner",
                Link {
                    to: Route::Landing {},
                    class: "c-landing-nav__brand",
                    img {
                        class: "c-landing-nav__logo",
                        src: LOGO,
                        alt: "{site.brand}",
                        width: "40",
                        height: "40",
                    }
                    span { class: "c-landing-nav__name", "{site.brand}" }
                }

                div { class: "c-landing-nav__links",
                    for label in SECTION_LINKS.iter() {
                        a { key: "{label}", href: "#", class: "c-landing-nav__link", "{label}" }
                    }
                }

                div { class: "c-landing-nav__auth",
                    Link {
                        to: Route::Login {},
                        class: "c-landing-nav__link",
                        "Login"
                    }
                    Link {
                        to: Route::Signup {},
                        class: "c-button c-button--primary c-button--pill",
                        "Sign Up"
                    }
                }
            }
        }
    }
}
