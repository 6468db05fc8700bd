use crate::app::components::{HeroSection, HowItWorksSection, PricingSection};
use crate::app::layouts::{LandingFooter, LandingNavbar};
use dioxus::prelude::*;

/// `/` route: marketing page
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "c-landing",
            LandingNavbar {}
            HeroSection {}
            HowItWorksSection {}
            PricingSection {}
            LandingFooter {}
        }
    }
}
