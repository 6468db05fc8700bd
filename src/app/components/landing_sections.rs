//! Marketing sections of the landing page, fed by the embedded site content.

use crate::app::components::{
    AI_ASSISTANT, ANALYTICS_DASHBOARD, Button, ButtonVariant, CAMPAIGN_DASHBOARD, IconGlyph,
    SOCIAL_ADS_CONTROL,
};
use crate::app::pages::routes::{Route, go_to};
use crate::config::{PricingPlan, site};
use crate::domain::models::Icon;
use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    let navigator = navigator();
    let hero = &site().hero;

    rsx! {
        section { class: "c-hero",
            div { class: "c-hero__grid",
                div { class: "c-hero__content",
                    h1 { class: "c-hero__title", "{hero.title}" }
                    p { class: "c-hero__subtitle", "{hero.subtitle}" }

                    div { class: "c-hero__actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| go_to(navigator, Route::Dashboard {}),
                            "Try For Free"
                        }
                        Button { variant: ButtonVariant::Dark, "Watch Demo" }
                    }

                    img {
                        class: "c-hero__stats",
                        src: ANALYTICS_DASHBOARD,
                        alt: "Analytics Dashboard",
                    }
                }

                div { class: "c-hero__visual",
                    img {
                        src: SOCIAL_ADS_CONTROL,
                        alt: "Social Media Ads Control",
                    }
                }

                div { class: "c-hero__advisor",
                    div { class: "c-hero__advisor-visual",
                        img {
                            src: AI_ASSISTANT,
                            alt: "AI Assistant",
                        }
                    }
                    h3 { class: "c-hero__advisor-title", "{hero.advisor_title}" }
                    p { class: "c-hero__advisor-text", "{hero.advisor_blurb}" }
                }
            }
        }
    }
}

#[component]
pub fn HowItWorksSection() -> Element {
    let copy = &site().how_it_works;

    rsx! {
        section { class: "c-section c-section--muted",
            div { class: "c-section__inner",
                header { class: "c-section__header",
                    h2 { class: "c-section__title", "{copy.title}" }
                    p { class: "c-section__subtitle", "{copy.subtitle}" }
                }
                img {
                    class: "c-section__preview",
                    src: CAMPAIGN_DASHBOARD,
                    alt: "Campaign Dashboard",
                }
            }
        }
    }
}

#[component]
pub fn PricingSection() -> Element {
    let pricing = &site().pricing;

    rsx! {
        section { class: "c-section c-section--tinted", id: "pricing",
            div { class: "c-section__inner",
                header { class: "c-section__header",
                    h2 { class: "c-section__title", "{pricing.title}" }
                    p { class: "c-section__subtitle", "{pricing.subtitle}" }
                }

                div { class: "c-pricing",
                    for plan in pricing.plans.iter() {
                        PlanCard { key: "{plan.name}", plan: plan.clone() }
                    }
                }

                div { class: "c-pricing__footer",
                    p { "{pricing.footnote}" }
                    p { class: "c-pricing__trial", "{pricing.trial_note}" }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> Element {
    let (card_class, cta_variant) = if plan.featured {
        ("c-plan c-plan--featured", ButtonVariant::Light)
    } else {
        ("c-plan", ButtonVariant::Muted)
    };

    rsx! {
        div { class: card_class,
            if plan.featured {
                div { class: "c-plan__badge", "MOST POPULAR" }
            }
            h3 { class: "c-plan__name", "{plan.name}" }
            p { class: "c-plan__blurb", "{plan.blurb}" }

            div { class: "c-plan__price",
                span { class: "c-plan__amount", "{plan.price}" }
                if !plan.period.is_empty() {
                    span { class: "c-plan__period", "{plan.period}" }
                }
            }

            ul { class: "c-plan__features",
                for feature in plan.features.iter() {
                    li { key: "{feature}", class: "c-plan__feature",
                        IconGlyph { icon: Icon::Check, class: "c-plan__check" }
                        span { "{feature}" }
                    }
                }
            }

            Button { variant: cta_variant, block: true, "{plan.cta}" }
        }
    }
}
