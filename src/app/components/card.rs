use crate::domain::models::Kpi;
use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    featured: Option<bool>,
    children: Element,
) -> Element {
    let featured = featured.unwrap_or(false);
    let featured_class = if featured { "c-card--featured" } else { "" };

    rsx! {
        div {
            class: "c-card {featured_class}",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h3 {
                        class: "c-card__title",
                        "{title}"
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}

/// Single headline figure with its change versus last period
#[component]
pub fn KpiCard(kpi: Kpi) -> Element {
    let arrow = kpi.trend.arrow();
    let delta_class = kpi.trend.class();

    rsx! {
        div { class: "c-card c-kpi",
            p { class: "c-kpi__label", "{kpi.label}" }
            p { class: "c-kpi__value", "{kpi.value}" }
            p { class: delta_class, "{arrow} {kpi.delta}" }
        }
    }
}
