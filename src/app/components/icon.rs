use crate::domain::models::Icon;
use dioxus::prelude::*;

/// Renders a symbolic [`Icon`] as its glyph
#[component]
pub fn IconGlyph(icon: Icon, #[props(default = "c-icon")] class: &'static str) -> Element {
    let glyph = icon.glyph();

    rsx! {
        span { class: class, aria_hidden: "true", "{glyph}" }
    }
}
