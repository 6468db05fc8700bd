use crate::app::components::{Button, ButtonVariant, IconGlyph};
use crate::domain::models::Icon;
use dioxus::prelude::*;

/// Toolbar above the report table. Buttons are placeholders.
#[component]
pub fn ReportHeader() -> Element {
    rsx! {
        div { class: "c-report-header",
            Button { variant: ButtonVariant::Primary,
                IconGlyph { icon: Icon::Upload }
                "Upload Data"
            }
            Button { variant: ButtonVariant::Ghost,
                IconGlyph { icon: Icon::Save }
                "Save"
            }
            Button { variant: ButtonVariant::Ghost,
                IconGlyph { icon: Icon::Share }
                "Share"
            }

            div { class: "c-report-header__history",
                button { r#type: "button", class: "c-icon-button", title: "Undo",
                    IconGlyph { icon: Icon::Undo }
                }
                button { r#type: "button", class: "c-icon-button", title: "Redo",
                    IconGlyph { icon: Icon::Redo }
                }
            }
        }
    }
}
