use super::ViewHeader;
use crate::app::components::{Button, ButtonVariant, Card};
use crate::domain::mock::ADVISOR_TIPS;

use dioxus::prelude::*;

/// Canned reply shown under the question box. No model is called.
pub fn placeholder_answer(question: &str) -> String {
    format!("Placeholder response to: {}", question.trim())
}

#[component]
pub fn AIAdvisorPage() -> Element {
    let mut question = use_signal(String::new);
    let mut answer = use_signal(|| None::<String>);

    let ask = move |_: MouseEvent| {
        let text = question.read().clone();
        if text.trim().is_empty() {
            return;
        }
        answer.set(Some(placeholder_answer(&text)));
        question.set(String::new());
    };

    rsx! {
        section { class: "c-view", "data-page": "ai",
            ViewHeader {
                title: "AI Advisor",
                subtitle: "Suggestions based on this week's campaign data",
            }

            div { class: "c-tip-grid",
                for tip in ADVISOR_TIPS.iter() {
                    Card { key: "{tip.title}", title: tip.title.to_string(),
                        p { class: "c-tip__body", "{tip.body}" }
                    }
                }
            }

            div { class: "c-ask",
                input {
                    r#type: "text",
                    class: "c-input c-ask__input",
                    placeholder: "Ask your advisor anything about your ads...",
                    value: question(),
                    oninput: move |evt| question.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: ask,
                    "Ask"
                }
            }

            if let Some(reply) = answer() {
                p { class: "c-ask__answer", "{reply}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_answer_echoes_question() {
        assert_eq!(
            placeholder_answer("  why is my CPC up? "),
            "Placeholder response to: why is my CPC up?"
        );
    }
}
