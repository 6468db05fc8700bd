use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Dark,
    Light,
    Muted,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Dark => "c-button--dark",
            ButtonVariant::Light => "c-button--light",
            ButtonVariant::Muted => "c-button--muted",
            ButtonVariant::Ghost => "c-button--ghost",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    /// Stretch to the container width
    #[props(default = false)]
    block: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let disabled = disabled.unwrap_or(false);

    let variant_class = variant.class();
    let block_class = if block { "c-button--block" } else { "" };

    rsx! {
        button {
            r#type: "button",
            class: "c-button {variant_class} {block_class}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
