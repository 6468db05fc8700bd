use crate::app::components::{IconGlyph, LOGO, provider_logo};
use crate::app::pages::routes::{Route, go_to};
use crate::config::site;
use crate::domain::models::{Icon, SocialProvider, password_input_type};
use dioxus::prelude::*;

/// Centered card shared by the sign-in and sign-up pages
#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Element) -> Element {
    let site = site();

    rsx! {
        div { class: "c-auth",
            div { class: "c-auth__card",
                div { class: "c-auth__logo",
                    img {
                        src: LOGO,
                        alt: "{site.brand} Logo",
                        width: "64",
                        height: "64",
                    }
                }
                h1 { class: "c-auth__title", "{title}" }
                p { class: "c-auth__subtitle", "{subtitle}" }
                {children}
            }
        }
    }
}

/// Password input with a show/hide button
#[component]
pub fn PasswordField(
    value: String,
    visible: bool,
    on_input: EventHandler<String>,
    on_toggle: EventHandler<()>,
) -> Element {
    let input_type = password_input_type(visible);
    let icon = if visible { Icon::EyeOff } else { Icon::Eye };
    let reveal_title = if visible { "Hide password" } else { "Show password" };

    rsx! {
        div { class: "c-field",
            label { class: "c-field__label", "Password" }
            div { class: "c-field__password",
                input {
                    r#type: input_type,
                    class: "c-input c-input--pill",
                    placeholder: "••••••••",
                    value: value,
                    oninput: move |evt| on_input.call(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "c-field__reveal",
                    title: reveal_title,
                    onclick: move |_| on_toggle.call(()),
                    IconGlyph { icon }
                }
            }
        }
    }
}

/// "Or" divider followed by the Google and Apple buttons
#[component]
pub fn SocialButtons(form: &'static str) -> Element {
    let navigator = navigator();

    rsx! {
        div { class: "c-auth__divider",
            span { "Or" }
        }
        div { class: "c-auth__social",
            for provider in [SocialProvider::Google, SocialProvider::Apple] {
                button {
                    key: "{provider}",
                    r#type: "button",
                    class: "c-auth__social-button",
                    onclick: move |_| {
                        let redirect = provider.sign_in(form);
                        go_to(navigator, Route::from(redirect));
                    },
                    img {
                        src: provider_logo(provider),
                        alt: provider.display_name(),
                        width: "20",
                        height: "20",
                    }
                    span { {provider.display_name()} }
                }
            }
        }
    }
}
