//! Sign-in and sign-up pages. Submissions log and redirect, nothing is verified.

use crate::app::components::{AuthCard, PasswordField, SocialButtons};
use crate::app::pages::routes::{Route, go_to};
use crate::domain::models::{LoginForm, SignupForm};
use dioxus::prelude::*;

/// `/login` route
#[component]
pub fn Login() -> Element {
    let mut form = use_signal(LoginForm::default);
    let navigator = navigator();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let redirect = form.read().submit();
        go_to(navigator, Route::from(redirect));
    };

    let snapshot = form.read().clone();

    rsx! {
        AuthCard {
            title: "Sign In",
            subtitle: "You can sign into your account using your email or username",

            form { class: "c-auth__form", onsubmit: on_submit,
                div { class: "c-field",
                    label { class: "c-field__label", "Email or User Name" }
                    input {
                        r#type: "text",
                        class: "c-input c-input--pill",
                        placeholder: "Enter your email or user name",
                        value: snapshot.email,
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }

                PasswordField {
                    value: snapshot.password,
                    visible: snapshot.show_password,
                    on_input: move |value: String| form.write().password = value,
                    on_toggle: move |_: ()| form.write().toggle_password_visibility(),
                }

                div { class: "c-auth__row",
                    label { class: "c-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: snapshot.remember_me,
                            onchange: move |evt| form.write().remember_me = evt.checked(),
                        }
                        span { "Remember Me" }
                    }
                    a { href: "#", class: "c-auth__forgot", "Forgot Password?" }
                }

                button { r#type: "submit", class: "c-button c-button--primary c-button--pill c-button--block",
                    "Sign In"
                }
            }

            p { class: "c-auth__switch",
                "Don't have an account? "
                Link { to: Route::Signup {}, class: "c-auth__link", "Sign up" }
            }

            SocialButtons { form: "login" }
        }
    }
}

/// `/signup` route
#[component]
pub fn Signup() -> Element {
    let mut form = use_signal(SignupForm::default);
    let navigator = navigator();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let redirect = form.read().submit();
        go_to(navigator, Route::from(redirect));
    };

    let snapshot = form.read().clone();

    rsx! {
        AuthCard {
            title: "Sign Up",
            subtitle: "You can sign up an account using your personal details",

            form { class: "c-auth__form", onsubmit: on_submit,
                div { class: "c-field",
                    label { class: "c-field__label", "User Name" }
                    input {
                        r#type: "text",
                        class: "c-input c-input--pill",
                        placeholder: "Enter your user name",
                        value: snapshot.username,
                        oninput: move |evt| form.write().username = evt.value(),
                    }
                }

                div { class: "c-field",
                    label { class: "c-field__label", "Email" }
                    input {
                        r#type: "email",
                        class: "c-input c-input--pill",
                        placeholder: "Enter your email address",
                        value: snapshot.email,
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }

                PasswordField {
                    value: snapshot.password,
                    visible: snapshot.show_password,
                    on_input: move |value: String| form.write().password = value,
                    on_toggle: move |_: ()| form.write().toggle_password_visibility(),
                }

                label { class: "c-checkbox c-auth__terms",
                    input {
                        r#type: "checkbox",
                        checked: snapshot.agreed,
                        onchange: move |evt| form.write().agreed = evt.checked(),
                    }
                    span {
                        "I agree to the "
                        a { href: "#", class: "c-auth__link", "Privacy" }
                        " and "
                        a { href: "#", class: "c-auth__link", "Terms" }
                    }
                }

                button { r#type: "submit", class: "c-button c-button--primary c-button--pill c-button--block",
                    "Sign Up"
                }
            }

            p { class: "c-auth__switch",
                "Already have an account? "
                Link { to: Route::Login {}, class: "c-auth__link", "Sign In" }
            }

            SocialButtons { form: "signup" }
        }
    }
}
