use crate::app::components::LOGO;
use crate::config::site;
use dioxus::prelude::*;

const STORES: &[&str] = &["App Store", "Play Store"];
const SOCIAL: &[(&str, &str)] = &[
    ("Facebook", "f"),
    ("Twitter", "𝕏"),
    ("LinkedIn", "in"),
    ("Instagram", "◎"),
];

#[component]
pub fn LandingFooter() -> Element {
    let site = site();
    let footer = &site.footer;

    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__inner",
                div { class: "c-footer__grid",
                    div { class: "c-footer__brand",
                        div { class: "c-footer__logo",
                            img { src: LOGO, alt: "{site.brand}", width: "40", height: "40" }
                            span { "{site.brand}" }
                        }
                        p { class: "c-footer__text", "{footer.download_blurb}" }
                        div { class: "c-footer__stores",
                            for store in STORES.iter() {
                                button { key: "{store}", r#type: "button", class: "c-footer__store", "{store}" }
                            }
                        }
                    }

                    for group in footer.link_groups.iter() {
                        div { key: "{group.title}", class: "c-footer__column",
                            h4 { class: "c-footer__heading", "{group.title}" }
                            ul {
                                for link in group.links.iter() {
                                    li { key: "{link}",
                                        a { href: "#", class: "c-footer__link", "{link}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "c-footer__column",
                        h4 { class: "c-footer__heading", "Contact" }
                        ul {
                            for line in footer.contact.iter() {
                                li { key: "{line}", class: "c-footer__text", "{line}" }
                            }
                        }
                    }

                    div { class: "c-footer__column",
                        h4 { class: "c-footer__heading", "Social media" }
                        div { class: "c-footer__social",
                            for (name, mark) in SOCIAL.iter() {
                                a { key: "{name}", href: "#", class: "c-footer__social-link", title: "{name}", "{mark}" }
                            }
                        }
                    }
                }

                p { class: "c-footer__copyright", "{footer.copyright}" }
            }
        }
    }
}
