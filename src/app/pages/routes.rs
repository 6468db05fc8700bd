use crate::app::pages::{Dashboard, Landing, Login, Signup};
use crate::config::site;
use crate::domain::models::AuthRedirect;
use crate::shared::hooks::use_theme_provider;
use crate::shared::logging;

use dioxus::prelude::*;
use dioxus::router::Navigator;

/// Client-side routes. Dashboard sub-pages are in-memory state, not routes.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<AuthRedirect> for Route {
    fn from(redirect: AuthRedirect) -> Self {
        match redirect {
            AuthRedirect::Dashboard => Route::Dashboard {},
            AuthRedirect::Login => Route::Login {},
        }
    }
}

/// Push a route from an event handler, logging the hop
pub fn go_to(navigator: Navigator, route: Route) {
    logging::log_route_navigation(&route.to_string());
    navigator.push(route);
}

#[component]
pub fn App() -> Element {
    use_theme_provider();

    use_effect(|| {
        tracing::info!("Advise AI app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");
    let brand = &site().brand;

    rsx! {
        document::Title { "{brand}" }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
        Outlet::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "No route matched");

    rsx! {
        div { class: "c-not-found",
            h1 { class: "c-not-found__title", "404" }
            p { class: "c-not-found__text", "Nothing lives at {path}" }
            Link {
                to: Route::Landing {},
                class: "c-button c-button--primary",
                "Back to home"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Signup {}.to_string(), "/signup");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
    }

    #[test]
    fn test_routes_parse_from_paths() {
        assert_eq!("/dashboard".parse::<Route>().ok(), Some(Route::Dashboard {}));
        assert_eq!("/login".parse::<Route>().ok(), Some(Route::Login {}));
    }

    #[test]
    fn test_sub_pages_are_not_routes() {
        assert!(matches!(
            "/report".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }

    #[test]
    fn test_auth_redirect_maps_to_route() {
        assert_eq!(Route::from(AuthRedirect::Dashboard), Route::Dashboard {});
        assert_eq!(Route::from(AuthRedirect::Login).to_string(), "/login");
    }
}
