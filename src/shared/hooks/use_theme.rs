use crate::shared::logging;
use dioxus::prelude::*;
use std::str::FromStr;

/// Light/dark flag for the dashboard chrome
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Get the appropriate default theme based on system preference
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred { Theme::Dark } else { Theme::Light }
    }
}

impl FromStr for Theme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            _ => Ok(Theme::Light), // Default to light
        }
    }
}

/// Shared theme cell, provided once at the app root
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub current: Signal<Theme>,
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        (self.current)()
    }

    pub fn toggle(&mut self) {
        let next = self.theme().toggle();
        self.current.set(next);
        logging::log_theme_change(next.as_str());
        apply_theme_class(next);
    }
}

/// Install the theme context. Starts from the system color scheme in the browser.
pub fn use_theme_provider() -> ThemeState {
    let state = use_context_provider(|| ThemeState {
        current: Signal::new(Theme::default()),
    });

    use_effect(move || {
        let mut current = state.current;
        let system = Theme::system_default(prefers_dark());
        if system != *current.peek() {
            current.set(system);
        }
        apply_theme_class(system);
    });

    state
}

/// Read the theme context installed by [`use_theme_provider`]
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn prefers_dark() -> bool {
    false
}

/// Apply theme CSS class to the document element
#[cfg(target_arch = "wasm32")]
fn apply_theme_class(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_class(_theme: Theme) {
    // No-op outside the browser
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("sepia".parse::<Theme>(), Ok(Theme::Light));
    }

    #[test]
    fn test_system_default() {
        assert_eq!(Theme::system_default(true), Theme::Dark);
        assert_eq!(Theme::system_default(false), Theme::Light);
    }
}
