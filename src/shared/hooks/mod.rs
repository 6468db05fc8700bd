// Custom Dioxus hooks
pub mod use_navigation;
pub mod use_theme;

pub use use_navigation::{use_navigation_state, use_sidebar_mode};
pub use use_theme::{Theme, ThemeState, use_theme, use_theme_provider};
