//! Structured logging for Advise AI Web
//!
//! Every UI event worth tracing goes through one of these helpers so the
//! `operation` field stays consistent across pages.

/// Operation tags attached to every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    PageChange,
    Sidebar,
    LoginSubmit,
    SignupSubmit,
    SocialAuth,
    RouteNavigation,
    Theme,
    SiteConfig,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::PageChange => "page_change",
            LogOperation::Sidebar => "sidebar",
            LogOperation::LoginSubmit => "login_submit",
            LogOperation::SignupSubmit => "signup_submit",
            LogOperation::SocialAuth => "social_auth",
            LogOperation::RouteNavigation => "route_navigation",
            LogOperation::Theme => "theme",
            LogOperation::SiteConfig => "site_config",
        }
    }
}

/// Log a dashboard sub-page switch
pub fn log_page_change(from: &str, to: &str) {
    tracing::debug!(
        operation = LogOperation::PageChange.as_str(),
        from = from,
        to = to,
        "Dashboard page changed"
    );
}

/// Log sidebar collapse/expand
pub fn log_sidebar_transition(mode: &str) {
    tracing::trace!(
        operation = LogOperation::Sidebar.as_str(),
        mode = mode,
        "Sidebar transition"
    );
}

/// Log login form submission. The password itself is never logged.
pub fn log_login_submitted(email: &str, password_len: usize, remember_me: bool) {
    tracing::info!(
        operation = LogOperation::LoginSubmit.as_str(),
        email = email,
        password_len = password_len,
        remember_me = remember_me,
        "Login submitted"
    );
}

/// Log signup form submission. The password itself is never logged.
pub fn log_signup_submitted(username: &str, email: &str, password_len: usize, agreed: bool) {
    tracing::info!(
        operation = LogOperation::SignupSubmit.as_str(),
        username = username,
        email = email,
        password_len = password_len,
        agreed = agreed,
        "Sign up submitted"
    );
}

/// Log a Google/Apple button click
pub fn log_social_auth(form: &str, provider: &str) {
    tracing::info!(
        operation = LogOperation::SocialAuth.as_str(),
        form = form,
        provider = provider,
        "Social sign-in clicked"
    );
}

/// Log a client-side route change triggered from code
pub fn log_route_navigation(target: &str) {
    tracing::debug!(
        operation = LogOperation::RouteNavigation.as_str(),
        target = target,
        "Navigating"
    );
}

/// Log theme flag flip
pub fn log_theme_change(theme: &str) {
    tracing::debug!(
        operation = LogOperation::Theme.as_str(),
        theme = theme,
        "Theme changed"
    );
}

/// Log that embedded site content could not be used
pub fn log_site_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::SiteConfig.as_str(),
        error = error,
        "Embedded site content rejected, using built-in fallback"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::PageChange.as_str(), "page_change");
        assert_eq!(LogOperation::Sidebar.as_str(), "sidebar");
        assert_eq!(LogOperation::LoginSubmit.as_str(), "login_submit");
        assert_eq!(LogOperation::SignupSubmit.as_str(), "signup_submit");
        assert_eq!(LogOperation::SocialAuth.as_str(), "social_auth");
        assert_eq!(LogOperation::RouteNavigation.as_str(), "route_navigation");
        assert_eq!(LogOperation::Theme.as_str(), "theme");
        assert_eq!(LogOperation::SiteConfig.as_str(), "site_config");
    }
}
