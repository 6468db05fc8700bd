//! Login and signup form state.
//!
//! Nothing here authenticates anyone: submitting logs what was typed and
//! hands back the route the page should move to.

use crate::shared::logging;
use std::fmt;

/// Where a form sends the user after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRedirect {
    Dashboard,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Apple => "Apple",
        }
    }

    /// Social buttons skip straight to the dashboard from either form.
    pub fn sign_in(&self, form: &'static str) -> AuthRedirect {
        logging::log_social_auth(form, self.display_name());
        AuthRedirect::Dashboard
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Input `type` attribute for a password field
pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password { "text" } else { "password" }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub show_password: bool,
}

impl LoginForm {
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_input_type(&self) -> &'static str {
        password_input_type(self.show_password)
    }

    /// Accepts whatever was entered, there is no rejection path.
    pub fn submit(&self) -> AuthRedirect {
        logging::log_login_submitted(&self.email, self.password.len(), self.remember_me);
        AuthRedirect::Dashboard
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub agreed: bool,
    pub show_password: bool,
}

impl SignupForm {
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_input_type(&self) -> &'static str {
        password_input_type(self.show_password)
    }

    pub fn submit(&self) -> AuthRedirect {
        logging::log_signup_submitted(
            &self.username,
            &self.email,
            self.password.len(),
            self.agreed,
        );
        AuthRedirect::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_submit_goes_to_dashboard() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert_eq!(form.submit(), AuthRedirect::Dashboard);
    }

    #[test]
    fn test_login_submit_with_empty_fields_still_redirects() {
        assert_eq!(LoginForm::default().submit(), AuthRedirect::Dashboard);
    }

    #[test]
    fn test_signup_submit_goes_to_login() {
        let form = SignupForm {
            username: "ads-owner".to_string(),
            email: "not-an-email".to_string(),
            password: String::new(),
            agreed: false,
            show_password: false,
        };
        assert_eq!(form.submit(), AuthRedirect::Login);
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut form = LoginForm::default();
        assert_eq!(form.password_input_type(), "password");
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "text");
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn test_social_sign_in_goes_to_dashboard() {
        assert_eq!(SocialProvider::Google.sign_in("login"), AuthRedirect::Dashboard);
        assert_eq!(SocialProvider::Apple.sign_in("signup"), AuthRedirect::Dashboard);
    }
}
