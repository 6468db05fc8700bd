pub mod auth_card;
pub mod button;
pub mod card;
pub mod icon;
pub mod images;
pub mod landing_sections;
pub mod report_header;
pub mod theme_toggle;

pub use auth_card::{AuthCard, PasswordField, SocialButtons};
pub use button::{Button, ButtonVariant};
pub use card::{Card, KpiCard};
pub use icon::IconGlyph;
pub use images::{
    AI_ASSISTANT, ANALYTICS_DASHBOARD, CAMPAIGN_DASHBOARD, LOGO, SOCIAL_ADS_CONTROL, provider_logo,
};
pub use landing_sections::{HeroSection, HowItWorksSection, PricingSection};
pub use report_header::ReportHeader;
pub use theme_toggle::ThemeToggle;
