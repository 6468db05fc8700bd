//! Bundled images. `asset!` fails the build when a file goes missing, so
//! every `img` in the app points at one of these.

use crate::domain::models::SocialProvider;
use dioxus::prelude::*;

pub const LOGO: Asset = asset!("/assets/images/logo.svg");
pub const ANALYTICS_DASHBOARD: Asset = asset!("/assets/images/analytics-dashboard.svg");
pub const SOCIAL_ADS_CONTROL: Asset = asset!("/assets/images/social-ads-control.svg");
pub const AI_ASSISTANT: Asset = asset!("/assets/images/ai-assistant.svg");
pub const CAMPAIGN_DASHBOARD: Asset = asset!("/assets/images/campaign-dashboard.svg");

const GOOGLE_LOGO: Asset = asset!("/assets/images/google-logo.svg");
const APPLE_LOGO: Asset = asset!("/assets/images/apple-logo.svg");

pub fn provider_logo(provider: SocialProvider) -> Asset {
    match provider {
        SocialProvider::Google => GOOGLE_LOGO,
        SocialProvider::Apple => APPLE_LOGO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const SHIPPED: [&str; 7] = [
        "logo.svg",
        "analytics-dashboard.svg",
        "social-ads-control.svg",
        "ai-assistant.svg",
        "campaign-dashboard.svg",
        "google-logo.svg",
        "apple-logo.svg",
    ];

    #[test]
    fn test_every_image_ships_as_svg() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/images");

        for name in SHIPPED {
            let contents = std::fs::read_to_string(dir.join(name))
                .unwrap_or_else(|err| panic!("{name}: {err}"));
            assert!(contents.trim_start().starts_with("<svg"), "{name} is not an svg");
        }
    }

    #[test]
    fn test_providers_have_their_own_logo() {
        assert_ne!(
            provider_logo(SocialProvider::Google),
            provider_logo(SocialProvider::Apple)
        );
    }
}
