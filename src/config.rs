//! Marketing content for the landing page.
//!
//! Copy that reads like data (brand, pricing, footer contacts) lives in
//! `assets/site.json`, embedded at compile time and parsed once.

use crate::shared::errors::{AppError, Result};
use crate::shared::logging;
use once_cell::sync::Lazy;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../assets/site.json");

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(e) => {
        logging::log_site_config_fallback(&e.to_string());
        SiteConfig::fallback()
    }
});

/// Embedded site content, parsed on first use
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    #[serde(default)]
    pub hero: HeroCopy,
    #[serde(default)]
    pub how_it_works: SectionCopy,
    #[serde(default)]
    pub pricing: PricingSection,
    #[serde(default)]
    pub footer: FooterContent,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub title: String,
    pub subtitle: String,
    pub advisor_title: String,
    pub advisor_blurb: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SectionCopy {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricingSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
    #[serde(default)]
    pub footnote: String,
    #[serde(default)]
    pub trial_note: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub blurb: String,
    pub price: String,
    /// Empty for quote-based plans
    #[serde(default)]
    pub period: String,
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FooterContent {
    pub download_blurb: String,
    #[serde(default)]
    pub link_groups: Vec<LinkGroup>,
    #[serde(default)]
    pub contact: Vec<String>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkGroup {
    pub title: String,
    pub links: Vec<String>,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            return Err(AppError::InvalidSiteConfig("brand is empty".to_string()));
        }
        if self.pricing.plans.is_empty() {
            return Err(AppError::InvalidSiteConfig("no pricing plans".to_string()));
        }
        if self.pricing.plans.iter().filter(|plan| plan.featured).count() > 1 {
            return Err(AppError::InvalidSiteConfig(
                "more than one featured plan".to_string(),
            ));
        }
        Ok(())
    }

    /// Brand-only content used when the embedded file is unusable
    pub fn fallback() -> Self {
        Self {
            brand: "Advise AI".to_string(),
            hero: HeroCopy::default(),
            how_it_works: SectionCopy::default(),
            pricing: PricingSection::default(),
            footer: FooterContent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_json_is_valid() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config.brand, "Advise AI");
        assert_eq!(config.pricing.plans.len(), 3);
        assert_eq!(
            config
                .pricing
                .plans
                .iter()
                .filter(|plan| plan.featured)
                .map(|plan| plan.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Professional"]
        );
    }

    #[test]
    fn test_site_uses_embedded_content() {
        assert_eq!(site().hero.title, "Take Control of Your Social Media Ads");
    }

    #[test]
    fn test_missing_sections_default() {
        let config = SiteConfig::from_json(
            r#"{
                "brand": "Acme",
                "pricing": {
                    "title": "Pricing",
                    "subtitle": "",
                    "plans": [{
                        "name": "Only",
                        "blurb": "",
                        "price": "Free",
                        "features": [],
                        "cta": "Go"
                    }]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.hero, HeroCopy::default());
        assert!(config.footer.contact.is_empty());
        assert_eq!(config.pricing.plans[0].period, "");
        assert!(!config.pricing.plans[0].featured);
    }

    #[test]
    fn test_rejects_empty_brand() {
        let err = SiteConfig::from_json(r#"{"brand": "  "}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidSiteConfig(_)));
    }

    #[test]
    fn test_rejects_missing_plans() {
        let err = SiteConfig::from_json(r#"{"brand": "Acme"}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidSiteConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppError::SiteConfigParse(_)));
    }

    #[test]
    fn test_fallback_has_brand() {
        let fallback = SiteConfig::fallback();
        assert_eq!(fallback.brand, "Advise AI");
        assert!(fallback.pricing.plans.is_empty());
    }
}
