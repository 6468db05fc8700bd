use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Site content parse error: {0}")]
    SiteConfigParse(#[from] serde_json::Error),

    #[error("Invalid site content: {0}")]
    InvalidSiteConfig(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
