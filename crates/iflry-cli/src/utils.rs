use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use iflry_config::SiteConfig;
use iflry_core::Locale;
use iflry_loader::ContentStore;

pub use iflry_loader::load_config;

/// Locale requested on the command line, or the configured default.
pub fn pick_locale(config: &SiteConfig, requested: Option<Locale>) -> Locale {
    match requested {
        Some(locale) => {
            if !config.supports(locale) {
                iflry_resolver::diagnostic!("locale '{locale}' is not enabled in iflry.json");
            }
            locale
        }
        None => config.default_locale(),
    }
}

/// Load config and content together; most commands need both.
pub fn load_project() -> Result<(SiteConfig, ContentStore)> {
    let config = load_config()?;
    let store = ContentStore::load(&config)?;
    Ok((config, store))
}

pub fn now_or(at: Option<DateTime<Utc>>) -> DateTime<Utc> {
    at.unwrap_or_else(Utc::now)
}

pub fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}
