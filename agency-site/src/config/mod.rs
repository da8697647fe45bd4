use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub common: core_config::Config,
    pub store: StoreConfig,
    pub cors: CorsConfig,
}

/// Connection settings for the hosted REST database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: Option<String>,
    pub api_key: Option<Secret<String>>,
    pub contact_table: String,
    pub consent_table: String,
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Both credentials present and non-empty.
    pub fn is_configured(&self) -> bool {
        let has_url = self.url.as_deref().is_some_and(|u| !u.trim().is_empty());
        let has_key = self
            .api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty());
        has_url && has_key
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl SiteConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(SiteConfig {
            common: common_config,
            store: StoreConfig {
                url: optional_env("SUPABASE_URL"),
                api_key: optional_env("SUPABASE_KEY").map(Secret::new),
                contact_table: get_env("CONTACT_TABLE", "contact_submissions"),
                consent_table: get_env("COOKIE_CONSENT_TABLE", "cookie_consents"),
                timeout_secs: get_env("STORE_TIMEOUT_SECS", "10").parse().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("STORE_TIMEOUT_SECS is invalid: {}", e))
                })?,
            },
            cors: CorsConfig {
                allowed_origins: optional_env("CORS_ALLOWED_ORIGINS")
                    .map(|origins| parse_origins(&origins))
                    .unwrap_or_default(),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
