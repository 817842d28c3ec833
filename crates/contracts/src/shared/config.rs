//! Application configuration
//!
//! The dashboard has no config files on disk; settings come from the TOML document
//! embedded below and are handed to components through context.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub table: TableConfig,
    pub drawer: DrawerConfig,
    pub login: LoginConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    /// Route the shell falls back to for unknown paths
    pub home_route: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DrawerConfig {
    /// Delay between starting the close animation and unmounting the drawer
    pub close_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoginConfig {
    /// The only OTP the login gate accepts
    pub demo_otp: String,
    pub resend_seconds: u32,
    pub country_codes: Vec<CountryCode>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CountryCode {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("default page size {0} is not one of the page size options")]
    UnknownPageSize(usize),

    #[error("login.demo_otp must be {expected} digits")]
    InvalidOtp { expected: usize },

    #[error("login.country_codes must not be empty")]
    NoCountryCodes,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Plot Admin"
home_route = "/layouts"

[table]
page_size_options = [10, 20, 50]
default_page_size = 10

[drawer]
close_delay_ms = 300

[login]
demo_otp = "123456"
resend_seconds = 30
country_codes = [
    { code = "+91", label = "🇮🇳 +91" },
    { code = "+1", label = "🇺🇸 +1" },
]
"#;

/// Load the embedded configuration
pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

/// Parse and check a configuration document
pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self
            .table
            .page_size_options
            .contains(&self.table.default_page_size)
        {
            return Err(ConfigError::UnknownPageSize(self.table.default_page_size));
        }
        let otp_len = crate::system::auth::OTP_DIGITS;
        if self.login.demo_otp.len() != otp_len
            || !self.login.demo_otp.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidOtp { expected: otp_len });
        }
        if self.login.country_codes.is_empty() {
            return Err(ConfigError::NoCountryCodes);
        }
        Ok(())
    }
}
