//! Service configuration from environment variables
//!
//! `main` loads `.env` through dotenvy before calling [`Config::from_env`].
//! Missing or unparsable values fall back to the defaults.

use std::str::FromStr;
use std::time::Duration;

use crate::pricing::models::Currency;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Currency totals are rounded and labelled in
    pub currency: Currency,
    pub catalog_max_capacity: u64,
    pub catalog_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            currency: Currency::default(),
            catalog_max_capacity: 1000,
            catalog_ttl: Duration::from_secs(60 * 60),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env("HOST").unwrap_or(defaults.host),
            port: parse_or(env("PORT"), defaults.port),
            currency: Currency::new(
                env("CURRENCY")
                    .map(|c| c.to_uppercase())
                    .unwrap_or(defaults.currency.code),
                parse_or(env("CURRENCY_MINOR_UNITS"), defaults.currency.minor_units),
            ),
            catalog_max_capacity: parse_or(
                env("CATALOG_MAX_CAPACITY"),
                defaults.catalog_max_capacity,
            ),
            catalog_ttl: Duration::from_secs(parse_or(
                env("CATALOG_TTL_SECS"),
                defaults.catalog_ttl.as_secs(),
            )),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or(Some("9090".to_string()), 8080u16), 9090);
        assert_eq!(parse_or(Some(" 3 ".to_string()), 2u32), 3);
        assert_eq!(parse_or(Some("not-a-port".to_string()), 8080u16), 8080);
        assert_eq!(parse_or(None, 8080u16), 8080);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.currency, Currency::new("USD", 2));
        assert_eq!(config.catalog_ttl, Duration::from_secs(3600));
    }
}
