//! Runtime configuration read from the environment (after `.env` is loaded).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::quote::QuoteDefaults;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Prefix for API and form URLs in rendered pages; empty means same origin.
    pub backend_url: String,
    pub db_max_connections: u32,
    pub quote_defaults: QuoteDefaults,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = parse_or(
            "BIND_ADDR",
            lookup("BIND_ADDR"),
            "0.0.0.0:3000".parse::<SocketAddr>().ok(),
        )?;
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), Some(5))?;

        let defaults = QuoteDefaults::default();
        let quote_defaults = QuoteDefaults {
            material_unit_price: price_or(
                "QUOTE_DEFAULT_MATERIAL_PRICE",
                lookup("QUOTE_DEFAULT_MATERIAL_PRICE"),
                defaults.material_unit_price,
            )?,
            install_unit_price: price_or(
                "QUOTE_DEFAULT_INSTALL_PRICE",
                lookup("QUOTE_DEFAULT_INSTALL_PRICE"),
                defaults.install_unit_price,
            )?,
        };

        Ok(Self {
            database_url,
            bind_addr,
            backend_url: normalize_base_url(&lookup("BACKEND_URL").unwrap_or_default()),
            db_max_connections,
            quote_defaults,
            static_dir: lookup("STATIC_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => default.ok_or(ConfigError::Missing(name)),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
            name,
            value: v.to_string(),
        }),
    }
}

fn price_or(
    name: &'static str,
    value: Option<String>,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => {
            let price: Decimal = v.parse().map_err(|_| ConfigError::Invalid {
                name,
                value: v.to_string(),
            })?;
            if price.is_sign_negative() && !price.is_zero() {
                return Err(ConfigError::Invalid {
                    name,
                    value: v.to_string(),
                });
            }
            Ok(price)
        }
    }
}

/// Drop trailing slashes so `{base_url}/path` never doubles them.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/bmw")]))
                .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.backend_url, "");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.quote_defaults, QuoteDefaults::default());
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_database_url_required() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn test_backend_url_trailing_slash_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/bmw"),
            ("BACKEND_URL", "https://api.bookmywallpaper.in/"),
        ]))
        .unwrap();
        assert_eq!(config.backend_url, "https://api.bookmywallpaper.in");
    }

    #[test]
    fn test_quote_price_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/bmw"),
            ("QUOTE_DEFAULT_MATERIAL_PRICE", "175.5"),
            ("QUOTE_DEFAULT_INSTALL_PRICE", " "),
        ]))
        .unwrap();
        assert_eq!(config.quote_defaults.material_unit_price, dec!(175.5));
        assert_eq!(config.quote_defaults.install_unit_price, dec!(40));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        for (name, value) in [
            ("BIND_ADDR", "not-an-addr"),
            ("DB_MAX_CONNECTIONS", "many"),
            ("QUOTE_DEFAULT_MATERIAL_PRICE", "cheap"),
            ("QUOTE_DEFAULT_INSTALL_PRICE", "-1"),
        ] {
            let result = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "postgres://localhost/bmw"),
                (name, value),
            ]));
            assert!(
                matches!(result, Err(ConfigError::Invalid { name: n, .. }) if n == name),
                "{name}={value} should be rejected"
            );
        }
    }
}
