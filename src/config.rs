//! Configuration loaded from the environment
//!
//! Variables (a `.env` file is honored):
//! - `BOARDING_RATE_TABLE`: path to a JSON rate table (built-in table if unset)
//! - `BOARDING_TAX_RATE`: decimal override for the table's tax rate
//! - `BOARDING_AVAILABILITY_TTL_SECS`: how long published availability stays valid
//! - `BOARDING_AVAILABILITY_CAPACITY`: max days held in the availability cache

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::pricing::RateTable;

pub const RATE_TABLE_VAR: &str = "BOARDING_RATE_TABLE";
pub const TAX_RATE_VAR: &str = "BOARDING_TAX_RATE";
pub const AVAILABILITY_TTL_VAR: &str = "BOARDING_AVAILABILITY_TTL_SECS";
pub const AVAILABILITY_CAPACITY_VAR: &str = "BOARDING_AVAILABILITY_CAPACITY";

const DEFAULT_AVAILABILITY_TTL: Duration = Duration::from_secs(15 * 60);
/// Two years of days
const DEFAULT_AVAILABILITY_CAPACITY: u64 = 730;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rate table {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Invalid rate table: {message}")]
    InvalidTable { message: String, errors: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct BoardingConfig {
    pub rate_table: RateTable,
    pub availability_ttl: Duration,
    pub availability_capacity: u64,
}

impl Default for BoardingConfig {
    fn default() -> Self {
        Self {
            rate_table: RateTable::default(),
            availability_ttl: DEFAULT_AVAILABILITY_TTL,
            availability_capacity: DEFAULT_AVAILABILITY_CAPACITY,
        }
    }
}

impl BoardingConfig {
    /// Load from process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(RATE_TABLE_VAR) {
            config.rate_table = load_rate_table(Path::new(&path))?;
            info!("Loaded rate table from {}", path);
        }

        if let Some(value) = lookup(TAX_RATE_VAR) {
            config.rate_table.tax_rate = parse_var(TAX_RATE_VAR, &value)?;
        }

        if let Some(value) = lookup(AVAILABILITY_TTL_VAR) {
            config.availability_ttl = Duration::from_secs(parse_var(AVAILABILITY_TTL_VAR, &value)?);
        }

        if let Some(value) = lookup(AVAILABILITY_CAPACITY_VAR) {
            config.availability_capacity = parse_var(AVAILABILITY_CAPACITY_VAR, &value)?;
        }

        check_table(&config.rate_table)?;

        info!(
            "Boarding config: tax rate {}, {} nightly rates, {} packages",
            config.rate_table.tax_rate,
            config.rate_table.nightly_rates.len(),
            config.rate_table.packages.len()
        );
        Ok(config)
    }
}

/// Read and validate a JSON rate table
pub fn load_rate_table(path: &Path) -> Result<RateTable, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: RateTable = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    check_table(&table)?;
    Ok(table)
}

fn check_table(table: &RateTable) -> Result<(), ConfigError> {
    let errors = table.validate();
    if errors.is_empty() {
        return Ok(());
    }
    Err(ConfigError::InvalidTable {
        message: format!("{} problem(s), first: {}", errors.len(), errors[0]),
        errors,
    })
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pawstay-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = BoardingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.rate_table, RateTable::default());
        assert_eq!(config.availability_ttl, Duration::from_secs(900));
        assert_eq!(config.availability_capacity, 730);
    }

    #[test]
    fn test_overrides() {
        let config = BoardingConfig::from_lookup(lookup(&[
            (TAX_RATE_VAR, "0.07"),
            (AVAILABILITY_TTL_VAR, "60"),
            (AVAILABILITY_CAPACITY_VAR, " 90 "),
        ]))
        .unwrap();
        assert_eq!(config.rate_table.tax_rate, dec!(0.07));
        assert_eq!(config.availability_ttl, Duration::from_secs(60));
        assert_eq!(config.availability_capacity, 90);
    }

    #[test]
    fn test_invalid_value() {
        let err = BoardingConfig::from_lookup(lookup(&[(TAX_RATE_VAR, "six percent")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: TAX_RATE_VAR, .. }));
    }

    #[test]
    fn test_negative_tax_rejected() {
        let err = BoardingConfig::from_lookup(lookup(&[(TAX_RATE_VAR, "-0.05")])).unwrap_err();
        match err {
            ConfigError::InvalidTable { errors, .. } => {
                assert!(errors[0].contains("tax_rate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rate_table_file() {
        let path = temp_file(
            "rates.json",
            r#"{
                "currency": "USD",
                "tax_rate": "0.05",
                "nightly_rates": [
                    {"pet_type": "cat", "pet_count": "one", "rate": "30"},
                    {"pet_type": "dog", "dog_size": "small", "pet_count": "one", "rate": "45"}
                ],
                "packages": [
                    {"pet_type": "cat", "pet_count": "one", "min_nights": 14, "base_price": "350"}
                ]
            }"#,
        );
        let config =
            BoardingConfig::from_lookup(lookup(&[(RATE_TABLE_VAR, path.to_str().unwrap())])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.rate_table.tax_rate, dec!(0.05));
        assert_eq!(config.rate_table.nightly_rates.len(), 2);
        assert_eq!(config.rate_table.packages[0].min_nights, 14);
    }

    #[test]
    fn test_missing_rate_table_file() {
        let err = BoardingConfig::from_lookup(lookup(&[(
            RATE_TABLE_VAR,
            "/nonexistent/pawstay/rates.json",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_rate_table_file() {
        let path = temp_file("broken.json", "{ not json");
        let err = load_rate_table(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
