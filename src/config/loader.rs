//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheme metadata
//! and yearly rate tables from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, SchemeConfig, SchemeMetadata};

/// Loads and provides access to child support rate tables.
///
/// # Directory Structure
///
/// ```text
/// config/child_support/
/// ├── scheme.yaml          # Scheme metadata
/// └── rates/
///     └── 2024-2025.yaml   # One rate table per financial year
/// ```
///
/// # Example
///
/// ```no_run
/// use child_support_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/child_support").unwrap();
/// let rates = loader.get_rates_for_year("2024-2025").unwrap();
/// println!("Self-support amount: ${}", rates.self_support_amount);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `scheme.yaml` or the `rates` directory is missing,
    /// if any file contains invalid YAML, if any rate table fails
    /// [`RateTable::validate`], or if two files declare the same year.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scheme_path = path.join("scheme.yaml");
        let metadata = Self::load_yaml::<SchemeMetadata>(&scheme_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        debug!(
            scheme = %metadata.code,
            rate_years = rates.len(),
            "Loaded child support configuration"
        );

        Ok(Self {
            config: SchemeConfig::new(metadata, rates),
        })
    }

    /// Builds a loader around a single in-memory rate table.
    pub fn from_rate_table(metadata: SchemeMetadata, rates: RateTable) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self {
            config: SchemeConfig::new(metadata, vec![rates]),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates: Vec<RateTable> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                table.validate()?;

                if rates
                    .iter()
                    .any(|existing| existing.financial_year == table.financial_year)
                {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "duplicate rate table for financial year {}",
                            table.financial_year
                        ),
                    });
                }

                rates.push(table);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Gets the rate table for a financial year label such as "2024-2025".
    pub fn get_rates_for_year(&self, financial_year: &str) -> EngineResult<&RateTable> {
        self.config
            .rates()
            .iter()
            .find(|rt| rt.financial_year == financial_year)
            .ok_or_else(|| EngineError::RateYearNotFound {
                financial_year: financial_year.to_string(),
            })
    }

    /// Gets the rate table in effect on a given date.
    ///
    /// The most recent table whose effective date is on or before `date` wins.
    pub fn get_rates_for_date(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|rt| rt.effective_date <= date)
            .ok_or(EngineError::NoRateForDate { date })
    }

    /// Returns the table with the latest effective date.
    pub fn current_rates(&self) -> EngineResult<&RateTable> {
        self.config.rates().last().ok_or(EngineError::NoRateTables)
    }

    /// Resolves an optional year label, falling back to [`Self::current_rates`].
    pub fn resolve_rates(&self, financial_year: Option<&str>) -> EngineResult<&RateTable> {
        match financial_year {
            Some(year) => self.get_rates_for_year(year),
            None => self.current_rates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/child_support"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "child_support_engine_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("rates")).unwrap();
        fs::copy(
            Path::new(config_path()).join("scheme.yaml"),
            dir.join("scheme.yaml"),
        )
        .unwrap();
        dir
    }

    fn write_rates(dir: &Path, file: &str, table: &RateTable) {
        let yaml = serde_yaml::to_string(table).unwrap();
        fs::write(dir.join("rates").join(file), yaml).unwrap();
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.scheme().code, "CSA-1989");
        assert_eq!(loader.scheme().name, "Child Support (Assessment) Act 1989");
    }

    #[test]
    fn test_yaml_table_matches_builtin_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let loaded = loader.get_rates_for_year("2024-2025").unwrap();
        assert_eq!(loaded, &RateTable::fy_2024_25());
    }

    #[test]
    fn test_unknown_year_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        match loader.get_rates_for_year("1999-2000") {
            Err(EngineError::RateYearNotFound { financial_year }) => {
                assert_eq!(financial_year, "1999-2000");
            }
            other => panic!("Expected RateYearNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rates_for_date_within_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let rates = loader.get_rates_for_date(date).unwrap();
        assert_eq!(rates.financial_year, "2024-2025");
    }

    #[test]
    fn test_rates_for_date_before_any_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match loader.get_rates_for_date(date) {
            Err(EngineError::NoRateForDate { date: d }) => assert_eq!(d, date),
            other => panic!("Expected NoRateForDate, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scheme.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_current_rates_and_date_lookup_across_years() {
        let dir = scratch_dir("two_years");
        let mut next_year = RateTable::fy_2024_25();
        next_year.financial_year = "2025-2026".to_string();
        next_year.effective_date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        next_year.self_support_amount = Decimal::from(30_000);
        write_rates(&dir, "2024-2025.yaml", &RateTable::fy_2024_25());
        write_rates(&dir, "2025-2026.yaml", &next_year);

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.current_rates().unwrap().financial_year, "2025-2026");
        assert_eq!(
            loader
                .get_rates_for_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
                .unwrap()
                .financial_year,
            "2024-2025"
        );
        assert_eq!(
            loader
                .get_rates_for_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
                .unwrap()
                .self_support_amount,
            Decimal::from(30_000)
        );
        assert_eq!(
            loader.resolve_rates(None).unwrap().financial_year,
            "2025-2026"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let dir = scratch_dir("duplicate");
        write_rates(&dir, "a.yaml", &RateTable::fy_2024_25());
        write_rates(&dir, "b.yaml", &RateTable::fy_2024_25());

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_bands_rejected_at_load() {
        let dir = scratch_dir("bad_bands");
        let mut table = RateTable::fy_2024_25();
        table.care_cost_bands.reverse();
        write_rates(&dir, "2024-2025.yaml", &table);

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::InvalidRateTable { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_rates_directory_returns_error() {
        let dir = scratch_dir("empty");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no rate files found"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_scheme_config_has_no_current_rates() {
        let metadata = ConfigLoader::load(config_path()).unwrap().scheme().clone();
        let loader = ConfigLoader {
            config: SchemeConfig::new(metadata, Vec::new()),
        };

        assert!(matches!(loader.current_rates(), Err(EngineError::NoRateTables)));
        assert!(matches!(loader.resolve_rates(None), Err(EngineError::NoRateTables)));
    }
}
