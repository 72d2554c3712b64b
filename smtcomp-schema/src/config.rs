//! Per-year competition parameters and data file layout
//!
//! [`CompetitionConfig`] holds the values that change from one edition to the
//! next. [`DataFiles`] derives from it the names of the data files tooling
//! reads and writes; it does not touch the filesystem.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Malformed configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Values that contradict each other
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parameters of one competition edition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionConfig {
    /// Year of the edition
    pub current_year: u32,
    /// Oldest year whose results are still consulted
    pub oldest_previous_results: u32,
    /// CPU time limit per benchmark in seconds
    pub timelimit_s: u64,
    /// Memory limit per benchmark in MiB
    pub memlimit_m: u64,
    /// Cores available to each solver run
    pub cpu_cores: u32,
    /// Lower bound on benchmarks selected per logic
    pub min_used_benchmarks: usize,
    /// Fraction of benchmarks selected per logic
    pub ratio_of_used_benchmarks: f64,
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            current_year: 2024,
            oldest_previous_results: 2018,
            timelimit_s: 60,
            memlimit_m: 1024 * 20,
            cpu_cores: 4,
            min_used_benchmarks: 300,
            ratio_of_used_benchmarks: 0.5,
        }
    }
}

impl CompetitionConfig {
    /// Default parameters for the given year
    #[must_use]
    pub fn new(current_year: u32) -> Self {
        Self {
            current_year,
            ..Default::default()
        }
    }

    /// Set the oldest year of previous results
    #[must_use]
    pub fn with_oldest_previous_results(mut self, year: u32) -> Self {
        self.oldest_previous_results = year;
        self
    }

    /// Set the CPU time limit
    #[must_use]
    pub fn with_timelimit(mut self, seconds: u64) -> Self {
        self.timelimit_s = seconds;
        self
    }

    /// Set the memory limit in MiB
    #[must_use]
    pub fn with_memlimit(mut self, mib: u64) -> Self {
        self.memlimit_m = mib;
        self
    }

    /// Set the number of cores per run
    #[must_use]
    pub fn with_cpu_cores(mut self, cores: u32) -> Self {
        self.cpu_cores = cores;
        self
    }

    /// Set the benchmark selection bounds
    #[must_use]
    pub fn with_benchmark_selection(mut self, min_used: usize, ratio: f64) -> Self {
        self.min_used_benchmarks = min_used;
        self.ratio_of_used_benchmarks = ratio;
        self
    }

    /// Years whose results are consulted, oldest first, current excluded
    #[must_use]
    pub fn previous_years(&self) -> Range<u32> {
        self.oldest_previous_results..self.current_year
    }

    /// Check that the values are consistent
    pub fn validate(&self) -> ConfigResult<()> {
        if self.oldest_previous_results > self.current_year {
            return Err(ConfigError::Invalid(format!(
                "oldest_previous_results ({}) is after current_year ({})",
                self.oldest_previous_results, self.current_year
            )));
        }
        if !(0.0..=1.0).contains(&self.ratio_of_used_benchmarks) {
            return Err(ConfigError::Invalid(format!(
                "ratio_of_used_benchmarks must be within [0, 1], got {}",
                self.ratio_of_used_benchmarks
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading competition config: {}", path.display());
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

/// Locations of the data set of one edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    /// Previous single-query results, one file per year
    pub previous_results: Vec<(u32, PathBuf)>,
    /// Benchmark list of the current year
    pub benchmarks: PathBuf,
    /// Cached non-incremental benchmark table
    pub cached_non_incremental_benchmarks: PathBuf,
    /// Cached incremental benchmark table
    pub cached_incremental_benchmarks: PathBuf,
    /// Cached previous results table
    pub cached_previous_results: PathBuf,
}

impl DataFiles {
    /// Derive every data file name under `data`
    #[must_use]
    pub fn new(data: impl AsRef<Path>, config: &CompetitionConfig) -> Self {
        let data = data.as_ref();
        let year = config.current_year;
        Self {
            previous_results: config
                .previous_years()
                .map(|y| (y, data.join(format!("results-sq-{y}.json.gz"))))
                .collect(),
            benchmarks: data.join(format!("benchmarks-{year}.json.gz")),
            cached_non_incremental_benchmarks: data
                .join(format!("benchmarks-non-incremental-{year}.feather")),
            cached_incremental_benchmarks: data.join(format!("benchmarks-incremental-{year}.feather")),
            cached_previous_results: data.join(format!("previous-sq-results-{year}.feather")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompetitionConfig::default();
        assert_eq!(config.current_year, 2024);
        assert_eq!(config.memlimit_m, 20480);
        assert_eq!(config.previous_years(), 2018..2024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = CompetitionConfig::new(2025)
            .with_oldest_previous_results(2020)
            .with_timelimit(1200)
            .with_memlimit(1024)
            .with_cpu_cores(8)
            .with_benchmark_selection(100, 0.25);

        assert_eq!(config.current_year, 2025);
        assert_eq!(config.timelimit_s, 1200);
        assert_eq!(config.memlimit_m, 1024);
        assert_eq!(config.cpu_cores, 8);
        assert_eq!(config.min_used_benchmarks, 100);
        assert_eq!(config.previous_years().count(), 5);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = CompetitionConfig::from_json_str(r#"{"current_year": 2025}"#).unwrap();
        assert_eq!(config.current_year, 2025);
        assert_eq!(config.timelimit_s, 60);

        assert!(matches!(
            CompetitionConfig::from_json_str(r#"{"oldest_previous_results": 3000}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CompetitionConfig::from_json_str(r#"{"ratio_of_used_benchmarks": 1.5}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CompetitionConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_data_files() {
        let files = DataFiles::new("/data", &CompetitionConfig::default());
        assert_eq!(files.previous_results.len(), 6);
        assert_eq!(
            files.previous_results[0],
            (2018, PathBuf::from("/data/results-sq-2018.json.gz"))
        );
        assert_eq!(
            files.previous_results.last().map(|(y, _)| *y),
            Some(2023)
        );
        assert_eq!(files.benchmarks, PathBuf::from("/data/benchmarks-2024.json.gz"));
        assert_eq!(
            files.cached_non_incremental_benchmarks,
            PathBuf::from("/data/benchmarks-non-incremental-2024.feather")
        );
        assert_eq!(
            files.cached_incremental_benchmarks,
            PathBuf::from("/data/benchmarks-incremental-2024.feather")
        );
        assert_eq!(
            files.cached_previous_results,
            PathBuf::from("/data/previous-sq-results-2024.feather")
        );
    }
}
