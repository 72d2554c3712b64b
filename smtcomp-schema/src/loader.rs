//! Batch loading of submission documents
//!
//! Discovers submission files under a directory, then parses and validates
//! them in parallel. A failing document is reported alongside the others and
//! never aborts the batch.

use crate::submission::{Submission, SubmissionError};
use crate::taxonomy::{Track, TrackMap};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Error type for loader operations
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error when walking the directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Walk directory error
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
    /// Thread pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Configuration for the submission loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Root directory to search for submissions
    pub root_dir: PathBuf,
    /// File extension to look for (default: ".json")
    pub extension: String,
    /// Maximum number of files to load (0 means unlimited)
    pub max_files: usize,
    /// Recursive search in subdirectories
    pub recursive: bool,
    /// Number of worker threads (0 = use all available cores)
    pub num_threads: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            extension: ".json".to_string(),
            max_files: 0,
            recursive: true,
            num_threads: 0,
        }
    }
}

impl LoaderConfig {
    /// Create a new config with the given root directory
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Default::default()
        }
    }

    /// Set the extension filter
    #[must_use]
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    /// Set the maximum number of files
    #[must_use]
    pub fn with_max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Set whether to search recursively
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the number of threads
    #[must_use]
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = n;
        self
    }
}

/// A document that could not be turned into a valid submission
#[derive(Debug)]
pub struct LoadFailure {
    /// Document path
    pub path: PathBuf,
    /// Why it was rejected
    pub error: SubmissionError,
}

/// Outcome of loading a batch of documents
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Valid submissions, by path order
    pub loaded: Vec<(PathBuf, Submission)>,
    /// Rejected documents, by path order
    pub failed: Vec<LoadFailure>,
}

impl LoadReport {
    /// Whether every document loaded
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Participation closure of every loaded submission, keyed by name
    #[must_use]
    pub fn closures(&self) -> BTreeMap<String, TrackMap> {
        self.loaded
            .iter()
            .map(|(_, submission)| (submission.name.clone(), submission.resolve()))
            .collect()
    }

    /// Names of the submissions entered in `track`
    #[must_use]
    pub fn entrants(&self, track: Track) -> Vec<&str> {
        self.loaded
            .iter()
            .filter(|(_, s)| s.participations.iter().any(|p| p.tracks.contains(&track)))
            .map(|(_, s)| s.name.as_str())
            .collect()
    }
}

/// Submission loader for discovering and validating submission documents
pub struct SubmissionLoader {
    config: LoaderConfig,
}

impl SubmissionLoader {
    /// Create a new loader with the given configuration
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Create a loader with default configuration for the given directory
    #[must_use]
    pub fn for_directory(dir: impl Into<PathBuf>) -> Self {
        Self::new(LoaderConfig::new(dir))
    }

    /// Discover all submission files matching the configuration, sorted
    pub fn discover(&self) -> LoaderResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        let mut walker = WalkDir::new(&self.config.root_dir).sort_by_file_name();

        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }
            if path
                .extension()
                .is_none_or(|ext| ext != self.config.extension.trim_start_matches('.'))
            {
                continue;
            }

            paths.push(path.to_path_buf());

            if self.config.max_files > 0 && paths.len() >= self.config.max_files {
                break;
            }
        }

        debug!(
            "Discovered {} submission file(s) under {}",
            paths.len(),
            self.config.root_dir.display()
        );
        Ok(paths)
    }

    /// Discover, parse and validate every submission
    pub fn load_all(&self) -> LoaderResult<LoadReport> {
        let paths = self.discover()?;
        self.load_paths(&paths)
    }

    /// Parse and validate the given documents in parallel
    pub fn load_paths(&self, paths: &[PathBuf]) -> LoaderResult<LoadReport> {
        let run = || {
            paths
                .par_iter()
                .map(|path| (path.clone(), Submission::load(path)))
                .collect::<Vec<_>>()
        };

        let outcomes = if self.config.num_threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.num_threads)
                .build()?
                .install(run)
        } else {
            run()
        };

        let mut report = LoadReport::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(submission) => report.loaded.push((path, submission)),
                Err(error) => {
                    warn!("Rejected {}: {}", path.display(), error);
                    report.failed.push(LoadFailure { path, error });
                }
            }
        }

        info!(
            "Loaded {} submission(s), rejected {}",
            report.loaded.len(),
            report.failed.len()
        );
        Ok(report)
    }

    /// Load a single document
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Submission, SubmissionError> {
        Submission::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config_builder() {
        let config = LoaderConfig::new("/tmp/submissions")
            .with_extension(".json")
            .with_max_files(10)
            .with_recursive(false)
            .with_num_threads(2);

        assert_eq!(config.root_dir, PathBuf::from("/tmp/submissions"));
        assert_eq!(config.extension, ".json");
        assert_eq!(config.max_files, 10);
        assert!(!config.recursive);
        assert_eq!(config.num_threads, 2);
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = LoadReport::default();
        assert!(report.is_clean());
        assert!(report.closures().is_empty());
        assert!(report.entrants(Track::SingleQuery).is_empty());
    }
}
