//! Benchmark inventories and solver results
//!
//! Record shapes exchanged with the table tooling. Storage of these records
//! lives elsewhere; this module only defines them and a few lookups.

use crate::smt2file::Smt2File;
use crate::taxonomy::{Logic, Status, Track};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Incremental benchmark with its number of `check-sat` commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoIncremental {
    /// Benchmark identity
    pub file: Smt2File,
    /// Number of `check-sat` commands
    pub check_sats: u64,
}

/// Non-incremental benchmark with its expected status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoNonIncremental {
    /// Benchmark identity
    pub file: Smt2File,
    /// Expected answer
    pub status: Status,
    /// Number of assertions
    pub asserts: u64,
}

/// Benchmark inventory of one edition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmarks {
    /// Incremental benchmarks
    #[serde(default)]
    pub incremental: Vec<InfoIncremental>,
    /// Non-incremental benchmarks
    #[serde(default)]
    pub non_incremental: Vec<InfoNonIncremental>,
}

impl Benchmarks {
    /// Total number of benchmarks
    #[must_use]
    pub fn len(&self) -> usize {
        self.incremental.len() + self.non_incremental.len()
    }

    /// Whether the inventory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incremental.is_empty() && self.non_incremental.is_empty()
    }

    /// Number of benchmarks per logic, incremental and not
    #[must_use]
    pub fn count_by_logic(&self) -> BTreeMap<Logic, usize> {
        let mut counts = BTreeMap::new();
        let files = self
            .incremental
            .iter()
            .map(|info| &info.file)
            .chain(self.non_incremental.iter().map(|info| &info.file));
        for file in files {
            *counts.entry(file.logic()).or_insert(0) += 1;
        }
        counts
    }
}

/// Outcome of one solver on one benchmark in one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Track the run belongs to
    pub track: Track,
    /// Solver name
    pub solver: String,
    /// Benchmark identity
    pub file: Smt2File,
    /// Answer given
    pub result: Status,
    /// CPU time in seconds
    pub cpu_time: f64,
    /// Wall clock time in seconds
    pub wallclock_time: f64,
    /// Memory usage
    pub memory_usage: f64,
}

/// Collection of run results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Results {
    /// Individual runs
    pub results: Vec<RunResult>,
}

impl Results {
    /// Runs belonging to one track
    pub fn for_track(&self, track: Track) -> impl Iterator<Item = &RunResult> {
        self.results.iter().filter(move |r| r.track == track)
    }

    /// Runs of one solver
    pub fn for_solver<'a>(&'a self, solver: &'a str) -> impl Iterator<Item = &'a RunResult> {
        self.results.iter().filter(move |r| r.solver == solver)
    }
}
