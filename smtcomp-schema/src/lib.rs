//! SMT-COMP Schema - Submission and Benchmark Data Model
//!
//! This crate provides the typed data model of the SMT competition: the
//! taxonomy of tracks, divisions and logics, validated solver submissions,
//! and the canonical path encoding of benchmark files.
//!
//! # Features
//!
//! - Track / Division / Logic enumerations with canonical names and ordinals
//! - Static competition table and per-track logic queries
//! - Logic selection by explicit list or anchored regular expression
//! - Participation merging into the `Track -> Division -> {Logic}` closure
//! - Submission documents with archive/command inheritance checks
//! - Reversible benchmark path codec
//! - Per-year configuration and data file layout
//! - Parallel batch loading of submission documents
//!
//! # Examples
//!
//! ## Resolving a Participation
//!
//! ```
//! use smtcomp_schema::{Division, Logic, Logics, Participation, Track};
//!
//! let participation = Participation::new([Track::SingleQuery])
//!     .with_divisions([Division::QF_Bitvec])
//!     .with_logics(Logics::from_pattern("QF_LIA|QF_UF").unwrap());
//!
//! let closure = participation.resolve();
//! let divisions = &closure[&Track::SingleQuery];
//! assert!(divisions[&Division::QF_Bitvec].contains(&Logic::QF_BV));
//! assert!(divisions[&Division::QF_LinearIntArith].contains(&Logic::QF_LIA));
//! assert!(!divisions[&Division::QF_LinearIntArith].contains(&Logic::QF_IDL));
//! ```
//!
//! ## Benchmark Paths
//!
//! ```
//! use smtcomp_schema::{Logic, Smt2File};
//! use std::path::PathBuf;
//!
//! let file = Smt2File::new(false, Logic::QF_LIA, ["sub", "dir"], "bench1.smt2").unwrap();
//! assert_eq!(file.path(), PathBuf::from("non-incremental/QF_LIA/sub/dir/bench1.smt2"));
//! assert_eq!(Smt2File::from_path(file.path()).unwrap(), file);
//! ```
//!
//! ## Validating a Submission
//!
//! ```no_run
//! use smtcomp_schema::Submission;
//!
//! let submission = Submission::load("submissions/z4.json").expect("invalid submission");
//! println!("{} -> {}", submission.name, submission.uniq_id());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Core modules
pub mod logics;
pub mod participation;
pub mod smt2file;
pub mod submission;
pub mod taxonomy;

// Supporting modules
pub mod config;
pub mod loader;
pub mod results;

// Re-export main types for convenience
pub use taxonomy::{
    Division, Logic, SolverType, Status, TaxonomyError, TaxonomyResult, Track, TrackMap,
    divisions, divisions_containing, logic_used_for_track, logics_of, tracks,
};

pub use logics::{Logics, SelectorError, SelectorResult, logics_from_pattern};

pub use participation::{Participation, Participations, merge};

pub use submission::{
    Archive, Command, Contributor, Hash, NameEmail, Submission, SubmissionError,
    SubmissionResult, Violation,
};

pub use smt2file::{Smt2File, Smt2FileError, Smt2FileResult};

pub use config::{CompetitionConfig, ConfigError, ConfigResult, DataFiles};

pub use loader::{
    LoadFailure, LoadReport, LoaderConfig, LoaderError, LoaderResult, SubmissionLoader,
};

pub use results::{Benchmarks, InfoIncremental, InfoNonIncremental, Results, RunResult};
