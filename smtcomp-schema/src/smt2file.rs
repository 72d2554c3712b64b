//! Benchmark file identities
//!
//! An [`Smt2File`] names one benchmark by its incremental flag, logic, family
//! and file name. Its canonical path is
//! `<incremental|non-incremental>/<logic>/<family...>/<name>`, and
//! [`Smt2File::path`] / [`Smt2File::from_path`] are mutually inverse.

use crate::taxonomy::Logic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

const INCREMENTAL: &str = "incremental";
const NON_INCREMENTAL: &str = "non-incremental";

/// Error type for benchmark identities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Smt2FileError {
    /// The file name contains a separator or is not a plain segment
    #[error("name {0:?} should not contain /, directory part should go in family name")]
    InvalidName(String),
    /// A family segment contains a separator or is not a plain segment
    #[error("family part {0:?} should not contain /, it should be split")]
    InvalidFamily(String),
    /// First path segment is neither `incremental` nor `non-incremental`
    #[error("Smt2File path should start with incremental or non-incremental, found {0:?}")]
    InvalidPrefix(String),
    /// Second path segment is not a logic
    #[error("unknown logic {0:?} in benchmark path")]
    UnknownLogic(String),
    /// Path too short to hold prefix, logic and name
    #[error("benchmark path {0:?} needs at least prefix, logic and name")]
    TooShort(PathBuf),
    /// Path segment that is not valid UTF-8
    #[error("benchmark path {0:?} is not valid UTF-8")]
    NonUtf8(PathBuf),
}

/// Result type for benchmark identities
pub type Smt2FileResult<T> = Result<T, Smt2FileError>;

/// Structured identity of one benchmark file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Smt2FileFields")]
pub struct Smt2File {
    incremental: bool,
    logic: Logic,
    family: Vec<String>,
    name: String,
}

impl Smt2File {
    /// Build from already split components.
    ///
    /// Neither `name` nor any family segment may contain `/`, be empty, or be
    /// `.`; such values could not round-trip through a path.
    pub fn new(
        incremental: bool,
        logic: Logic,
        family: impl IntoIterator<Item = impl Into<String>>,
        name: impl Into<String>,
    ) -> Smt2FileResult<Self> {
        let family: Vec<String> = family.into_iter().map(Into::into).collect();
        let name = name.into();

        if !is_plain_segment(&name) {
            return Err(Smt2FileError::InvalidName(name));
        }
        if let Some(part) = family.iter().find(|part| !is_plain_segment(part)) {
            return Err(Smt2FileError::InvalidFamily(part.clone()));
        }

        Ok(Self {
            incremental,
            logic,
            family,
            name,
        })
    }

    /// Build with the family given as one relative path, split the same way
    /// [`Self::from_path`] splits
    pub fn from_parts(
        incremental: bool,
        logic: Logic,
        family: impl AsRef<Path>,
        name: impl Into<String>,
    ) -> Smt2FileResult<Self> {
        let family = family.as_ref();
        let segments = segments(family)?;
        Self::new(incremental, logic, segments, name)
    }

    /// Decode a canonical path
    pub fn from_path(path: impl AsRef<Path>) -> Smt2FileResult<Self> {
        let path = path.as_ref();
        let mut parts = segments(path)?;
        if parts.len() < 3 {
            return Err(Smt2FileError::TooShort(path.to_path_buf()));
        }

        let incremental = match parts[0].as_str() {
            INCREMENTAL => true,
            NON_INCREMENTAL => false,
            other => return Err(Smt2FileError::InvalidPrefix(other.to_string())),
        };
        let logic = Logic::parse(&parts[1])
            .ok_or_else(|| Smt2FileError::UnknownLogic(parts[1].clone()))?;

        let name = parts.pop().unwrap_or_default();
        let family = parts.split_off(2);
        Self::new(incremental, logic, family, name)
    }

    /// Encode to the canonical path
    #[must_use]
    pub fn path(&self) -> PathBuf {
        let prefix = if self.incremental {
            INCREMENTAL
        } else {
            NON_INCREMENTAL
        };
        let mut path = PathBuf::from(prefix);
        path.push(self.logic.as_str());
        for part in &self.family {
            path.push(part);
        }
        path.push(&self.name);
        path
    }

    /// Family segments joined as a relative path
    #[must_use]
    pub fn family_path(&self) -> PathBuf {
        self.family.iter().collect()
    }

    /// Whether the benchmark belongs to the incremental set
    #[must_use]
    pub fn incremental(&self) -> bool {
        self.incremental
    }

    /// Logic of the benchmark
    #[must_use]
    pub fn logic(&self) -> Logic {
        self.logic
    }

    /// Family segments, outermost first
    #[must_use]
    pub fn family(&self) -> &[String] {
        &self.family
    }

    /// File name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Smt2File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && !segment.contains('/')
}

/// Split a path into its segments. `.` components are dropped; a root
/// component is kept as `/` so that validation rejects it.
fn segments(path: &Path) -> Smt2FileResult<Vec<String>> {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .map(|component| {
            component
                .as_os_str()
                .to_str()
                .map(str::to_string)
                .ok_or_else(|| Smt2FileError::NonUtf8(path.to_path_buf()))
        })
        .collect()
}

#[derive(Deserialize)]
struct Smt2FileFields {
    incremental: bool,
    logic: Logic,
    family: Vec<String>,
    name: String,
}

impl TryFrom<Smt2FileFields> for Smt2File {
    type Error = Smt2FileError;

    fn try_from(fields: Smt2FileFields) -> Result<Self, Self::Error> {
        Self::new(fields.incremental, fields.logic, fields.family, fields.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let file = Smt2File::new(false, Logic::QF_LIA, ["sub", "dir"], "bench1.smt2").unwrap();
        let path = file.path();
        assert_eq!(path, PathBuf::from("non-incremental/QF_LIA/sub/dir/bench1.smt2"));
        assert_eq!(Smt2File::from_path(&path).unwrap(), file);
        assert_eq!(file.to_string(), "non-incremental/QF_LIA/sub/dir/bench1.smt2");
    }

    #[test]
    fn test_empty_family() {
        let file = Smt2File::from_path("incremental/UF/x.smt2").unwrap();
        assert!(file.incremental());
        assert_eq!(file.logic(), Logic::UF);
        assert!(file.family().is_empty());
        assert_eq!(file.name(), "x.smt2");
        assert_eq!(file.path(), PathBuf::from("incremental/UF/x.smt2"));
    }

    #[test]
    fn test_from_parts_agrees_with_decoder() {
        let built = Smt2File::from_parts(true, Logic::QF_BV, "2019/sage/app1", "a.smt2").unwrap();
        let decoded = Smt2File::from_path("incremental/QF_BV/2019/sage/app1/a.smt2").unwrap();
        assert_eq!(built, decoded);
        assert_eq!(built.family(), ["2019", "sage", "app1"]);
        assert_eq!(built.family_path(), PathBuf::from("2019/sage/app1"));

        let flat = Smt2File::from_parts(true, Logic::QF_BV, "", "a.smt2").unwrap();
        assert!(flat.family().is_empty());
    }

    #[test]
    fn test_separator_rejected() {
        assert_eq!(
            Smt2File::new(false, Logic::QF_UF, ["a"], "b/c.smt2"),
            Err(Smt2FileError::InvalidName("b/c.smt2".to_string()))
        );
        assert_eq!(
            Smt2File::new(false, Logic::QF_UF, ["a/b"], "c.smt2"),
            Err(Smt2FileError::InvalidFamily("a/b".to_string()))
        );
        assert!(Smt2File::new(false, Logic::QF_UF, [""], "c.smt2").is_err());
        assert!(Smt2File::new(false, Logic::QF_UF, Vec::<String>::new(), ".").is_err());
        assert!(Smt2File::from_parts(false, Logic::QF_UF, "/abs/family", "c.smt2").is_err());
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            Smt2File::from_path("benchmarks/QF_LIA/a.smt2"),
            Err(Smt2FileError::InvalidPrefix("benchmarks".to_string()))
        );
        assert_eq!(
            Smt2File::from_path("non-incremental/QF_NOPE/a.smt2"),
            Err(Smt2FileError::UnknownLogic("QF_NOPE".to_string()))
        );
        assert!(matches!(
            Smt2File::from_path("non-incremental/QF_LIA"),
            Err(Smt2FileError::TooShort(_))
        ));
        assert!(matches!(
            Smt2File::from_path("/non-incremental/QF_LIA/a.smt2"),
            Err(Smt2FileError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_value_semantics() {
        let a = Smt2File::new(false, Logic::LIA, ["f"], "n.smt2").unwrap();
        let b = Smt2File::from_path("non-incremental/LIA/f/n.smt2").unwrap();
        let c = Smt2File::from_path("incremental/LIA/f/n.smt2").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_validates() {
        let file: Smt2File = serde_json::from_str(
            r#"{"incremental": false, "logic": "QF_LIA", "family": ["sub"], "name": "b.smt2"}"#,
        )
        .unwrap();
        assert_eq!(file.path(), PathBuf::from("non-incremental/QF_LIA/sub/b.smt2"));

        let bad = serde_json::from_str::<Smt2File>(
            r#"{"incremental": false, "logic": "QF_LIA", "family": ["a/b"], "name": "b.smt2"}"#,
        );
        assert!(bad.is_err());
    }
}
