//! Logic selection
//!
//! A participation names its logics either as an explicit list or as a single
//! regular expression. Both shapes normalize to [`Logics`], an ordered list of
//! [`Logic`] values, before any merging happens.

use crate::taxonomy::Logic;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for logic selection
#[derive(Error, Debug)]
pub enum SelectorError {
    /// The pattern is not a valid regular expression
    #[error("invalid logic pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// Pattern as given
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// Result type for logic selection
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Ordered list of logics a participation opts into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LogicsRepr", into = "Vec<Logic>")]
pub struct Logics(Vec<Logic>);

impl Logics {
    /// Empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection given logic by logic, order preserved
    #[must_use]
    pub fn from_list(logics: impl IntoIterator<Item = Logic>) -> Self {
        Self(logics.into_iter().collect())
    }

    /// Every logic whose canonical name fully matches `pattern`, in
    /// declaration order
    pub fn from_pattern(pattern: &str) -> SelectorResult<Self> {
        logics_from_pattern(pattern).map(Self)
    }

    /// Selected logics
    #[must_use]
    pub fn as_slice(&self) -> &[Logic] {
        &self.0
    }

    /// Iterate over the selected logics
    pub fn iter(&self) -> std::slice::Iter<'_, Logic> {
        self.0.iter()
    }

    /// Number of selected logics
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `logic` is selected
    #[must_use]
    pub fn contains(&self, logic: Logic) -> bool {
        self.0.contains(&logic)
    }
}

/// Resolve a pattern against the logic enumeration.
///
/// The pattern is anchored at both ends: `"QF_BV"` selects `QF_BV` and
/// nothing else. A pattern matching no logic yields an empty list.
pub fn logics_from_pattern(pattern: &str) -> SelectorResult<Vec<Logic>> {
    let invalid = |source| SelectorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };
    // Compile the raw pattern first so that wrapping cannot repair a broken one.
    Regex::new(pattern).map_err(invalid)?;
    let anchored = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;

    Ok(Logic::ALL
        .iter()
        .copied()
        .filter(|logic| anchored.is_match(logic.as_str()))
        .collect())
}

impl FromIterator<Logic> for Logics {
    fn from_iter<I: IntoIterator<Item = Logic>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<'a> IntoIterator for &'a Logics {
    type Item = &'a Logic;
    type IntoIter = std::slice::Iter<'a, Logic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Logics> for Vec<Logic> {
    fn from(logics: Logics) -> Self {
        logics.0
    }
}

/// Document shape: a pattern string or a list of logic names
#[derive(Deserialize)]
#[serde(untagged)]
enum LogicsRepr {
    Pattern(String),
    List(Vec<Logic>),
}

impl TryFrom<LogicsRepr> for Logics {
    type Error = SelectorError;

    fn try_from(repr: LogicsRepr) -> Result<Self, Self::Error> {
        match repr {
            LogicsRepr::Pattern(pattern) => Self::from_pattern(&pattern),
            LogicsRepr::List(logics) => Ok(Self::from_list(logics)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_fully_anchored() {
        let exact = Logics::from_pattern("QF_BV").unwrap();
        assert_eq!(exact.as_slice(), &[Logic::QF_BV]);

        let prefix = Logics::from_pattern("QF_BV.*").unwrap();
        assert_eq!(
            prefix.as_slice(),
            &[Logic::QF_BV, Logic::QF_BVFP, Logic::QF_BVFPLRA, Logic::QF_BVLRA]
        );

        // No substring matches
        assert!(Logics::from_pattern("BV").unwrap().contains(Logic::BV));
        assert_eq!(Logics::from_pattern("BV").unwrap().len(), 1);
    }

    #[test]
    fn test_pattern_follows_declaration_order() {
        let logics = Logics::from_pattern("QF_.*BV.*").unwrap();
        assert!(logics.contains(Logic::QF_ABV));
        assert!(logics.contains(Logic::QF_AUFBV));
        assert!(!logics.contains(Logic::ABV));
        let ordinals: Vec<_> = logics.iter().map(|l| l.ordinal()).collect();
        let mut sorted = ordinals.clone();
        sorted.sort_unstable();
        assert_eq!(ordinals, sorted);
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let logics = Logics::from_pattern("UF|LIA").unwrap();
        assert_eq!(logics.as_slice(), &[Logic::LIA, Logic::UF]);
    }

    #[test]
    fn test_empty_match_is_not_an_error() {
        let logics = Logics::from_pattern("NOTHING_.*").unwrap();
        assert!(logics.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            Logics::from_pattern("QF_(BV"),
            Err(SelectorError::InvalidPattern { .. })
        ));
        // Would become valid once wrapped in a group
        assert!(Logics::from_pattern("QF_BV)|(QF_LIA").is_err());
    }

    #[test]
    fn test_both_document_shapes_normalize() {
        let from_pattern: Logics = serde_json::from_str("\"QF_LIA|QF_LRA\"").unwrap();
        let from_list: Logics = serde_json::from_str("[\"QF_LIA\", \"QF_LRA\"]").unwrap();
        assert_eq!(from_pattern, from_list);
        assert_eq!(
            serde_json::to_string(&from_list).unwrap(),
            "[\"QF_LIA\",\"QF_LRA\"]"
        );

        assert!(serde_json::from_str::<Logics>("[\"QF_NOPE\"]").is_err());
        assert!(serde_json::from_str::<Logics>("\"(\"").is_err());
    }

    #[test]
    fn test_list_keeps_given_order() {
        let logics = Logics::from_list([Logic::QF_UF, Logic::ABV]);
        assert_eq!(logics.as_slice(), &[Logic::QF_UF, Logic::ABV]);
    }
}
