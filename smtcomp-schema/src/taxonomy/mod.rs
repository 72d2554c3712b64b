//! Competition taxonomy
//!
//! Closed enumerations for tracks, divisions, logics, solver outcomes and
//! solver kinds, plus the static table mapping each track to its divisions and
//! each division to the logics it bundles.
//!
//! Every enumeration carries a canonical name and a dense ordinal equal to its
//! declaration position. Ordering and hashing follow the ordinal.

mod table;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Error type for taxonomy lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A name that is not the canonical form of any value
    #[error("unknown {kind} name: {name:?}")]
    UnknownName {
        /// Enumeration being parsed
        kind: &'static str,
        /// Offending input
        name: String,
    },
    /// An ordinal past the last declared value
    #[error("{kind} ordinal {ordinal} out of range (0..{len})")]
    OrdinalOutOfRange {
        /// Enumeration being looked up
        kind: &'static str,
        /// Offending ordinal
        ordinal: usize,
        /// Number of declared values
        len: usize,
    },
}

/// Result type for taxonomy lookups
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// Set-valued mapping `Track -> Division -> {Logic}`.
///
/// Used both for the static competition table and for the participation
/// closure of a solver.
pub type TrackMap = BTreeMap<Track, BTreeMap<Division, BTreeSet<Logic>>>;

macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Canonical name
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Dense integer identity (declaration position)
            #[must_use]
            pub const fn ordinal(self) -> usize {
                self as usize
            }

            /// Look a value up by ordinal
            pub fn from_ordinal(ordinal: usize) -> TaxonomyResult<Self> {
                Self::ALL
                    .get(ordinal)
                    .copied()
                    .ok_or(TaxonomyError::OrdinalOutOfRange {
                        kind: $kind,
                        ordinal,
                        len: Self::ALL.len(),
                    })
            }

            /// Look a value up by canonical name (exact, case-sensitive)
            #[must_use]
            pub fn parse(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TaxonomyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| TaxonomyError::UnknownName {
                    kind: $kind,
                    name: s.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = Cow::<'de, str>::deserialize(deserializer)?;
                name.parse().map_err(de::Error::custom)
            }
        }
    };
}

ordinal_enum! {
    /// Kind of solver being submitted
    pub enum SolverType ("solver type") {
        /// Wraps another solver
        Wrapped => "wrapped",
        /// Derived from another solver's code base
        Derived => "derived",
        /// Developed independently
        Standalone => "Standalone",
    }
}

ordinal_enum! {
    /// Answer of a solver on a benchmark
    pub enum Status ("status") {
        /// Unsatisfiable
        Unsat => "unsat",
        /// Satisfiable
        Sat => "sat",
        /// No answer
        Unknown => "unknown",
    }
}

ordinal_enum! {
    /// Competition track
    pub enum Track ("track") {
        /// Unsat core track
        UnsatCore => "UnsatCore",
        /// Single query track
        SingleQuery => "SingleQuery",
        /// Proof exhibition track
        ProofExhibition => "ProofExhibition",
        /// Model validation track
        ModelValidation => "ModelValidation",
        /// Incremental track
        Incremental => "Incremental",
        /// Cloud track
        Cloud => "Cloud",
        /// Parallel track
        Parallel => "Parallel",
    }
}

ordinal_enum! {
    /// Named bundle of related logics inside a track
    #[allow(non_camel_case_types, missing_docs)]
    pub enum Division ("division") {
        Arith => "Arith",
        Bitvec => "Bitvec",
        Equality => "Equality",
        Equality_LinearArith => "Equality+LinearArith",
        Equality_MachineArith => "Equality+MachineArith",
        Equality_NonLinearArith => "Equality+NonLinearArith",
        FPArith => "FPArith",
        QF_ADT_BitVec => "QF_ADT+BitVec",
        QF_ADT_LinArith => "QF_ADT+LinArith",
        QF_Bitvec => "QF_Bitvec",
        QF_Datatypes => "QF_Datatypes",
        QF_Equality => "QF_Equality",
        QF_Equality_Bitvec => "QF_Equality+Bitvec",
        QF_Equality_Bitvec_Arith => "QF_Equality+Bitvec+Arith",
        QF_Equality_LinearArith => "QF_Equality+LinearArith",
        QF_Equality_NonLinearArith => "QF_Equality+NonLinearArith",
        QF_FPArith => "QF_FPArith",
        QF_LinearIntArith => "QF_LinearIntArith",
        QF_LinearRealArith => "QF_LinearRealArith",
        QF_NonLinearIntArith => "QF_NonLinearIntArith",
        QF_NonLinearRealArith => "QF_NonLinearRealArith",
        QF_Strings => "QF_Strings",
    }
}

ordinal_enum! {
    /// SMT-LIB logic
    #[allow(non_camel_case_types, missing_docs)]
    pub enum Logic ("logic") {
        ABV => "ABV",
        ABVFP => "ABVFP",
        ABVFPLRA => "ABVFPLRA",
        ALIA => "ALIA",
        ANIA => "ANIA",
        AUFBV => "AUFBV",
        AUFBVDTLIA => "AUFBVDTLIA",
        AUFBVDTNIA => "AUFBVDTNIA",
        AUFBVDTNIRA => "AUFBVDTNIRA",
        AUFBVFP => "AUFBVFP",
        AUFDTLIA => "AUFDTLIA",
        AUFDTLIRA => "AUFDTLIRA",
        AUFDTNIRA => "AUFDTNIRA",
        AUFFPDTNIRA => "AUFFPDTNIRA",
        AUFLIA => "AUFLIA",
        AUFLIRA => "AUFLIRA",
        AUFNIA => "AUFNIA",
        AUFNIRA => "AUFNIRA",
        BV => "BV",
        BVFP => "BVFP",
        BVFPLRA => "BVFPLRA",
        FP => "FP",
        FPLRA => "FPLRA",
        LIA => "LIA",
        LRA => "LRA",
        NIA => "NIA",
        NRA => "NRA",
        QF_ABV => "QF_ABV",
        QF_ABVFP => "QF_ABVFP",
        QF_ABVFPLRA => "QF_ABVFPLRA",
        QF_ALIA => "QF_ALIA",
        QF_ANIA => "QF_ANIA",
        QF_AUFBV => "QF_AUFBV",
        QF_AUFBVFP => "QF_AUFBVFP",
        QF_AUFBVLIA => "QF_AUFBVLIA",
        QF_AUFBVNIA => "QF_AUFBVNIA",
        QF_AUFLIA => "QF_AUFLIA",
        QF_AUFNIA => "QF_AUFNIA",
        QF_AX => "QF_AX",
        QF_BV => "QF_BV",
        QF_BVFP => "QF_BVFP",
        QF_BVFPLRA => "QF_BVFPLRA",
        QF_BVLRA => "QF_BVLRA",
        QF_DT => "QF_DT",
        QF_FP => "QF_FP",
        QF_FPLRA => "QF_FPLRA",
        QF_IDL => "QF_IDL",
        QF_LIA => "QF_LIA",
        QF_LIRA => "QF_LIRA",
        QF_LRA => "QF_LRA",
        QF_NIA => "QF_NIA",
        QF_NIRA => "QF_NIRA",
        QF_NRA => "QF_NRA",
        QF_RDL => "QF_RDL",
        QF_S => "QF_S",
        QF_SLIA => "QF_SLIA",
        QF_SNIA => "QF_SNIA",
        QF_UF => "QF_UF",
        QF_UFBV => "QF_UFBV",
        QF_UFBVDT => "QF_UFBVDT",
        QF_UFBVLIA => "QF_UFBVLIA",
        QF_UFDT => "QF_UFDT",
        QF_UFDTLIA => "QF_UFDTLIA",
        QF_UFDTLIRA => "QF_UFDTLIRA",
        QF_UFDTNIA => "QF_UFDTNIA",
        QF_UFFP => "QF_UFFP",
        QF_UFFPDTNIRA => "QF_UFFPDTNIRA",
        QF_UFIDL => "QF_UFIDL",
        QF_UFLIA => "QF_UFLIA",
        QF_UFLRA => "QF_UFLRA",
        QF_UFNIA => "QF_UFNIA",
        QF_UFNRA => "QF_UFNRA",
        UF => "UF",
        UFBV => "UFBV",
        UFBVDT => "UFBVDT",
        UFBVFP => "UFBVFP",
        UFBVLIA => "UFBVLIA",
        UFDT => "UFDT",
        UFDTLIA => "UFDTLIA",
        UFDTLIRA => "UFDTLIRA",
        UFDTNIA => "UFDTNIA",
        UFDTNIRA => "UFDTNIRA",
        UFFPDTNIRA => "UFFPDTNIRA",
        UFIDL => "UFIDL",
        UFLIA => "UFLIA",
        UFLRA => "UFLRA",
        UFNIA => "UFNIA",
        UFNIRA => "UFNIRA",
        UFNRA => "UFNRA",
    }
}

static TRACKS: LazyLock<TrackMap> = LazyLock::new(|| {
    table::TABLE
        .iter()
        .map(|(track, divisions)| {
            let divisions = divisions
                .iter()
                .map(|(division, logics)| (*division, logics.iter().copied().collect()))
                .collect();
            (*track, divisions)
        })
        .collect()
});

/// The full competition table
#[must_use]
pub fn tracks() -> &'static TrackMap {
    &TRACKS
}

/// Divisions defined for a track, in declaration order
pub fn divisions(track: Track) -> impl Iterator<Item = Division> {
    tracks()
        .get(&track)
        .into_iter()
        .flat_map(|divisions| divisions.keys().copied())
}

/// Logics of one division within one track, or `None` when the track has no
/// such division
#[must_use]
pub fn logics_of(track: Track, division: Division) -> Option<&'static BTreeSet<Logic>> {
    tracks().get(&track)?.get(&division)
}

/// Every logic used by some division of `track`
#[must_use]
pub fn logic_used_for_track(track: Track) -> BTreeSet<Logic> {
    tracks()
        .get(&track)
        .into_iter()
        .flat_map(|divisions| divisions.values())
        .flatten()
        .copied()
        .collect()
}

/// Divisions of `track` that contain `logic`
pub fn divisions_containing(track: Track, logic: Logic) -> impl Iterator<Item = Division> {
    tracks()
        .get(&track)
        .into_iter()
        .flat_map(move |divisions| {
            divisions
                .iter()
                .filter(move |(_, logics)| logics.contains(&logic))
                .map(|(division, _)| *division)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_track_has_a_table() {
        for track in Track::ALL {
            let divisions = tracks().get(track).expect("track missing from table");
            assert!(!divisions.is_empty(), "{track} has no divisions");
            for (division, logics) in divisions {
                assert!(!logics.is_empty(), "{track}/{division} is empty");
            }
        }
    }

    #[test]
    fn test_logic_used_for_track_is_union() {
        for &track in Track::ALL {
            let used = logic_used_for_track(track);
            let mut union = BTreeSet::new();
            for division in divisions(track) {
                union.extend(logics_of(track, division).unwrap().iter().copied());
            }
            assert_eq!(used, union);
            for logic in &used {
                assert!(divisions_containing(track, *logic).next().is_some());
            }
        }
    }

    #[test]
    fn test_table_lookups() {
        let lia = logics_of(Track::SingleQuery, Division::QF_LinearIntArith).unwrap();
        assert_eq!(
            lia.iter().copied().collect::<Vec<_>>(),
            vec![Logic::QF_IDL, Logic::QF_LIA, Logic::QF_LIRA]
        );
        assert!(logics_of(Track::Incremental, Division::QF_Strings).is_none());
        assert!(logics_of(Track::ModelValidation, Division::Arith).is_none());

        let containing: Vec<_> = divisions_containing(Track::ModelValidation, Logic::QF_AX).collect();
        assert_eq!(containing, vec![Division::QF_ADT_LinArith]);

        assert!(logic_used_for_track(Track::Incremental).contains(&Logic::QF_AUFBVLIA));
        assert!(!logic_used_for_track(Track::SingleQuery).contains(&Logic::QF_AUFBVLIA));
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        assert_eq!(Track::UnsatCore.ordinal(), 0);
        assert_eq!(Track::Parallel.ordinal(), 6);
        assert_eq!(Status::Unsat.ordinal(), 0);
        assert_eq!(Logic::ABV.ordinal(), 0);
        assert_eq!(Logic::ALL.len(), 89);
        assert_eq!(Division::ALL.len(), 22);

        for (i, logic) in Logic::ALL.iter().enumerate() {
            assert_eq!(logic.ordinal(), i);
            assert_eq!(Logic::from_ordinal(i), Ok(*logic));
        }
        assert!(Logic::QF_ABV < Logic::QF_BV);
        assert!(matches!(
            Track::from_ordinal(7),
            Err(TaxonomyError::OrdinalOutOfRange { len: 7, .. })
        ));
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(Division::QF_Equality_Bitvec.as_str(), "QF_Equality+Bitvec");
        assert_eq!("QF_ADT+BitVec".parse::<Division>(), Ok(Division::QF_ADT_BitVec));
        assert_eq!(SolverType::Standalone.to_string(), "Standalone");
        assert_eq!(Status::parse("sat"), Some(Status::Sat));
        assert_eq!(Status::parse("SAT"), None);
        assert_eq!(
            "QF_XYZ".parse::<Logic>(),
            Err(TaxonomyError::UnknownName {
                kind: "logic",
                name: "QF_XYZ".to_string()
            })
        );
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Division::Equality_MachineArith).unwrap();
        assert_eq!(json, "\"Equality+MachineArith\"");
        let track: Track = serde_json::from_str("\"SingleQuery\"").unwrap();
        assert_eq!(track, Track::SingleQuery);
        assert!(serde_json::from_str::<Logic>("\"QF_Nope\"").is_err());
    }
}
