//! Participation declarations and their closure over the taxonomy
//!
//! A participation enters a solver into some tracks, either for whole
//! divisions, for individual logics, or both. [`merge`] expands a list of
//! participations into the set-valued mapping `Track -> Division -> {Logic}`
//! the solver is actually entered in.

use crate::logics::Logics;
use crate::submission::{Archive, Command};
use crate::taxonomy::{self, Division, Logic, Track, TrackMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// One participation declaration of a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Participation {
    /// Tracks entered
    pub tracks: Vec<Track>,
    /// Logics opted into individually
    #[serde(default)]
    pub logics: Logics,
    /// Divisions opted into as a whole
    #[serde(default)]
    pub divisions: Vec<Division>,
    /// Archive overriding the submission's root archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<Archive>,
    /// Command overriding the submission's root command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Whether the entry is experimental (not ranked)
    #[serde(default)]
    pub experimental: bool,
}

impl Participation {
    /// Create a participation for the given tracks with no scope yet
    #[must_use]
    pub fn new(tracks: impl IntoIterator<Item = Track>) -> Self {
        Self {
            tracks: tracks.into_iter().collect(),
            logics: Logics::new(),
            divisions: Vec::new(),
            archive: None,
            command: None,
            experimental: false,
        }
    }

    /// Opt into whole divisions
    #[must_use]
    pub fn with_divisions(mut self, divisions: impl IntoIterator<Item = Division>) -> Self {
        self.divisions.extend(divisions);
        self
    }

    /// Opt into individual logics
    #[must_use]
    pub fn with_logics(mut self, logics: Logics) -> Self {
        self.logics = logics;
        self
    }

    /// Set the participation-level archive
    #[must_use]
    pub fn with_archive(mut self, archive: Archive) -> Self {
        self.archive = Some(archive);
        self
    }

    /// Set the participation-level command
    #[must_use]
    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    /// Mark the participation as experimental
    #[must_use]
    pub fn with_experimental(mut self, experimental: bool) -> Self {
        self.experimental = experimental;
        self
    }

    /// Add this participation's closure to `acc`.
    ///
    /// Every declared track gets an entry, even when neither divisions nor
    /// logics are given. A division is expanded to all of its logics; a logic
    /// is added to every division of the track that contains it, and only to
    /// those. Divisions or logics the track's table does not know are skipped.
    pub fn merge_into(&self, acc: &mut TrackMap) {
        for &track in &self.tracks {
            let entry = acc.entry(track).or_default();

            for &division in &self.divisions {
                match taxonomy::logics_of(track, division) {
                    Some(logics) => {
                        entry.entry(division).or_default().extend(logics.iter().copied());
                    }
                    None => {
                        warn!("Division {} is not part of track {}, skipped", division, track);
                    }
                }
            }

            for &logic in &self.logics {
                for division in taxonomy::divisions_containing(track, logic) {
                    entry.entry(division).or_default().insert(logic);
                }
            }
        }
    }

    /// Closure of this participation alone
    #[must_use]
    pub fn resolve(&self) -> TrackMap {
        let mut acc = TrackMap::new();
        self.merge_into(&mut acc);
        acc
    }
}

/// Merge `participations` into `acc` and return it.
///
/// Accumulation is additive and set-valued: the same triple added twice is
/// stored once, so callers may merge in stages or repeat a participation.
#[must_use]
pub fn merge(participations: &[Participation], mut acc: TrackMap) -> TrackMap {
    for (index, participation) in participations.iter().enumerate() {
        debug!(
            "Merging participation {}: {} track(s), {} division(s), {} logic(s)",
            index,
            participation.tracks.len(),
            participation.divisions.len(),
            participation.logics.len()
        );
        participation.merge_into(&mut acc);
    }
    acc
}

/// All participations of a submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participations(pub Vec<Participation>);

impl Participations {
    /// Wrap a list of participations
    #[must_use]
    pub fn new(participations: Vec<Participation>) -> Self {
        Self(participations)
    }

    /// Iterate over the participations
    pub fn iter(&self) -> std::slice::Iter<'_, Participation> {
        self.0.iter()
    }

    /// Number of participations
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no participations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge every participation into `acc`
    #[must_use]
    pub fn merge(&self, acc: TrackMap) -> TrackMap {
        merge(&self.0, acc)
    }

    /// Closure of all participations
    #[must_use]
    pub fn resolve(&self) -> TrackMap {
        self.merge(TrackMap::new())
    }

    /// Divisions the solver is entered in for `track`
    #[must_use]
    pub fn divisions(&self, track: Track) -> BTreeSet<Division> {
        self.resolve()
            .remove(&track)
            .map(|divisions| divisions.into_keys().collect())
            .unwrap_or_default()
    }

    /// Logics the solver is entered in for `track`
    #[must_use]
    pub fn logics(&self, track: Track) -> BTreeSet<Logic> {
        self.resolve()
            .remove(&track)
            .map(|divisions| divisions.into_values().flatten().collect())
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Participations {
    type Item = &'a Participation;
    type IntoIter = std::slice::Iter<'a, Participation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
