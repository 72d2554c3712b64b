//! Solver submissions
//!
//! A submission document describes one solver: who built it, where its
//! archive lives, how to run it, and the participations it enters. Documents
//! are deserialized with serde; dual-shape fields (contributors, contacts,
//! commands) are normalized at that boundary. Cross-field rules are checked by
//! a separate pass, [`Submission::validate`], which reports every violation at
//! once.

use crate::participation::{Participation, Participations};
use crate::taxonomy::{self, Division, SolverType, Track, TrackMap};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for submission construction
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Archive hash record with neither digest set
    #[error("one hash type is required (sha256 or sha512)")]
    MissingHash,
    /// Command given as an empty list
    #[error("command must be a non-empty list")]
    EmptyCommand,
    /// Contact not of the form `Name <email>`
    #[error("invalid contact {0:?}, expected \"Name <email>\"")]
    InvalidContact(String),
    /// Malformed document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error when reading a document
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Document parsed but breaks cross-field rules
    #[error("submission {name:?} is invalid: {}", describe(.violations))]
    Invalid {
        /// Submission name
        name: String,
        /// Every rule that failed
        violations: Vec<Violation>,
    },
}

/// Result type for submission construction
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// One failed cross-field rule of a submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// No root archive while some participations have none either
    #[error(
        "field archive is needed in all participations if not present at the root \
         (missing in participations {participations:?})"
    )]
    MissingArchive {
        /// Indices of participations without an archive
        participations: Vec<usize>,
    },
    /// No root command while some participations have none either
    #[error(
        "field command is needed in all participations if not present at the root \
         (missing in participations {participations:?})"
    )]
    MissingCommand {
        /// Indices of participations without a command
        participations: Vec<usize>,
    },
    /// Empty contributor list
    #[error("at least one contributor is required")]
    NoContributors,
    /// Empty contact list
    #[error("at least one contact is required")]
    NoContacts,
    /// Participation with an empty track list
    #[error("participation {participation} declares no track")]
    NoTracks {
        /// Index of the participation
        participation: usize,
    },
    /// Participation naming a division its track does not have
    #[error("participation {participation}: division {division} is not part of track {track}")]
    DivisionNotInTrack {
        /// Index of the participation
        participation: usize,
        /// Declared track
        track: Track,
        /// Declared division
        division: Division,
    },
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn sha256_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(data.as_ref()))
}

/// Contact person, written `Name <email>` in documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NameEmailRepr", into = "String")]
pub struct NameEmail {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl NameEmail {
    /// Parse `Name <email>`. A bare address is accepted and named after its
    /// local part. Only the shape is checked here, not the address syntax.
    pub fn parse(text: &str) -> SubmissionResult<Self> {
        let invalid = || SubmissionError::InvalidContact(text.to_string());
        let text = text.trim();

        if let Some(stripped) = text.strip_suffix('>') {
            let (name, email) = stripped.rsplit_once('<').ok_or_else(invalid)?;
            let (name, email) = (name.trim(), email.trim());
            if name.is_empty() || email.is_empty() {
                return Err(invalid());
            }
            return Ok(Self {
                name: name.to_string(),
                email: email.to_string(),
            });
        }

        match text.split_once('@') {
            Some((local, _)) if !local.is_empty() && !text.contains(char::is_whitespace) => {
                Ok(Self {
                    name: local.to_string(),
                    email: text.to_string(),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for NameEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

impl From<NameEmail> for String {
    fn from(contact: NameEmail) -> Self {
        contact.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameEmailRepr {
    Text(String),
    Fields { name: String, email: String },
}

impl TryFrom<NameEmailRepr> for NameEmail {
    type Error = SubmissionError;

    fn try_from(repr: NameEmailRepr) -> Result<Self, Self::Error> {
        match repr {
            NameEmailRepr::Text(text) => Self::parse(&text),
            NameEmailRepr::Fields { name, email } => Ok(Self { name, email }),
        }
    }
}

/// Person who contributed to the solver. A bare string is shorthand for
/// `{"name": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContributorRepr")]
pub struct Contributor {
    /// Contributor name
    pub name: String,
    /// Personal website
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Contributor {
    /// Contributor known by name only
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            website: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ContributorFields {
    name: String,
    #[serde(default)]
    website: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContributorRepr {
    Name(String),
    Fields(ContributorFields),
}

impl From<ContributorRepr> for Contributor {
    fn from(repr: ContributorRepr) -> Self {
        match repr {
            ContributorRepr::Name(name) => Self::new(name),
            ContributorRepr::Fields(ContributorFields { name, website }) => Self { name, website },
        }
    }
}

/// Integrity digests of an archive; at least one must be set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashFields")]
pub struct Hash {
    /// Hex SHA-256 digest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    /// Hex SHA-512 digest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha512: Option<String>,
}

impl Hash {
    /// Build a hash record, rejecting one with no digest
    pub fn new(sha256: Option<String>, sha512: Option<String>) -> SubmissionResult<Self> {
        if sha256.is_none() && sha512.is_none() {
            return Err(SubmissionError::MissingHash);
        }
        Ok(Self { sha256, sha512 })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HashFields {
    #[serde(default)]
    sha256: Option<String>,
    #[serde(default)]
    sha512: Option<String>,
}

impl TryFrom<HashFields> for Hash {
    type Error = SubmissionError;

    fn try_from(fields: HashFields) -> Result<Self, Self::Error> {
        Self::new(fields.sha256, fields.sha512)
    }
}

/// Downloadable solver archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archive {
    /// Download location
    pub url: String,
    /// Optional integrity digests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<Hash>,
}

impl Archive {
    /// Archive without integrity digests
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            h: None,
        }
    }

    /// Attach integrity digests
    #[must_use]
    pub fn with_hash(mut self, hash: Hash) -> Self {
        self.h = Some(hash);
        self
    }

    /// Stable identifier: hex SHA-256 of the URL
    #[must_use]
    pub fn uniq_id(&self) -> String {
        sha256_hex(&self.url)
    }

    /// Relative directory the archive is unpacked into
    #[must_use]
    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.uniq_id())
    }
}

/// How to invoke the solver. A flat list `[binary, args...]` is accepted as
/// shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CommandRepr")]
pub struct Command {
    /// Executable, relative to the unpacked archive
    pub binary: String,
    /// Arguments passed before the benchmark
    pub arguments: Vec<String>,
    /// Whether the binary follows the StarExec calling convention
    pub compa_starexec: bool,
}

impl Command {
    /// Command with no arguments
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            arguments: Vec::new(),
            compa_starexec: false,
        }
    }

    /// Build from `[binary, args...]`
    pub fn from_argv(argv: Vec<String>) -> SubmissionResult<Self> {
        let mut argv = argv.into_iter();
        let binary = argv.next().ok_or(SubmissionError::EmptyCommand)?;
        Ok(Self {
            binary,
            arguments: argv.collect(),
            compa_starexec: false,
        })
    }

    /// Append arguments
    #[must_use]
    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Stable identifier of this command for a given submission and archive
    #[must_use]
    pub fn uniq_id(&self, name: &str, archive: &Archive) -> String {
        let mut data = vec![name, archive.url.as_str(), self.binary.as_str()];
        data.extend(self.arguments.iter().map(String::as_str));
        sha256_hex(data.join(" "))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandFields {
    binary: String,
    #[serde(default)]
    arguments: Vec<String>,
    #[serde(default)]
    compa_starexec: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommandRepr {
    Argv(Vec<String>),
    Fields(CommandFields),
}

impl TryFrom<CommandRepr> for Command {
    type Error = SubmissionError;

    fn try_from(repr: CommandRepr) -> Result<Self, Self::Error> {
        match repr {
            CommandRepr::Argv(argv) => Self::from_argv(argv),
            CommandRepr::Fields(CommandFields {
                binary,
                arguments,
                compa_starexec,
            }) => Ok(Self {
                binary,
                arguments,
                compa_starexec,
            }),
        }
    }
}

/// Full declaration of a solver entering the competition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Submission {
    /// Solver name
    pub name: String,
    /// People who built the solver
    pub contributors: Vec<Contributor>,
    /// People to contact about the submission
    pub contacts: Vec<NameEmail>,
    /// Default archive for participations that do not set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<Archive>,
    /// Default command for participations that do not set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Solver website
    pub website: String,
    /// System description document
    pub system_description: String,
    /// Kind of solver
    pub solver_type: SolverType,
    /// Participations
    pub participations: Participations,
}

impl Submission {
    /// Parse a JSON document and validate it
    pub fn from_json_str(json: &str) -> SubmissionResult<Self> {
        let submission: Self = serde_json::from_str(json)?;
        submission.check()
    }

    /// Read, parse and validate a JSON document
    pub fn load(path: impl AsRef<Path>) -> SubmissionResult<Self> {
        let path = path.as_ref();
        debug!("Loading submission: {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Stable identifier: hex SHA-256 of the name
    #[must_use]
    pub fn uniq_id(&self) -> String {
        sha256_hex(&self.name)
    }

    /// Every cross-field rule this submission breaks, empty when valid
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.contributors.is_empty() {
            violations.push(Violation::NoContributors);
        }
        if self.contacts.is_empty() {
            violations.push(Violation::NoContacts);
        }

        if self.archive.is_none() {
            let participations = self.indices_where(|p| p.archive.is_none());
            if !participations.is_empty() {
                violations.push(Violation::MissingArchive { participations });
            }
        }
        if self.command.is_none() {
            let participations = self.indices_where(|p| p.command.is_none());
            if !participations.is_empty() {
                violations.push(Violation::MissingCommand { participations });
            }
        }

        for (participation, p) in self.participations.iter().enumerate() {
            if p.tracks.is_empty() {
                violations.push(Violation::NoTracks { participation });
            }
            for &track in &p.tracks {
                for &division in &p.divisions {
                    if taxonomy::logics_of(track, division).is_none() {
                        violations.push(Violation::DivisionNotInTrack {
                            participation,
                            track,
                            division,
                        });
                    }
                }
            }
        }

        violations
    }

    /// Run [`Self::validate`] and turn violations into an error
    pub fn check(self) -> SubmissionResult<Self> {
        let violations = self.validate();
        if violations.is_empty() {
            return Ok(self);
        }
        warn!(
            "Submission {} failed validation with {} violation(s)",
            self.name,
            violations.len()
        );
        Err(SubmissionError::Invalid {
            name: self.name,
            violations,
        })
    }

    /// Archive a participation runs with, inherited from the root if unset
    #[must_use]
    pub fn archive_for<'a>(&'a self, participation: &'a Participation) -> Option<&'a Archive> {
        participation.archive.as_ref().or(self.archive.as_ref())
    }

    /// Command a participation runs with, inherited from the root if unset
    #[must_use]
    pub fn command_for<'a>(&'a self, participation: &'a Participation) -> Option<&'a Command> {
        participation.command.as_ref().or(self.command.as_ref())
    }

    /// Tracks, divisions and logics the solver is entered in
    #[must_use]
    pub fn resolve(&self) -> TrackMap {
        self.participations.resolve()
    }

    fn indices_where(&self, pred: impl Fn(&Participation) -> bool) -> Vec<usize> {
        self.participations
            .iter()
            .enumerate()
            .filter(|(_, p)| pred(p))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> serde_json::Value {
        json!({
            "name": "Z4",
            "contributors": ["Jane Smith", {"name": "John Doe", "website": "http://doe.name"}],
            "contacts": ["Jane Smith <jane.smith@edu.world>"],
            "archive": {"url": "http://z4.org/z4.tar.gz", "h": {"sha256": "abc"}},
            "command": ["bin/z4", "--smtcomp"],
            "website": "http://z4.org",
            "system_description": "http://z4.org/description.pdf",
            "solver_type": "Standalone",
            "participations": [
                {"tracks": ["SingleQuery"], "divisions": ["QF_Bitvec"]},
                {"tracks": ["Incremental"], "logics": "QF_.*LIA"}
            ]
        })
    }

    fn parse(value: serde_json::Value) -> SubmissionResult<Submission> {
        Submission::from_json_str(&value.to_string())
    }

    #[test]
    fn test_valid_submission() {
        let submission = parse(document()).unwrap();
        assert_eq!(submission.contributors[0], Contributor::new("Jane Smith"));
        assert_eq!(submission.contributors[1].website.as_deref(), Some("http://doe.name"));
        assert_eq!(submission.contacts[0].email, "jane.smith@edu.world");
        assert_eq!(submission.solver_type, SolverType::Standalone);

        let command = submission.command.as_ref().unwrap();
        assert_eq!(command.binary, "bin/z4");
        assert_eq!(command.arguments, vec!["--smtcomp".to_string()]);
        assert!(!command.compa_starexec);
        assert!(submission.validate().is_empty());
    }

    #[test]
    fn test_missing_root_archive_reports_all_participations() {
        let mut doc = document();
        doc.as_object_mut().unwrap().remove("archive");
        doc["participations"][1]["archive"] = json!({"url": "http://z4.org/inc.tar.gz"});
        doc["participations"]
            .as_array_mut()
            .unwrap()
            .push(json!({"tracks": ["Cloud"]}));

        match parse(doc) {
            Err(SubmissionError::Invalid { name, violations }) => {
                assert_eq!(name, "Z4");
                assert_eq!(
                    violations,
                    vec![Violation::MissingArchive {
                        participations: vec![0, 2]
                    }]
                );
            }
            other => panic!("expected archive violation, got {other:?}"),
        }
    }

    #[test]
    fn test_violations_are_collected() {
        let mut doc = document();
        let root = doc.as_object_mut().unwrap();
        root.remove("archive");
        root.remove("command");
        root.insert("contributors".into(), json!([]));
        root.insert("contacts".into(), json!([]));
        doc["participations"][0]["tracks"] = json!([]);
        doc["participations"][1]["divisions"] = json!(["QF_Strings"]);

        let submission: Submission = serde_json::from_value(doc).unwrap();
        let violations = submission.validate();
        assert_eq!(
            violations,
            vec![
                Violation::NoContributors,
                Violation::NoContacts,
                Violation::MissingArchive {
                    participations: vec![0, 1]
                },
                Violation::MissingCommand {
                    participations: vec![0, 1]
                },
                Violation::NoTracks { participation: 0 },
                Violation::DivisionNotInTrack {
                    participation: 1,
                    track: Track::Incremental,
                    division: Division::QF_Strings,
                },
            ]
        );

        let message = submission.check().unwrap_err().to_string();
        assert!(message.contains("field archive is needed"));
        assert!(message.contains("field command is needed"));
    }

    #[test]
    fn test_participation_level_overrides() {
        let mut doc = document();
        let root = doc.as_object_mut().unwrap();
        root.remove("archive");
        root.remove("command");
        for participation in doc["participations"].as_array_mut().unwrap() {
            participation["archive"] = json!({"url": "http://z4.org/p.tar.gz"});
            participation["command"] = json!({"binary": "z4", "compa_starexec": true});
        }

        let submission = parse(doc).unwrap();
        let first = &submission.participations.0[0];
        assert_eq!(submission.archive_for(first).unwrap().url, "http://z4.org/p.tar.gz");
        assert!(submission.command_for(first).unwrap().compa_starexec);
    }

    #[test]
    fn test_archive_requires_a_digest() {
        let err = serde_json::from_value::<Archive>(json!({"url": "http://x", "h": {}}));
        assert!(err.is_err());
        assert!(err.unwrap_err().to_string().contains("one hash type is required"));

        let archive: Archive = serde_json::from_value(json!({"url": "http://x"})).unwrap();
        assert!(archive.h.is_none());
        assert!(serde_json::from_value::<Archive>(json!({"url": "http://x", "h": {"sha512": "f"}})).is_ok());
        assert!(matches!(Hash::new(None, None), Err(SubmissionError::MissingHash)));
    }

    #[test]
    fn test_command_shapes() {
        assert!(serde_json::from_value::<Command>(json!([])).is_err());
        assert!(matches!(Command::from_argv(vec![]), Err(SubmissionError::EmptyCommand)));
        assert!(serde_json::from_value::<Command>(json!({"binary": "x", "bogus": 1})).is_err());

        let command: Command = serde_json::from_value(json!(["solver"])).unwrap();
        assert_eq!(command, Command::new("solver"));
    }

    #[test]
    fn test_contact_shapes() {
        let contact = NameEmail::parse("Jane Smith <jane.smith@edu.world>").unwrap();
        assert_eq!(contact.name, "Jane Smith");
        assert_eq!(contact.to_string(), "Jane Smith <jane.smith@edu.world>");

        let bare = NameEmail::parse("jane@edu.world").unwrap();
        assert_eq!(bare.name, "jane");

        let object: NameEmail =
            serde_json::from_value(json!({"name": "Jane", "email": "j@e.w"})).unwrap();
        assert_eq!(serde_json::to_value(&object).unwrap(), json!("Jane <j@e.w>"));

        assert!(NameEmail::parse("Jane Smith").is_err());
        assert!(NameEmail::parse("<jane@edu.world>").is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let mut doc = document();
        doc["homepage"] = json!("http://z4.org");
        assert!(matches!(parse(doc), Err(SubmissionError::Json(_))));
    }

    #[test]
    fn test_uniq_ids() {
        let submission = parse(document()).unwrap();
        assert_eq!(submission.uniq_id().len(), 64);
        assert_eq!(submission.uniq_id(), sha256_hex("Z4"));

        let archive = Archive::new("http://z4.org/z4.tar.gz");
        assert_eq!(archive.path(), PathBuf::from(archive.uniq_id()));

        let command = Command::new("bin/z4").with_arguments(["-v", "1"]);
        assert_eq!(
            command.uniq_id("Z4", &archive),
            sha256_hex("Z4 http://z4.org/z4.tar.gz bin/z4 -v 1")
        );
        assert_ne!(command.uniq_id("Z4", &archive), Command::new("bin/z4").uniq_id("Z4", &archive));
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
