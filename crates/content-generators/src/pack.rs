//! Content packs and the registry that serves them.
//!
//! A pack is a named bundle of phrase pools and per-tone caption templates.
//! Packs are JSON documents, so new vocabulary is configuration rather than
//! code. The three built-in packs are embedded at compile time and parsed
//! once into a process-wide registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GenerateError, PackError};
use crate::generator::{misinterpretation, persona, scenario};
use crate::kind::Tone;

/// Current supported pack document version.
const SUPPORTED_VERSION: u32 = 1;

const BUILTIN_DOCUMENTS: [&str; 3] = [
    include_str!("../packs/general.json"),
    include_str!("../packs/devTwitter.json"),
    include_str!("../packs/naijaTwitter.json"),
];

static BUILTIN: LazyLock<Result<PackRegistry, PackError>> =
    LazyLock::new(|| PackRegistry::from_json_documents(BUILTIN_DOCUMENTS));

/// Identifier of a content pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PackId {
    /// Neutral startup and creator vocabulary.
    General,
    /// Developer-community vocabulary.
    DevTwitter,
    /// Nigerian Twitter vocabulary.
    NaijaTwitter,
}

impl PackId {
    /// Every pack identifier, in display order.
    pub const ALL: [Self; 3] = [Self::General, Self::DevTwitter, Self::NaijaTwitter];

    /// Returns the wire name of the pack.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::DevTwitter => "devTwitter",
            Self::NaijaTwitter => "naijaTwitter",
        }
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackId {
    type Err = GenerateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .ok_or_else(|| GenerateError::UnknownPack {
                value: value.to_owned(),
            })
    }
}

/// Caption templates for each tone. Every template carries a `{link}`
/// placeholder that is resolved at share time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Captions {
    chill: Vec<String>,
    savage: Vec<String>,
    professional: Vec<String>,
}

impl Captions {
    /// Returns the caption pool for a tone.
    #[must_use]
    pub fn for_tone(&self, tone: Tone) -> &[String] {
        match tone {
            Tone::Chill => &self.chill,
            Tone::Savage => &self.savage,
            Tone::Professional => &self.professional,
        }
    }
}

/// An immutable content pack.
///
/// # Example
///
/// ```
/// use content_generators::{PackId, PackRegistry};
///
/// let registry = PackRegistry::builtin().expect("built-in packs load");
/// let pack = registry.lookup(PackId::DevTwitter).expect("pack exists");
///
/// assert_eq!(pack.label(), "Dev Twitter");
/// assert!(!pack.persona_titles().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    id: PackId,
    label: String,
    persona_titles: Vec<String>,
    persona_obsessions: Vec<String>,
    persona_triggers: Vec<String>,
    persona_hooks: Vec<String>,
    persona_tweet_formats: Vec<String>,
    scenario_openers: Vec<String>,
    scenario_twists: Vec<String>,
    scenario_moves: Vec<String>,
    misreads: Vec<String>,
    replies: Vec<String>,
    captions: Captions,
}

impl Pack {
    /// Parses and validates a pack from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PackError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - Any phrase pool or caption list is empty
    pub fn from_json(json: &str) -> Result<Self, PackError> {
        let raw: RawPack = serde_json::from_str(json).map_err(|e| PackError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawPack) -> Result<Self, PackError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(PackError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let pack = Self {
            id: raw.id,
            label: raw.label,
            persona_titles: raw.persona_titles,
            persona_obsessions: raw.persona_obsessions,
            persona_triggers: raw.persona_triggers,
            persona_hooks: raw.persona_hooks,
            persona_tweet_formats: raw.persona_tweet_formats,
            scenario_openers: raw.scenario_openers,
            scenario_twists: raw.scenario_twists,
            scenario_moves: raw.scenario_moves,
            misreads: raw.misreads,
            replies: raw.replies,
            captions: raw.captions,
        };
        pack.validate()?;
        Ok(pack)
    }

    fn validate(&self) -> Result<(), PackError> {
        for (pool, entries, largest_draw) in self.pools() {
            if entries.is_empty() {
                return Err(PackError::EmptyPool {
                    pack: self.id,
                    pool,
                });
            }
            if entries.len() < largest_draw {
                warn!(
                    pack = %self.id,
                    pool,
                    available = entries.len(),
                    requested = largest_draw,
                    "pack pool is smaller than its largest draw; selections will be shorter"
                );
            }
        }
        Ok(())
    }

    /// Every pool with its name and the most items ever drawn from it at once.
    fn pools(&self) -> [(&'static str, &[String], usize); 13] {
        [
            ("personaTitles", self.persona_titles.as_slice(), 1),
            (
                "personaObsessions",
                self.persona_obsessions.as_slice(),
                persona::OBSESSION_COUNT,
            ),
            ("personaTriggers", self.persona_triggers.as_slice(), persona::TRIGGER_COUNT),
            ("personaHooks", self.persona_hooks.as_slice(), persona::HOOK_COUNT),
            ("personaTweetFormats", self.persona_tweet_formats.as_slice(), 1),
            ("scenarioOpeners", self.scenario_openers.as_slice(), 1),
            ("scenarioTwists", self.scenario_twists.as_slice(), 1),
            ("scenarioMoves", self.scenario_moves.as_slice(), scenario::NEXT_MOVE_COUNT),
            ("misreads", self.misreads.as_slice(), misinterpretation::MISREAD_COUNT),
            ("replies", self.replies.as_slice(), misinterpretation::REPLY_COUNT),
            ("captions.chill", self.captions.chill.as_slice(), 1),
            ("captions.savage", self.captions.savage.as_slice(), 1),
            ("captions.professional", self.captions.professional.as_slice(), 1),
        ]
    }

    /// Returns the pack identifier.
    #[must_use]
    pub const fn id(&self) -> PackId {
        self.id
    }

    /// Returns the human-readable pack label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Persona title pool.
    #[must_use]
    pub fn persona_titles(&self) -> &[String] {
        &self.persona_titles
    }

    /// Persona obsession pool.
    #[must_use]
    pub fn persona_obsessions(&self) -> &[String] {
        &self.persona_obsessions
    }

    /// Persona trigger pool.
    #[must_use]
    pub fn persona_triggers(&self) -> &[String] {
        &self.persona_triggers
    }

    /// Persona hook pool.
    #[must_use]
    pub fn persona_hooks(&self) -> &[String] {
        &self.persona_hooks
    }

    /// Tweet templates with `{topic}` and `{goal}` placeholders, used in
    /// order rather than drawn.
    #[must_use]
    pub fn persona_tweet_formats(&self) -> &[String] {
        &self.persona_tweet_formats
    }

    /// Scenario headline openers.
    #[must_use]
    pub fn scenario_openers(&self) -> &[String] {
        &self.scenario_openers
    }

    /// Scenario twists.
    #[must_use]
    pub fn scenario_twists(&self) -> &[String] {
        &self.scenario_twists
    }

    /// Scenario next moves.
    #[must_use]
    pub fn scenario_moves(&self) -> &[String] {
        &self.scenario_moves
    }

    /// Misread explanations.
    #[must_use]
    pub fn misreads(&self) -> &[String] {
        &self.misreads
    }

    /// Predicted audience replies.
    #[must_use]
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Caption templates by tone.
    #[must_use]
    pub const fn captions(&self) -> &Captions {
        &self.captions
    }
}

/// A set of packs keyed by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRegistry {
    packs: BTreeMap<PackId, Pack>,
}

impl PackRegistry {
    /// Returns the process-wide registry of built-in packs.
    ///
    /// The embedded documents are parsed on first use and shared afterwards.
    ///
    /// # Errors
    ///
    /// Returns the [`PackError`] raised while parsing the embedded packs.
    pub fn builtin() -> Result<&'static Self, PackError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Builds a registry from already-parsed packs.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DuplicatePack`] if two packs share an identifier.
    pub fn from_packs<I>(packs: I) -> Result<Self, PackError>
    where
        I: IntoIterator<Item = Pack>,
    {
        let mut registry = BTreeMap::new();
        for pack in packs {
            let id = pack.id();
            if registry.insert(id, pack).is_some() {
                return Err(PackError::DuplicatePack { pack: id });
            }
        }
        Ok(Self { packs: registry })
    }

    /// Parses each JSON document as a pack and builds a registry.
    ///
    /// # Errors
    ///
    /// Returns [`PackError`] if any document fails to parse or validate, or if
    /// two documents share an identifier.
    pub fn from_json_documents<'a, I>(documents: I) -> Result<Self, PackError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let packs = documents
            .into_iter()
            .map(Pack::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_packs(packs)
    }

    /// Returns a registry with `pack` added, replacing any pack with the same
    /// identifier.
    #[must_use]
    pub fn with_pack(mut self, pack: Pack) -> Self {
        self.packs.insert(pack.id(), pack);
        self
    }

    /// Looks up a pack by identifier.
    #[must_use]
    pub fn lookup(&self, id: PackId) -> Option<&Pack> {
        self.packs.get(&id)
    }

    /// Returns the identifiers present in the registry, in order.
    pub fn ids(&self) -> impl Iterator<Item = PackId> + '_ {
        self.packs.keys().copied()
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPack {
    version: u32,
    id: PackId,
    label: String,
    persona_titles: Vec<String>,
    persona_obsessions: Vec<String>,
    persona_triggers: Vec<String>,
    persona_hooks: Vec<String>,
    persona_tweet_formats: Vec<String>,
    scenario_openers: Vec<String>,
    scenario_twists: Vec<String>,
    scenario_moves: Vec<String>,
    misreads: Vec<String>,
    replies: Vec<String>,
    captions: Captions,
}
