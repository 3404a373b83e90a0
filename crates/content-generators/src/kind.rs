//! Closed sets of generation kinds and caption tones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// The kind of artefact a generation call produces.
///
/// # Examples
///
/// ```
/// use content_generators::GenerationType;
///
/// let kind: GenerationType = "scenario".parse().expect("known type");
/// assert_eq!(kind, GenerationType::Scenario);
/// assert_eq!(GenerationType::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    /// An internet persona card.
    Persona,
    /// A short chaotic scenario.
    Scenario,
    /// An analysis of how a statement could be misread.
    Misinterpretation,
}

impl GenerationType {
    /// Every generation type, in display order.
    pub const ALL: [Self; 3] = [Self::Persona, Self::Scenario, Self::Misinterpretation];

    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Persona => "persona",
            Self::Scenario => "scenario",
            Self::Misinterpretation => "misinterpretation",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationType {
    type Err = GenerateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| GenerateError::UnknownType {
                value: value.to_owned(),
            })
    }
}

/// Caption style applied to the share caption.
///
/// Tone only selects which caption pool is drawn from; it never changes the
/// generated output itself, although it does feed the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Relaxed and self-deprecating.
    Chill,
    /// Roast-style.
    Savage,
    /// Neutral workplace register.
    Professional,
}

impl Tone {
    /// Every tone, in display order.
    pub const ALL: [Self; 3] = [Self::Chill, Self::Savage, Self::Professional];

    /// Returns the wire name of the tone.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chill => "chill",
            Self::Savage => "savage",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = GenerateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tone| tone.as_str() == value)
            .ok_or_else(|| GenerateError::UnknownTone {
                value: value.to_owned(),
            })
    }
}
