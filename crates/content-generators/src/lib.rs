//! Deterministic persona, scenario, and misinterpretation generation.
//!
//! Given a generation type, a small structured input, a content pack, and a
//! caption tone, this crate produces a structured output, a plain-text
//! rendering, and a share caption. Identical requests always produce
//! byte-identical results: the seed is derived from the request itself and
//! every random choice is drawn from a single seeded stream.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - FNV-1a seed derivation over the request parts
//! - A mulberry32 stream with `pick`, `pick_many`, and `range` primitives
//! - Three generators sharing one input/output contract
//! - Built-in content packs loaded from embedded JSON, plus custom registries
//! - Canned example inputs, stored-output helpers, and an input filter
//!
//! # Example
//!
//! ```
//! use content_generators::{GeneratedOutput, generate_content};
//! use serde_json::json;
//!
//! let input = json!({
//!     "topic": "AI content ops",
//!     "goal": "ship weekly proof points",
//!     "voice": "direct",
//! });
//!
//! let first = generate_content("persona", &input, "devTwitter", "savage")
//!     .expect("generation succeeds");
//! let second = generate_content("persona", &input, "devTwitter", "savage")
//!     .expect("generation succeeds");
//!
//! assert_eq!(first, second);
//! assert!(matches!(first.output, GeneratedOutput::Persona(_)));
//! ```

pub mod cli;
mod dispatch;
mod error;
mod examples;
mod generator;
mod kind;
mod moderation;
mod pack;
mod seed;
mod selection;
mod share;
mod stream;

pub use dispatch::{ContentGenerator, generate_content};
pub use error::{GenerateError, PackError, ValidationError, ValidationReason};
pub use examples::{all_examples, example_input, random_example};
pub use generator::misinterpretation::{
    FIXES, MisinterpretationGenerator, MisinterpretationInput, MisinterpretationOutput,
};
pub use generator::persona::{PersonaGenerator, PersonaInput, PersonaOutput};
pub use generator::scenario::{
    SCENARIO_TAGS, ScenarioGenerator, ScenarioInput, ScenarioOutput, TAG_COUNT,
};
pub use generator::{
    GeneratedOutput, GeneratedPayload, Generator, GeneratorContext, GeneratorInput,
    MIN_FIELD_LENGTH,
};
pub use kind::{GenerationType, Tone};
pub use moderation::{BannedWords, ContentFilter, DEFAULT_BANNED_WORDS};
pub use pack::{Captions, Pack, PackId, PackRegistry};
pub use seed::{FNV_OFFSET_BASIS, PART_DELIMITER, SeedPart, seed_from_parts, string_to_seed};
pub use selection::{pick, pick_many, range};
pub use share::{LINK_PLACEHOLDER, StoredMeta, StoredOutput, resolve_share_caption};
pub use stream::SeededStream;
