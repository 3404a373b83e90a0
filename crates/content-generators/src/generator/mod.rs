//! Generator contract shared by every generation type.
//!
//! A generator normalises raw JSON input and then turns that input, a pack,
//! and a tone into a [`GeneratedPayload`] by drawing from a single
//! [`SeededStream`]. Draw order is part of each generator's contract: moving
//! one `pick` or `range` call changes every draw after it.

pub mod misinterpretation;
pub mod persona;
pub mod scenario;

mod input;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GenerateError, ValidationError};
use crate::kind::{GenerationType, Tone};
use crate::pack::Pack;
use crate::selection;
use crate::stream::SeededStream;

pub use input::MIN_FIELD_LENGTH;
use misinterpretation::{MisinterpretationInput, MisinterpretationOutput};
use persona::{PersonaInput, PersonaOutput};
use scenario::{ScenarioInput, ScenarioOutput};

/// The result of one generation call.
///
/// `share_caption` keeps its `{link}` placeholder; see
/// [`crate::resolve_share_caption`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPayload<O> {
    /// Structured output.
    pub output: O,
    /// Plain-text rendering of `output`, one item per line.
    pub output_text: String,
    /// Caption template drawn from the tone's caption pool.
    pub share_caption: String,
}

impl<O> GeneratedPayload<O> {
    /// Converts the output while keeping the text and caption.
    pub fn map_output<P, F>(self, convert: F) -> GeneratedPayload<P>
    where
        F: FnOnce(O) -> P,
    {
        GeneratedPayload {
            output: convert(self.output),
            output_text: self.output_text,
            share_caption: self.share_caption,
        }
    }
}

/// Normalised input for any generation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratorInput {
    /// Persona input.
    Persona(PersonaInput),
    /// Scenario input.
    Scenario(ScenarioInput),
    /// Misinterpretation input.
    Misinterpretation(MisinterpretationInput),
}

impl GeneratorInput {
    /// Returns the generation type this input belongs to.
    #[must_use]
    pub const fn kind(&self) -> GenerationType {
        match self {
            Self::Persona(_) => GenerationType::Persona,
            Self::Scenario(_) => GenerationType::Scenario,
            Self::Misinterpretation(_) => GenerationType::Misinterpretation,
        }
    }
}

/// Structured output for any generation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GeneratedOutput {
    /// Persona output.
    Persona(PersonaOutput),
    /// Scenario output.
    Scenario(ScenarioOutput),
    /// Misinterpretation output.
    Misinterpretation(MisinterpretationOutput),
}

impl GeneratedOutput {
    /// Returns the generation type that produced this output.
    #[must_use]
    pub const fn kind(&self) -> GenerationType {
        match self {
            Self::Persona(_) => GenerationType::Persona,
            Self::Scenario(_) => GenerationType::Scenario,
            Self::Misinterpretation(_) => GenerationType::Misinterpretation,
        }
    }
}

/// Everything one generation call needs: input, pack, tone, and the single
/// stream every draw is taken from.
#[derive(Debug)]
pub struct GeneratorContext<'a, I> {
    input: &'a I,
    pack: &'a Pack,
    tone: Tone,
    seed: u32,
    stream: &'a mut SeededStream,
}

impl<'a, I> GeneratorContext<'a, I> {
    /// Bundles the inputs of one generation call.
    pub const fn new(
        input: &'a I,
        pack: &'a Pack,
        tone: Tone,
        seed: u32,
        stream: &'a mut SeededStream,
    ) -> Self {
        Self {
            input,
            pack,
            tone,
            seed,
            stream,
        }
    }

    /// The normalised input.
    #[must_use]
    pub const fn input(&self) -> &'a I {
        self.input
    }

    /// The selected pack.
    #[must_use]
    pub const fn pack(&self) -> &'a Pack {
        self.pack
    }

    /// The selected tone.
    #[must_use]
    pub const fn tone(&self) -> Tone {
        self.tone
    }

    /// The seed the stream was built from.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Picks one item using the shared stream.
    pub fn pick<'p, T>(&mut self, items: &'p [T]) -> Option<&'p T> {
        selection::pick(self.stream, items)
    }

    /// Picks up to `count` distinct items using the shared stream.
    pub fn pick_many<'p, T>(&mut self, items: &'p [T], count: usize) -> Vec<&'p T> {
        selection::pick_many(self.stream, items, count)
    }

    /// Draws an integer in `min..=max` using the shared stream.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        selection::range(self.stream, min, max)
    }

    /// Picks one phrase, failing if the named pool is empty.
    pub(crate) fn pick_phrase<'p, S>(
        &mut self,
        items: &'p [S],
        pool: &'static str,
    ) -> Result<&'p str, GenerateError>
    where
        S: AsRef<str>,
    {
        self.pick(items)
            .map(AsRef::as_ref)
            .ok_or(GenerateError::EmptyPool {
                pack: self.pack.id(),
                pool,
            })
    }

    /// Picks up to `count` distinct phrases as owned strings.
    pub(crate) fn pick_phrases<S>(&mut self, items: &[S], count: usize) -> Vec<String>
    where
        S: AsRef<str>,
    {
        self.pick_many(items, count)
            .into_iter()
            .map(|item| item.as_ref().to_owned())
            .collect()
    }

    /// Draws the share caption from the tone's caption pool.
    pub(crate) fn pick_caption(&mut self) -> Result<String, GenerateError> {
        let pack = self.pack;
        let pool = caption_pool_name(self.tone);
        self.pick_phrase(pack.captions().for_tone(self.tone), pool)
            .map(str::to_owned)
    }
}

const fn caption_pool_name(tone: Tone) -> &'static str {
    match tone {
        Tone::Chill => "captions.chill",
        Tone::Savage => "captions.savage",
        Tone::Professional => "captions.professional",
    }
}

/// A generation type's input schema and draw algorithm.
pub trait Generator {
    /// The generation type this generator implements.
    const KIND: GenerationType;

    /// Normalised input. Its serialised form feeds the seed, so field order
    /// must be fixed by the type definition.
    type Input: Serialize;

    /// Structured output.
    type Output: Serialize;

    /// Validates raw input and trims every recognised field.
    ///
    /// Unknown fields are tolerated and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first field that is missing, not
    /// a string, or shorter than [`MIN_FIELD_LENGTH`] after trimming.
    fn normalize_input(raw: &Value) -> Result<Self::Input, ValidationError>;

    /// Produces the payload by drawing from the context's stream.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyPool`] if the pack lacks entries for a
    /// pool the algorithm draws from.
    fn generate(
        ctx: GeneratorContext<'_, Self::Input>,
    ) -> Result<GeneratedPayload<Self::Output>, GenerateError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::pack::{PackId, PackRegistry};

    fn general_pack() -> &'static Pack {
        PackRegistry::builtin()
            .expect("built-in packs load")
            .lookup(PackId::General)
            .expect("general pack exists")
    }

    #[rstest]
    #[case(Tone::Chill)]
    #[case(Tone::Savage)]
    #[case(Tone::Professional)]
    fn caption_comes_from_the_tone_pool(#[case] tone: Tone) {
        let pack = general_pack();
        let mut stream = SeededStream::new(11);
        let mut ctx = GeneratorContext::new(&(), pack, tone, 11, &mut stream);

        let caption = ctx.pick_caption().expect("caption pool is non-empty");
        assert!(pack.captions().for_tone(tone).contains(&caption));
    }

    #[test]
    fn context_primitives_share_one_stream() {
        let pack = general_pack();
        let mut stream = SeededStream::new(5);
        let mut ctx = GeneratorContext::new(&(), pack, Tone::Chill, 5, &mut stream);
        let from_context = [ctx.range(0, 99), ctx.range(0, 99)];

        let mut reference = SeededStream::new(5);
        let expected = [
            selection::range(&mut reference, 0, 99),
            selection::range(&mut reference, 0, 99),
        ];
        assert_eq!(from_context, expected);
    }

    #[test]
    fn pick_phrase_reports_empty_pools() {
        let pack = general_pack();
        let mut stream = SeededStream::new(5);
        let mut ctx = GeneratorContext::new(&(), pack, Tone::Chill, 5, &mut stream);
        let empty: [&str; 0] = [];

        assert_eq!(
            ctx.pick_phrase(&empty, "fixes"),
            Err(GenerateError::EmptyPool {
                pack: PackId::General,
                pool: "fixes"
            })
        );
    }

    #[test]
    fn map_output_keeps_text_and_caption() {
        let payload = GeneratedPayload {
            output: 3_u32,
            output_text: "text".to_owned(),
            share_caption: "caption {link}".to_owned(),
        };
        let mapped = payload.map_output(|value| value * 2);
        assert_eq!(mapped.output, 6);
        assert_eq!(mapped.output_text, "text");
        assert_eq!(mapped.share_caption, "caption {link}");
    }
}
