//! Persona generator: a title, traits, and tweet drafts for an internet
//! persona built around a topic and a goal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::input::{object, text_field};
use super::{GeneratedPayload, Generator, GeneratorContext};
use crate::error::{GenerateError, ValidationError};
use crate::kind::GenerationType;

/// Number of obsessions drawn per persona.
pub(crate) const OBSESSION_COUNT: usize = 3;

/// Number of triggers drawn per persona.
pub(crate) const TRIGGER_COUNT: usize = 2;

/// Number of hooks drawn per persona.
pub(crate) const HOOK_COUNT: usize = 3;

const DRAFT_RATING_MIN: u32 = 4;
const DRAFT_RATING_MAX: u32 = 9;

/// Normalised persona input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaInput {
    /// What the persona posts about.
    pub topic: String,
    /// What the persona is chasing.
    pub goal: String,
    /// The persona's voice, e.g. "direct".
    pub voice: String,
}

/// Generated persona card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaOutput {
    /// Persona title from the pack.
    pub title: String,
    /// One-sentence summary built from the input.
    pub one_liner: String,
    /// Three distinct obsessions.
    pub obsessions: Vec<String>,
    /// Two distinct triggers.
    pub triggers: Vec<String>,
    /// Three distinct hooks.
    pub hooks: Vec<String>,
    /// One draft per pack tweet format, each with a rating out of 10.
    pub tweet_drafts: Vec<String>,
}

/// Generates [`PersonaOutput`] cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaGenerator;

impl Generator for PersonaGenerator {
    const KIND: GenerationType = GenerationType::Persona;

    type Input = PersonaInput;
    type Output = PersonaOutput;

    fn normalize_input(raw: &Value) -> Result<PersonaInput, ValidationError> {
        let fields = object(raw)?;
        Ok(PersonaInput {
            topic: text_field(fields, "topic")?,
            goal: text_field(fields, "goal")?,
            voice: text_field(fields, "voice")?,
        })
    }

    fn generate(
        mut ctx: GeneratorContext<'_, PersonaInput>,
    ) -> Result<GeneratedPayload<PersonaOutput>, GenerateError> {
        let input = ctx.input();
        let pack = ctx.pack();

        let title = ctx
            .pick_phrase(pack.persona_titles(), "personaTitles")?
            .to_owned();
        let obsessions = ctx.pick_phrases(pack.persona_obsessions(), OBSESSION_COUNT);
        let triggers = ctx.pick_phrases(pack.persona_triggers(), TRIGGER_COUNT);
        let hooks = ctx.pick_phrases(pack.persona_hooks(), HOOK_COUNT);

        let tweet_drafts = pack
            .persona_tweet_formats()
            .iter()
            .map(|format| {
                let rating = ctx.range(DRAFT_RATING_MIN, DRAFT_RATING_MAX);
                format!("{} ({rating}/10)", fill_tweet_format(format, input))
            })
            .collect::<Vec<_>>();

        let one_liner = format!(
            "{} {} builder chasing {}.",
            input.voice, input.topic, input.goal
        );

        let output_text = render_text(
            &title,
            &one_liner,
            &obsessions,
            &triggers,
            &hooks,
            &tweet_drafts,
        );
        let share_caption = ctx.pick_caption()?;

        Ok(GeneratedPayload {
            output: PersonaOutput {
                title,
                one_liner,
                obsessions,
                triggers,
                hooks,
                tweet_drafts,
            },
            output_text,
            share_caption,
        })
    }
}

/// Substitutes the first `{topic}` and then the first `{goal}` placeholder.
fn fill_tweet_format(format: &str, input: &PersonaInput) -> String {
    format
        .replacen("{topic}", &input.topic, 1)
        .replacen("{goal}", &input.goal, 1)
}

fn render_text(
    title: &str,
    one_liner: &str,
    obsessions: &[String],
    triggers: &[String],
    hooks: &[String],
    tweet_drafts: &[String],
) -> String {
    let mut lines = vec![
        format!("Persona: {title}"),
        one_liner.to_owned(),
        format!("Obsessions: {}", obsessions.join(", ")),
        format!("Triggers: {}", triggers.join(", ")),
        format!("Hooks: {}", hooks.join(", ")),
        "Tweet drafts:".to_owned(),
    ];
    lines.extend(tweet_drafts.iter().map(|tweet| format!("- {tweet}")));
    lines.join("\n")
}
