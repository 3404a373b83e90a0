//! Misinterpretation generator: how a statement could be misread by an
//! audience, what they might reply, and a suggested fix.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::input::{object, text_field};
use super::{GeneratedPayload, Generator, GeneratorContext};
use crate::error::{GenerateError, ValidationError};
use crate::kind::GenerationType;

/// Number of misreads drawn per analysis.
pub(crate) const MISREAD_COUNT: usize = 3;

/// Number of predicted replies drawn per analysis.
pub(crate) const REPLY_COUNT: usize = 3;

/// Fix suggestions shared by every pack.
pub const FIXES: [&str; 4] = [
    "Add a one-line disclaimer.",
    "Pin a follow-up with the actual scope.",
    "Repeat the timeline in plain English.",
    "Move it to a short doc + link it.",
];

/// Normalised misinterpretation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisinterpretationInput {
    /// The statement being analysed.
    pub statement: String,
    /// Who reads it.
    pub audience: String,
    /// Where it is posted.
    pub channel: String,
}

/// Generated misinterpretation analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MisinterpretationOutput {
    /// "Misread in {channel} by {audience}".
    pub headline: String,
    /// Three distinct misreads from the pack.
    pub misreads: Vec<String>,
    /// Score formatted as `"{a}.{b} / 10"`.
    pub risk_signal: String,
    /// Three distinct replies from the pack.
    pub predicted_replies: Vec<String>,
    /// One entry from [`FIXES`].
    pub fix: String,
}

/// Generates [`MisinterpretationOutput`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisinterpretationGenerator;

impl Generator for MisinterpretationGenerator {
    const KIND: GenerationType = GenerationType::Misinterpretation;

    type Input = MisinterpretationInput;
    type Output = MisinterpretationOutput;

    fn normalize_input(raw: &Value) -> Result<MisinterpretationInput, ValidationError> {
        let fields = object(raw)?;
        Ok(MisinterpretationInput {
            statement: text_field(fields, "statement")?,
            audience: text_field(fields, "audience")?,
            channel: text_field(fields, "channel")?,
        })
    }

    fn generate(
        mut ctx: GeneratorContext<'_, MisinterpretationInput>,
    ) -> Result<GeneratedPayload<MisinterpretationOutput>, GenerateError> {
        let input = ctx.input();
        let pack = ctx.pack();

        let headline = format!("Misread in {} by {}", input.channel, input.audience);
        let misreads = ctx.pick_phrases(pack.misreads(), MISREAD_COUNT);
        let predicted_replies = ctx.pick_phrases(pack.replies(), REPLY_COUNT);
        let whole = ctx.range(2, 9);
        let tenths = ctx.range(1, 9);
        let risk_signal = format!("{whole}.{tenths} / 10");
        let fix = ctx.pick_phrase(&FIXES, "fixes")?.to_owned();

        let mut lines = vec![
            headline.clone(),
            format!("Risk signal: {risk_signal}"),
            "Misreads:".to_owned(),
        ];
        lines.extend(misreads.iter().map(|item| format!("- {item}")));
        lines.push("Predicted replies:".to_owned());
        lines.extend(predicted_replies.iter().map(|item| format!("- {item}")));
        lines.push(format!("Fix: {fix}"));
        let output_text = lines.join("\n");

        let share_caption = ctx.pick_caption()?;

        Ok(GeneratedPayload {
            output: MisinterpretationOutput {
                headline,
                misreads,
                risk_signal,
                predicted_replies,
                fix,
            },
            output_text,
            share_caption,
        })
    }
}
