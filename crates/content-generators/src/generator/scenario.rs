//! Scenario generator: a short chaotic situation for a team or setting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::input::{object, text_field};
use super::{GeneratedPayload, Generator, GeneratorContext};
use crate::error::{GenerateError, ValidationError};
use crate::kind::GenerationType;

/// Number of next moves drawn per scenario.
pub(crate) const NEXT_MOVE_COUNT: usize = 2;

/// Number of tags drawn per scenario.
pub const TAG_COUNT: usize = 3;

/// Tag pool shared by every pack.
pub const SCENARIO_TAGS: [&str; 5] = [
    "pivot",
    "speedrun",
    "content debt",
    "scrappy ops",
    "hard reset",
];

const CHAOS_MIN: u32 = 4;
const CHAOS_MAX: u32 = 9;

/// Normalised scenario input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Who or where the scenario happens to.
    pub setting: String,
    /// The constraint that hits mid-scenario.
    pub constraint: String,
    /// The energy the setting runs on.
    pub voice: String,
}

/// Generated scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutput {
    /// Pack opener followed by the setting.
    pub headline: String,
    /// One-sentence scenario.
    pub scenario: String,
    /// Chaos rating from 4 to 9.
    pub chaos_level: u32,
    /// Three distinct tags from [`SCENARIO_TAGS`].
    pub tags: Vec<String>,
    /// Two distinct next moves from the pack.
    pub next_moves: Vec<String>,
}

/// Generates [`ScenarioOutput`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioGenerator;

impl Generator for ScenarioGenerator {
    const KIND: GenerationType = GenerationType::Scenario;

    type Input = ScenarioInput;
    type Output = ScenarioOutput;

    fn normalize_input(raw: &Value) -> Result<ScenarioInput, ValidationError> {
        let fields = object(raw)?;
        Ok(ScenarioInput {
            setting: text_field(fields, "setting")?,
            constraint: text_field(fields, "constraint")?,
            voice: text_field(fields, "voice")?,
        })
    }

    fn generate(
        mut ctx: GeneratorContext<'_, ScenarioInput>,
    ) -> Result<GeneratedPayload<ScenarioOutput>, GenerateError> {
        let input = ctx.input();
        let pack = ctx.pack();

        let opener = ctx.pick_phrase(pack.scenario_openers(), "scenarioOpeners")?;
        let headline = format!("{opener} {}", input.setting);
        let twist = ctx.pick_phrase(pack.scenario_twists(), "scenarioTwists")?;
        let scenario = format!(
            "{} is running on {} energy when {} hits. Then {twist}.",
            input.setting, input.voice, input.constraint
        );
        let chaos_level = ctx.range(CHAOS_MIN, CHAOS_MAX);
        let tags = ctx.pick_phrases(&SCENARIO_TAGS, TAG_COUNT);
        let next_moves = ctx.pick_phrases(pack.scenario_moves(), NEXT_MOVE_COUNT);

        let output_text = [
            headline.clone(),
            scenario.clone(),
            format!("Chaos level: {chaos_level}/10"),
            format!("Tags: {}", tags.join(", ")),
            format!("Next moves: {}", next_moves.join(" | ")),
        ]
        .join("\n");
        let share_caption = ctx.pick_caption()?;

        Ok(GeneratedPayload {
            output: ScenarioOutput {
                headline,
                scenario,
                chaos_level,
                tags,
                next_moves,
            },
            output_text,
            share_caption,
        })
    }
}
