//! Canned example inputs for each generation type.
//!
//! [`random_example`] uses ordinary thread-local randomness. It is a
//! convenience for filling in a form and sits outside the determinism
//! guarantees of the generators.

use rand::seq::IndexedRandom;

use crate::generator::GeneratorInput;
use crate::generator::misinterpretation::MisinterpretationInput;
use crate::generator::persona::PersonaInput;
use crate::generator::scenario::ScenarioInput;
use crate::kind::GenerationType;

const PERSONA_EXAMPLES: [(&str, &str, &str); 3] = [
    ("AI content ops", "ship weekly proof points", "direct"),
    ("creator workflows", "double weekly output", "calm"),
    ("B2B SaaS launches", "keep retention tight", "sharp"),
];

const SCENARIO_EXAMPLES: [(&str, &str, &str); 3] = [
    ("Your growth team", "the main channel goes dark", "scrappy"),
    ("Your design pod", "the brief changes overnight", "focused"),
    (
        "A founder-led marketing sprint",
        "the deadline shrinks to 48 hours",
        "high-energy",
    ),
];

const MISINTERPRETATION_EXAMPLES: [(&str, &str, &str); 3] = [
    (
        "We might test the new onboarding flow next week",
        "founders",
        "email",
    ),
    ("We can explore the pricing change later", "sales", "Slack"),
    ("We might ship a beta for power users", "community", "Twitter"),
];

/// Returns the canonical example input for a generation type.
///
/// # Example
///
/// ```
/// use content_generators::{GenerationType, GeneratorInput, example_input};
///
/// let GeneratorInput::Persona(persona) = example_input(GenerationType::Persona) else {
///     panic!("expected persona input");
/// };
/// assert_eq!(persona.topic, "AI content ops");
/// ```
#[must_use]
pub fn example_input(kind: GenerationType) -> GeneratorInput {
    let [canonical, ..] = *pool(kind);
    build(kind, canonical)
}

/// Returns one of the canned example inputs for a generation type, chosen
/// at random.
#[must_use]
pub fn random_example(kind: GenerationType) -> GeneratorInput {
    let examples = pool(kind);
    let [canonical, ..] = *examples;
    let fields = examples
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(canonical);
    build(kind, fields)
}

/// Every canned example for a generation type, canonical example first.
#[must_use]
pub fn all_examples(kind: GenerationType) -> Vec<GeneratorInput> {
    pool(kind)
        .iter()
        .map(|fields| build(kind, *fields))
        .collect()
}

const fn pool(kind: GenerationType) -> &'static [(&'static str, &'static str, &'static str); 3] {
    match kind {
        GenerationType::Persona => &PERSONA_EXAMPLES,
        GenerationType::Scenario => &SCENARIO_EXAMPLES,
        GenerationType::Misinterpretation => &MISINTERPRETATION_EXAMPLES,
    }
}

fn build(kind: GenerationType, (first, second, third): (&str, &str, &str)) -> GeneratorInput {
    match kind {
        GenerationType::Persona => GeneratorInput::Persona(PersonaInput {
            topic: first.to_owned(),
            goal: second.to_owned(),
            voice: third.to_owned(),
        }),
        GenerationType::Scenario => GeneratorInput::Scenario(ScenarioInput {
            setting: first.to_owned(),
            constraint: second.to_owned(),
            voice: third.to_owned(),
        }),
        GenerationType::Misinterpretation => {
            GeneratorInput::Misinterpretation(MisinterpretationInput {
                statement: first.to_owned(),
                audience: second.to_owned(),
                channel: third.to_owned(),
            })
        }
    }
}
