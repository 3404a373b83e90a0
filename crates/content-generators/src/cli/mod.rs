//! Command-line front end for the content generators.
//!
//! The `generate-content` binary parses [`CliArgs`], loads
//! [`GeneratorSettings`], and delegates to [`run`], so the whole flow can be
//! exercised in tests without spawning a process.

mod config;
mod error;

use std::ffi::OsString;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use ortho_config::OrthoConfig;
use serde_json::Value;
use tracing::debug;

use crate::dispatch::generate_content;
use crate::examples::random_example;
use crate::generator::{GeneratedOutput, GeneratedPayload};
use crate::kind::GenerationType;
use crate::moderation::{BannedWords, ContentFilter};
use crate::share::resolve_share_caption;

pub use config::GeneratorSettings;
pub use error::CliError;

/// `generate-content` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "generate-content",
    about = "Generate a persona, scenario, or misinterpretation from a content pack",
    version
)]
pub struct CliArgs {
    /// Generation type: persona, scenario, or misinterpretation.
    #[arg(long = "type", value_name = "type")]
    pub kind: String,
    /// Content pack identifier. Falls back to `CONTENT_GEN_DEFAULT_PACK`.
    #[arg(long, value_name = "id")]
    pub pack: Option<String>,
    /// Caption tone. Falls back to `CONTENT_GEN_DEFAULT_TONE`.
    #[arg(long, value_name = "tone")]
    pub tone: Option<String>,
    /// Inline JSON input object.
    #[arg(long, value_name = "json")]
    pub input: Option<String>,
    /// Path to a JSON file holding the input object.
    #[arg(long = "input-file", value_name = "path")]
    pub input_file: Option<String>,
    /// Use one of the canned example inputs for the type.
    #[arg(long)]
    pub example: bool,
    /// Share URL substituted into the caption's `{link}` placeholder.
    #[arg(long, value_name = "url")]
    pub link: Option<String>,
    /// Print the payload as pretty JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Loads [`GeneratorSettings`] from `CONTENT_GEN_*` environment variables and
/// any discovered configuration files.
///
/// # Errors
///
/// Returns [`CliError::Settings`] if a configuration source is malformed.
pub fn load_settings() -> Result<GeneratorSettings, CliError> {
    GeneratorSettings::load_from_iter([OsString::from("generate-content")]).map_err(|e| {
        CliError::Settings {
            message: e.to_string(),
        }
    })
}

/// Runs one generation and returns the rendered result.
///
/// # Errors
///
/// Returns [`CliError`] when the input source is missing or ambiguous, the
/// input cannot be read or parsed, moderation flags the input, or
/// generation fails.
///
/// # Example
///
/// ```
/// use content_generators::cli::{CliArgs, GeneratorSettings, run};
///
/// let args = CliArgs {
///     kind: "persona".to_owned(),
///     input: Some(r#"{"topic":"AI content ops","goal":"ship weekly","voice":"direct"}"#.to_owned()),
///     ..CliArgs::default()
/// };
/// let settings = GeneratorSettings { default_pack: None, default_tone: None };
///
/// let rendered = run(&args, &settings).expect("generation succeeds");
/// assert!(rendered.starts_with("Persona: "));
/// ```
pub fn run(args: &CliArgs, settings: &GeneratorSettings) -> Result<String, CliError> {
    let raw = resolve_input(args)?;
    screen_input(&raw, &BannedWords::default())?;

    let pack = args.pack.as_deref().unwrap_or_else(|| settings.default_pack());
    let tone = args.tone.as_deref().unwrap_or_else(|| settings.default_tone());
    debug!(kind = %args.kind, pack, tone, "running generation");

    let mut payload = generate_content(&args.kind, &raw, pack, tone)?;
    if let Some(link) = &args.link {
        payload.share_caption = resolve_share_caption(&payload.share_caption, link);
    }
    render(&payload, args.json)
}

/// Reads an input file through a capability handle on its parent directory.
///
/// # Errors
///
/// Returns [`CliError::ReadInput`] if the directory or file cannot be read.
pub fn read_input_file(path: &Utf8Path) -> Result<String, CliError> {
    let read_error = |message: String| CliError::ReadInput {
        path: path.to_string(),
        message,
    };
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error("path has no file name".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|e| read_error(e.to_string()))?;
    dir.read_to_string(file_name)
        .map_err(|e| read_error(e.to_string()))
}

fn resolve_input(args: &CliArgs) -> Result<Value, CliError> {
    match (&args.input, &args.input_file, args.example) {
        (Some(inline), None, false) => parse_input(inline),
        (None, Some(path), false) => parse_input(&read_input_file(Utf8Path::new(path))?),
        (None, None, true) => {
            let kind: GenerationType = args.kind.parse()?;
            serde_json::to_value(random_example(kind)).map_err(|e| CliError::Encode {
                message: e.to_string(),
            })
        }
        (None, None, false) => Err(CliError::MissingInput),
        _ => Err(CliError::ConflictingInputs),
    }
}

fn parse_input(text: &str) -> Result<Value, CliError> {
    serde_json::from_str(text).map_err(|e| CliError::InvalidInputJson {
        message: e.to_string(),
    })
}

fn screen_input(raw: &Value, filter: &impl ContentFilter) -> Result<(), CliError> {
    filter
        .flagged_term(&raw.to_string())
        .map_or(Ok(()), |term| {
            Err(CliError::Moderated {
                term: term.to_owned(),
            })
        })
}

fn render(payload: &GeneratedPayload<GeneratedOutput>, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(payload).map_err(|e| CliError::Encode {
            message: e.to_string(),
        });
    }
    Ok(format!("{}\n\n{}", payload.output_text, payload.share_caption))
}
