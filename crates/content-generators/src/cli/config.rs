//! Generator defaults loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PACK: &str = "general";
const DEFAULT_TONE: &str = "chill";

fn fallback_pack() -> String {
    DEFAULT_PACK.to_owned()
}

fn fallback_tone() -> String {
    DEFAULT_TONE.to_owned()
}

/// Defaults applied when the command line omits `--pack` or `--tone`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTENT_GEN")]
pub struct GeneratorSettings {
    /// Pack used when `--pack` is not given.
    #[ortho_config(default = fallback_pack())]
    pub default_pack: Option<String>,
    /// Tone used when `--tone` is not given.
    #[ortho_config(default = fallback_tone())]
    pub default_tone: Option<String>,
}

impl GeneratorSettings {
    /// Return the configured default pack, falling back to `general`.
    #[must_use]
    pub fn default_pack(&self) -> &str {
        self.default_pack.as_deref().unwrap_or(DEFAULT_PACK)
    }

    /// Return the configured default tone, falling back to `chill`.
    #[must_use]
    pub fn default_tone(&self) -> &str {
        self.default_tone.as_deref().unwrap_or(DEFAULT_TONE)
    }
}
