//! Helpers for saving and sharing generated content.

use serde::{Deserialize, Serialize};

use crate::generator::GeneratedPayload;
use crate::kind::Tone;
use crate::pack::PackId;

/// Placeholder that share caption templates carry for the share URL.
pub const LINK_PLACEHOLDER: &str = "{link}";

/// Fills the first `{link}` placeholder of a caption template.
///
/// # Example
///
/// ```
/// use content_generators::resolve_share_caption;
///
/// let caption = resolve_share_caption("Try yours: {link}", "https://example.test/p/1");
/// assert_eq!(caption, "Try yours: https://example.test/p/1");
/// ```
#[must_use]
pub fn resolve_share_caption(caption: &str, link: &str) -> String {
    caption.replacen(LINK_PLACEHOLDER, link, 1)
}

/// Pack and tone recorded alongside a stored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMeta {
    /// Pack the output was generated from.
    pub pack: PackId,
    /// Tone used for the share caption.
    pub tone: Tone,
}

/// A generated output as persisted for later display: the output fields
/// flattened at the top level, plus the caption and generation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOutput<O> {
    /// The structured output.
    #[serde(flatten)]
    pub output: O,
    /// Share caption template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_caption: Option<String>,
    /// Generation metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<StoredMeta>,
}

impl<O> GeneratedPayload<O> {
    /// Converts the payload into its stored form.
    ///
    /// The plain-text rendering is dropped; it can be rebuilt from the output.
    #[must_use]
    pub fn into_stored(self, pack: PackId, tone: Tone) -> StoredOutput<O> {
        StoredOutput {
            output: self.output,
            share_caption: Some(self.share_caption),
            meta: Some(StoredMeta { pack, tone }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::dispatch::ContentGenerator;
    use crate::generator::misinterpretation::{MisinterpretationGenerator, MisinterpretationOutput};
    use crate::pack::PackRegistry;

    #[rstest]
    #[case("Try yours: {link}", "Try yours: https://x.test")]
    #[case("{link} and {link}", "https://x.test and {link}")]
    #[case("No placeholder", "No placeholder")]
    fn resolves_only_the_first_placeholder(#[case] caption: &str, #[case] expected: &str) {
        assert_eq!(resolve_share_caption(caption, "https://x.test"), expected);
    }

    #[test]
    fn stored_output_flattens_fields_with_meta() {
        let registry = PackRegistry::builtin().expect("built-in packs load");
        let raw = json!({"statement": "We ship Friday", "audience": "sales", "channel": "Slack"});
        let payload = ContentGenerator::new(registry)
            .generate_with::<MisinterpretationGenerator>(&raw, PackId::DevTwitter, Tone::Savage)
            .expect("generation succeeds");
        let caption = payload.share_caption.clone();

        let stored = payload.into_stored(PackId::DevTwitter, Tone::Savage);
        let value = serde_json::to_value(&stored).expect("serialize");

        assert_eq!(value.get("headline"), Some(&json!("Misread in Slack by sales")));
        assert!(value.get("riskSignal").is_some());
        assert_eq!(value.get("share_caption"), Some(&json!(caption)));
        assert_eq!(
            value.get("meta"),
            Some(&json!({"pack": "devTwitter", "tone": "savage"}))
        );

        let restored: StoredOutput<MisinterpretationOutput> =
            serde_json::from_value(value).expect("deserialize");
        assert_eq!(restored, stored);
    }

    #[test]
    fn legacy_records_without_meta_still_load() {
        let value = json!({
            "headline": "Misread in email by founders",
            "misreads": [],
            "riskSignal": "3.4 / 10",
            "predictedReplies": [],
            "fix": "Add a one-line disclaimer."
        });
        let stored: StoredOutput<MisinterpretationOutput> =
            serde_json::from_value(value).expect("deserialize");
        assert!(stored.share_caption.is_none());
        assert!(stored.meta.is_none());
    }
}
