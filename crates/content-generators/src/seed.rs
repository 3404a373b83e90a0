//! Seed derivation from request parts.
//!
//! Seeds are 32-bit FNV-1a hashes over UTF-16 code units, so a given string
//! hashes to the same value on every platform. They make output reproducible;
//! they are not a security boundary.

/// FNV-1a 32-bit offset basis, and the seed of the empty string.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

const FNV_PRIME: u32 = 16_777_619;

/// Delimiter placed between seed parts before hashing.
pub const PART_DELIMITER: &str = "|";

/// Hashes text into a 32-bit seed.
///
/// # Examples
///
/// ```
/// use content_generators::{FNV_OFFSET_BASIS, string_to_seed};
///
/// assert_eq!(string_to_seed(""), FNV_OFFSET_BASIS);
/// assert_eq!(string_to_seed("persona"), string_to_seed("persona"));
/// ```
#[must_use]
pub fn string_to_seed(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// One component of a seed.
///
/// Absent parts, empty text, and the integer zero carry no information and
/// are skipped when the seed is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPart<'a> {
    /// A text component.
    Text(&'a str),
    /// An integer component, rendered in decimal.
    Number(i64),
    /// A component that was not supplied.
    Absent,
}

impl SeedPart<'_> {
    fn rendered(self) -> Option<String> {
        match self {
            Self::Text("") | Self::Number(0) | Self::Absent => None,
            Self::Text(text) => Some(text.to_owned()),
            Self::Number(value) => Some(value.to_string()),
        }
    }
}

impl<'a> From<&'a str> for SeedPart<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for SeedPart<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<i64> for SeedPart<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for SeedPart<'_> {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl<'a, T> From<Option<T>> for SeedPart<'a>
where
    T: Into<SeedPart<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Joins the informative parts with [`PART_DELIMITER`] and hashes the result.
///
/// # Examples
///
/// ```
/// use content_generators::{SeedPart, seed_from_parts, string_to_seed};
///
/// let seed = seed_from_parts([SeedPart::from("persona"), SeedPart::Absent, SeedPart::from("general")]);
/// assert_eq!(seed, string_to_seed("persona|general"));
/// assert_eq!(seed_from_parts(Vec::<SeedPart<'_>>::new()), string_to_seed(""));
/// ```
#[must_use]
pub fn seed_from_parts<'a, I>(parts: I) -> u32
where
    I: IntoIterator<Item = SeedPart<'a>>,
{
    let joined = parts
        .into_iter()
        .filter_map(SeedPart::rendered)
        .collect::<Vec<_>>()
        .join(PART_DELIMITER);
    string_to_seed(&joined)
}
