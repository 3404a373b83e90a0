//! The seeded pseudo-random stream behind every generation call.
//!
//! [`SeededStream`] is mulberry32: a 32-bit counter stepped by a fixed odd
//! increment, tempered by two xorshift-multiply rounds per draw. The counter
//! visits all 2^32 states before repeating.

/// Fixed odd constant added to the state on every draw.
const STATE_INCREMENT: u32 = 0x6d2b_79f5;

/// Scale that maps a 32-bit output onto `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A deterministic stream of draws derived from a 32-bit seed.
///
/// Each call to [`SeededStream::next_f64`] advances the state exactly once.
/// Two streams built from the same seed yield identical sequences.
///
/// # Examples
///
/// ```
/// use content_generators::SeededStream;
///
/// let mut first = SeededStream::new(42);
/// let mut second = SeededStream::new(42);
///
/// for _ in 0..8 {
///     let draw = first.next_f64();
///     assert!((0.0..1.0).contains(&draw));
///     assert_eq!(draw.to_bits(), second.next_f64().to_bits());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    /// Builds a stream positioned before its first draw.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the tempered 32-bit output.
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut mixed = self.state;
        mixed = (mixed ^ (mixed >> 15)).wrapping_mul(mixed | 1);
        mixed ^= mixed.wrapping_add((mixed ^ (mixed >> 7)).wrapping_mul(mixed | 61));
        mixed ^ (mixed >> 14)
    }

    /// Advances the state and returns a draw in `[0, 1)`.
    #[expect(
        clippy::float_arithmetic,
        reason = "draws are defined as the 32-bit output scaled onto [0, 1)"
    )]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}
