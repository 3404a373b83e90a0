//! Selection primitives built on a [`SeededStream`].
//!
//! Each primitive consumes draws from the stream in a fixed order, so the
//! sequence of calls made by a generator fully determines its output.

use crate::stream::SeededStream;

/// Maps a draw onto an index in `0..len`.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "index is floor(draw * len) with draw in [0, 1) and small pool lengths"
)]
fn scaled_index(stream: &mut SeededStream, len: usize) -> usize {
    (stream.next_f64() * len as f64) as usize
}

/// Picks one item from `items`.
///
/// Returns `None` for an empty slice without consuming a draw.
///
/// # Examples
///
/// ```
/// use content_generators::{SeededStream, pick};
///
/// let mut stream = SeededStream::new(7);
/// let colours = ["red", "green", "blue"];
/// let chosen = pick(&mut stream, &colours).expect("non-empty pool");
/// assert!(colours.contains(chosen));
/// ```
pub fn pick<'a, T>(stream: &mut SeededStream, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(scaled_index(stream, items.len()))
}

/// Picks up to `count` distinct items from `items`, in selection order.
///
/// Each round draws an index into the items not yet chosen. Once the pool is
/// exhausted the remaining rounds are skipped, so an undersized pool yields
/// fewer than `count` items rather than an error.
///
/// # Examples
///
/// ```
/// use content_generators::{SeededStream, pick_many};
///
/// let mut stream = SeededStream::new(7);
/// let chosen = pick_many(&mut stream, &["a", "b"], 5);
/// assert_eq!(chosen.len(), 2);
/// ```
pub fn pick_many<'a, T>(stream: &mut SeededStream, items: &'a [T], count: usize) -> Vec<&'a T> {
    let mut remaining: Vec<&'a T> = items.iter().collect();
    let mut chosen = Vec::with_capacity(count.min(items.len()));
    for _ in 0..count {
        if remaining.is_empty() {
            break;
        }
        let index = scaled_index(stream, remaining.len());
        if index < remaining.len() {
            chosen.push(remaining.remove(index));
        }
    }
    chosen
}

/// Draws an integer in `min..=max`.
///
/// An inverted range (`max < min`) still consumes one draw and yields `min`.
///
/// # Examples
///
/// ```
/// use content_generators::{SeededStream, range};
///
/// let mut stream = SeededStream::new(7);
/// let level = range(&mut stream, 4, 9);
/// assert!((4..=9).contains(&level));
/// ```
pub fn range(stream: &mut SeededStream, min: u32, max: u32) -> u32 {
    let span = max.saturating_sub(min).saturating_add(1);
    let offset = scaled_index(stream, usize::try_from(span).unwrap_or(usize::MAX));
    min.saturating_add(u32::try_from(offset).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    const POOL: [&str; 5] = ["pivot", "speedrun", "content debt", "scrappy ops", "hard reset"];

    #[test]
    fn pick_returns_none_for_empty_pool() {
        let mut stream = SeededStream::new(1);
        let empty: [&str; 0] = [];
        assert!(pick(&mut stream, &empty).is_none());
        assert_eq!(stream, SeededStream::new(1), "no draw should be consumed");
    }

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(2026)]
    fn pick_returns_a_member(#[case] seed: u32) {
        let mut stream = SeededStream::new(seed);
        for _ in 0..100 {
            let item = pick(&mut stream, &POOL).expect("pool is non-empty");
            assert!(POOL.contains(item));
        }
    }

    #[rstest]
    #[case(1, 3)]
    #[case(9, 5)]
    #[case(77, 1)]
    fn pick_many_returns_distinct_members(#[case] seed: u32, #[case] count: usize) {
        let mut stream = SeededStream::new(seed);
        let chosen = pick_many(&mut stream, &POOL, count);
        let unique: HashSet<_> = chosen.iter().collect();

        assert_eq!(chosen.len(), count);
        assert_eq!(unique.len(), count);
        assert!(chosen.iter().all(|item| POOL.contains(*item)));
    }

    #[test]
    fn pick_many_saturates_on_small_pools() {
        let mut stream = SeededStream::new(3);
        let chosen = pick_many(&mut stream, &["a", "b"], 5);
        assert_eq!(chosen.len(), 2);
    }

    #[test]
    fn pick_many_stops_drawing_once_exhausted() {
        let mut stream = SeededStream::new(3);
        let _chosen = pick_many(&mut stream, &["a", "b"], 5);

        let mut reference = SeededStream::new(3);
        let _first = reference.next_f64();
        let _second = reference.next_f64();
        assert_eq!(stream, reference);
    }

    #[test]
    fn pick_many_with_zero_count_is_empty() {
        let mut stream = SeededStream::new(3);
        assert!(pick_many(&mut stream, &POOL, 0).is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(17)]
    #[case(u32::MAX)]
    fn range_stays_in_bounds_and_varies(#[case] seed: u32) {
        let mut stream = SeededStream::new(seed);
        let draws: Vec<u32> = (0..1_000).map(|_| range(&mut stream, 4, 9)).collect();
        let distinct: HashSet<_> = draws.iter().collect();

        assert!(draws.iter().all(|value| (4..=9).contains(value)));
        assert!(distinct.len() >= 2, "range looks degenerate: {distinct:?}");
    }

    #[test]
    fn range_with_equal_bounds_is_constant() {
        let mut stream = SeededStream::new(5);
        assert!((0..50).all(|_| range(&mut stream, 3, 3) == 3));
    }

    #[test]
    fn inverted_range_yields_min() {
        let mut stream = SeededStream::new(5);
        assert_eq!(range(&mut stream, 9, 4), 9);
    }
}
