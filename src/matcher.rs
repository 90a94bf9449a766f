//! Exact-match lookup of a guess against the words still to be recalled.
//!
//! Matching is case-sensitive and positional order does not matter. The
//! caller owns the remaining list and decides what to consume.

/// Index of the first remaining occurrence equal to `candidate`, if any.
pub fn find_match(candidate: &str, remaining: &[String]) -> Option<usize> {
    remaining.iter().position(|word| word == candidate)
}
