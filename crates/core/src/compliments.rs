//! Compliment catalog and sampling.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::CoreError;

/// The fixed compliment catalog, in presentation order.
pub const COMPLIMENTS: &[&str] = &[
    "awesome",
    "beatific",
    "blithesome",
    "conscientious",
    "coruscant",
    "erudite",
    "exquisite",
    "fabulous",
    "fantastic",
    "gorgeous",
    "indubitable",
    "ineffable",
    "magnificent",
    "outstanding",
    "propitioius",
    "remarkable",
    "spectacular",
    "splendiferous",
    "stupendous",
    "super",
    "upbeat",
    "wondrous",
    "zoetic",
];

/// Parse a raw `num_compliments` value into a count the catalog can satisfy.
///
/// Rejects missing, non-numeric, negative and oversized values with
/// [`CoreError::Validation`]. Zero is allowed and yields an empty sample.
pub fn parse_count(raw: Option<&str>) -> Result<usize, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("num_compliments is required".into()))?;

    let count: usize = raw.parse().map_err(|_| {
        CoreError::Validation(format!(
            "num_compliments must be a non-negative integer, got '{raw}'"
        ))
    })?;

    validate_count(count)?;
    Ok(count)
}

/// Ensure `count` does not exceed the catalog size.
pub fn validate_count(count: usize) -> Result<(), CoreError> {
    if count > COMPLIMENTS.len() {
        return Err(CoreError::Validation(format!(
            "num_compliments must be at most {}, got {count}",
            COMPLIMENTS.len()
        )));
    }
    Ok(())
}

/// Draw `count` distinct compliments from the catalog (sampling without
/// replacement).
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<&'static str>, CoreError> {
    validate_count(count)?;
    Ok(COMPLIMENTS.choose_multiple(rng, count).copied().collect())
}
