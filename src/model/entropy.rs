//! Mixing entropy of a proportion triple

use crate::schema::Proportions;

/// Entropy of an evenly split task, `ln 3`.
pub const MAX_ENTROPY: f64 = 1.098_612_288_668_109_7;

/// Shannon entropy `H(p) = -Σ p_i ln p_i` using the natural log.
///
/// Coordinates `<= 0` contribute nothing (the `x ln x -> 0` limit), so a
/// pure task has entropy exactly 0.
#[must_use]
pub fn entropy(proportions: Proportions) -> f64 {
    proportions
        .to_array()
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.ln())
        .sum()
}
