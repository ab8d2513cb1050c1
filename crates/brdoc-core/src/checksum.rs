//! Weighted modulo-11 check-digit engine.
//!
//! Every class computes its check digits the same way: multiply the digits,
//! most significant first, by the class's weight table, sum the products and
//! reduce the sum with the class's [`CheckRule`](crate::schema::CheckRule).
//! Classes with two check digits feed the first one back in, so the second
//! weight table is one entry longer than the first.

use crate::normalize::{clean, digits_of};
use crate::schema::{IdClass, Schema};
use crate::validation::ValidationError;

/// Sum of `digits[i] * weights[i]`.
pub fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum()
}

/// Computes every check digit for `base`, which must hold exactly
/// `base_width` digit values.
pub fn compute(schema: &Schema, base: &[u8]) -> Vec<u8> {
    debug_assert_eq!(base.len(), schema.base_width);
    let mut digits = base.to_vec();
    let mut checks = Vec::with_capacity(schema.check_count());
    for weights in schema.weights {
        let check = schema.rule.digit(weighted_sum(&digits, weights));
        digits.push(check);
        checks.push(check);
    }
    checks
}

/// Computes the check digits for a base given as text.
///
/// Punctuation is ignored. A full-width identifier is also accepted, in which
/// case only its leading base digits are used.
pub fn check_digits(class: IdClass, base: &str) -> Result<Vec<u8>, ValidationError> {
    let schema = class.schema();
    let digits = clean(base);
    if digits.len() != schema.base_width && digits.len() != schema.total_width {
        return Err(ValidationError::PatternMismatch {
            class,
            value: base.to_string(),
            expected: schema.base_width,
            found: digits.len(),
        });
    }
    let values = digits_of(&digits[..schema.base_width]);
    Ok(compute(schema, &values))
}

/// Returns the canonical identifier for a canonical base string.
pub(crate) fn complete(schema: &Schema, base: &str) -> String {
    let mut out = String::with_capacity(schema.total_width);
    out.push_str(base);
    for check in compute(schema, &digits_of(base)) {
        out.push(char::from(b'0' + check));
    }
    out
}
