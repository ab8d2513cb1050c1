//! Class-generic validate, format, pad and parse operations.
//!
//! The per-class modules ([`crate::cnpj`], [`crate::cpf`], ...) are thin
//! wrappers around these functions.

use serde::{Deserialize, Serialize};

use crate::checksum::{complete, compute};
use crate::normalize::{canonical, clean, digits_of, pad_digits, zero_pad};
use crate::schema::IdClass;
use crate::validation::ValidationError;

/// Sub-field of a parsed identifier.
///
/// Formatted parses keep fields as text (leading zeros and delimiters
/// preserved); raw parses render them as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// Text rendering, e.g. `"02.558.157"`.
    Text(String),
    /// Integer rendering, e.g. `2558157`.
    Number(u64),
}

impl Field {
    pub(crate) fn render(digits: &str, text: impl Into<String>, formatted: bool) -> Self {
        if formatted {
            Field::Text(text.into())
        } else {
            // Slices of a canonical string are at most 14 ASCII digits.
            Field::Number(digits.bytes().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0')))
        }
    }
}

/// Result of parsing a CEI, CPF or PIS number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedId {
    /// Identifier class.
    pub class: IdClass,
    /// Whole identifier.
    pub id: Field,
    /// Base digits.
    pub base: Field,
    /// Check digit(s).
    pub check: Field,
    /// Whether the check digits match the base.
    pub valid: bool,
}

/// Returns `true` when `input` normalizes to a well-formed identifier of
/// `class` whose check digits match. Never fails.
pub fn validate(class: IdClass, input: &str) -> bool {
    match canonical(class, input) {
        Ok(digits) => matches_checks(class, &digits),
        Err(_) => false,
    }
}

pub(crate) fn matches_checks(class: IdClass, digits: &str) -> bool {
    let schema = class.schema();
    let values = digits_of(digits);
    let (base, present) = values.split_at(schema.base_width);
    let valid = compute(schema, base) == present;
    if !valid {
        tracing::debug!(%class, value = digits, "check digit mismatch");
    }
    valid
}

/// Inserts the class's delimiters into a canonical string.
///
/// Anything that is not exactly `total_width` ASCII digits is returned as-is.
pub(crate) fn insert_delimiters(class: IdClass, digits: &str) -> String {
    let schema = class.schema();
    if digits.len() != schema.total_width || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + schema.groups.len());
    let mut at = 0;
    for &(len, delimiter) in schema.groups {
        out.push_str(&digits[at..at + len]);
        if let Some(delimiter) = delimiter {
            out.push(delimiter);
        }
        at += len;
    }
    out
}

/// Normalizes `input` and renders it with the class's delimiter pattern.
///
/// Check digits are not verified.
pub fn format(class: IdClass, input: &str) -> Result<String, ValidationError> {
    let digits = canonical(class, input)?;
    Ok(insert_delimiters(class, &digits))
}

/// Zero-pads `number` to the class width, optionally requiring valid checks.
pub fn pad(class: IdClass, number: u64, validate: bool) -> Result<String, ValidationError> {
    let padded = pad_digits(class, number, class.schema().total_width)?;
    if validate && !matches_checks(class, &padded) {
        return Err(ValidationError::InvalidCheckDigits {
            class,
            value: padded,
        });
    }
    Ok(padded)
}

/// Zero-pads a textual number (punctuation ignored) to the class width.
///
/// Input without any digit is malformed.
pub fn pad_text(class: IdClass, input: &str, validate: bool) -> Result<String, ValidationError> {
    let padded = zero_pad(class, &clean(input), class.schema().total_width)?;
    if validate && !matches_checks(class, &padded) {
        return Err(ValidationError::InvalidCheckDigits {
            class,
            value: padded,
        });
    }
    Ok(padded)
}

/// Splits an identifier into base and check digits and reports validity.
///
/// Fails only on malformed input; a checksum mismatch is reported through
/// [`ParsedId::valid`].
pub fn parse(class: IdClass, input: &str, formatted: bool) -> Result<ParsedId, ValidationError> {
    let digits = canonical(class, input)?;
    let valid = matches_checks(class, &digits);
    let (base, check) = digits.split_at(class.schema().base_width);
    Ok(ParsedId {
        class,
        id: Field::render(&digits, insert_delimiters(class, &digits), formatted),
        base: Field::render(base, base, formatted),
        check: Field::render(check, check, formatted),
        valid,
    })
}

/// Builds a valid identifier from its base digits.
pub fn from_base(class: IdClass, base: &str) -> Result<String, ValidationError> {
    let schema = class.schema();
    let digits = clean(base);
    if digits.len() != schema.base_width {
        return Err(ValidationError::PatternMismatch {
            class,
            value: base.to_string(),
            expected: schema.base_width,
            found: digits.len(),
        });
    }
    Ok(complete(schema, &digits))
}
