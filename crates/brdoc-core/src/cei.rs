//! CEI: 11 base digits, 1 check digit.

use crate::document::{self, ParsedId};
use crate::generator;
use crate::normalize::clean;
use crate::schema::IdClass;
use crate::validation::ValidationError;

/// Checks a CEI, formatted or not.
pub fn validate_cei(text: &str) -> bool {
    document::validate(IdClass::Cei, text)
}

/// Renders a CEI as `XX.XXX.XXXXX/XX`.
pub fn format_cei(text: &str) -> Result<String, ValidationError> {
    document::format(IdClass::Cei, text)
}

/// Strips CEI punctuation.
pub fn clean_cei(text: &str) -> String {
    clean(text)
}

/// Zero-pads a CEI number to 12 digits.
pub fn pad_cei(number: u64, validate: bool) -> Result<String, ValidationError> {
    document::pad(IdClass::Cei, number, validate)
}

/// Computes the check digit from the 11-digit base.
pub fn cei_check_digit(base: &str) -> Result<u8, ValidationError> {
    let checks = crate::checksum::check_digits(IdClass::Cei, base)?;
    Ok(checks[0])
}

/// Random valid CEI.
pub fn random_cei(formatted: bool) -> String {
    generator::random(IdClass::Cei, formatted)
}

/// Splits a CEI into base and check digit.
pub fn parse_cei(text: &str, formatted: bool) -> Result<ParsedId, ValidationError> {
    document::parse(IdClass::Cei, text, formatted)
}
