//! PIS/PASEP: 10 base digits, 1 check digit.

use crate::document::{self, ParsedId};
use crate::generator;
use crate::normalize::clean;
use crate::schema::IdClass;
use crate::validation::ValidationError;

/// Checks a PIS/PASEP number, formatted or not.
pub fn validate_pis(text: &str) -> bool {
    document::validate(IdClass::Pis, text)
}

/// Renders a PIS/PASEP number as `XXX.XXXX.XXX-X`.
pub fn format_pis(text: &str) -> Result<String, ValidationError> {
    document::format(IdClass::Pis, text)
}

/// Strips PIS/PASEP punctuation.
pub fn clean_pis(text: &str) -> String {
    clean(text)
}

/// Zero-pads a PIS/PASEP number to 11 digits.
pub fn pad_pis(number: u64, validate: bool) -> Result<String, ValidationError> {
    document::pad(IdClass::Pis, number, validate)
}

/// Computes the check digit from the 10-digit base.
pub fn pis_check_digit(base: &str) -> Result<u8, ValidationError> {
    let checks = crate::checksum::check_digits(IdClass::Pis, base)?;
    Ok(checks[0])
}

/// Random valid PIS/PASEP number.
pub fn random_pis(formatted: bool) -> String {
    generator::random(IdClass::Pis, formatted)
}

/// Splits a PIS/PASEP number into base and check digit.
pub fn parse_pis(text: &str, formatted: bool) -> Result<ParsedId, ValidationError> {
    document::parse(IdClass::Pis, text, formatted)
}
