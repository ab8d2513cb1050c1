//! CPF: 9 base digits, 2 check digits.

use crate::document::{self, ParsedId};
use crate::generator;
use crate::normalize::clean;
use crate::schema::IdClass;
use crate::validation::ValidationError;

/// Checks a CPF, formatted or not.
pub fn validate_cpf(text: &str) -> bool {
    document::validate(IdClass::Cpf, text)
}

/// Renders a CPF as `XXX.XXX.XXX-XX`.
pub fn format_cpf(text: &str) -> Result<String, ValidationError> {
    document::format(IdClass::Cpf, text)
}

/// Strips CPF punctuation.
pub fn clean_cpf(text: &str) -> String {
    clean(text)
}

/// Zero-pads a CPF number to 11 digits.
pub fn pad_cpf(number: u64, validate: bool) -> Result<String, ValidationError> {
    document::pad(IdClass::Cpf, number, validate)
}

/// Computes both check digits from the 9-digit base.
pub fn cpf_check_digits(base: &str) -> Result<(u8, u8), ValidationError> {
    let checks = crate::checksum::check_digits(IdClass::Cpf, base)?;
    Ok((checks[0], checks[1]))
}

/// Random valid CPF.
pub fn random_cpf(formatted: bool) -> String {
    generator::random(IdClass::Cpf, formatted)
}

/// Splits a CPF into base and check digits.
pub fn parse_cpf(text: &str, formatted: bool) -> Result<ParsedId, ValidationError> {
    document::parse(IdClass::Cpf, text, formatted)
}
