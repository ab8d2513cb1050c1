//! CNPJ: 8-digit firm, 4-digit establishment, 2 check digits.

use serde::{Deserialize, Serialize};

use crate::checksum::complete;
use crate::document::{self, insert_delimiters, matches_checks, Field};
use crate::generator;
use crate::normalize::{canonical, clean};
use crate::schema::IdClass;
use crate::validation::ValidationError;

/// Width of the firm sub-field.
pub const FIRM_WIDTH: usize = 8;
/// Width of the establishment sub-field.
pub const ESTABLISHMENT_WIDTH: usize = 4;
/// Establishment number conventionally used by the headquarters.
pub const HEADQUARTERS: &str = "0001";

/// Result of [`parse_cnpj`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCnpj {
    /// Whole CNPJ.
    pub cnpj: Field,
    /// Firm (legal entity) number.
    pub firm: Field,
    /// Establishment (branch) number.
    pub establishment: Field,
    /// Check digits.
    pub check: Field,
    /// Whether the check digits match.
    pub valid: bool,
}

/// Checks a CNPJ, formatted or not.
pub fn validate_cnpj(text: &str) -> bool {
    document::validate(IdClass::Cnpj, text)
}

/// Renders a CNPJ as `XX.XXX.XXX/XXXX-XX`.
pub fn format_cnpj(text: &str) -> Result<String, ValidationError> {
    document::format(IdClass::Cnpj, text)
}

/// Strips CNPJ punctuation.
pub fn clean_cnpj(text: &str) -> String {
    clean(text)
}

/// Zero-pads a CNPJ number to 14 digits.
pub fn pad_cnpj(number: u64, validate: bool) -> Result<String, ValidationError> {
    document::pad(IdClass::Cnpj, number, validate)
}

/// Computes both check digits from the 12-digit base.
pub fn cnpj_check_digits(base: &str) -> Result<(u8, u8), ValidationError> {
    let checks = crate::checksum::check_digits(IdClass::Cnpj, base)?;
    Ok((checks[0], checks[1]))
}

/// Random valid CNPJ.
pub fn random_cnpj(formatted: bool) -> String {
    generator::random(IdClass::Cnpj, formatted)
}

/// Builds a full CNPJ from a firm number and an establishment number
/// (headquarters when `None`).
///
/// Both parts are cleaned and left-padded with zeros; parts that are empty or
/// too long are rejected.
pub fn cnpj_from_firm_id(
    firm: &str,
    establishment: Option<&str>,
) -> Result<String, ValidationError> {
    let firm = fit(firm, FIRM_WIDTH)?;
    let establishment = fit(establishment.unwrap_or(HEADQUARTERS), ESTABLISHMENT_WIDTH)?;
    Ok(complete(
        IdClass::Cnpj.schema(),
        &format!("{firm}{establishment}"),
    ))
}

fn fit(part: &str, width: usize) -> Result<String, ValidationError> {
    let digits = clean(part);
    if digits.is_empty() || digits.len() > width {
        return Err(ValidationError::PatternMismatch {
            class: IdClass::Cnpj,
            value: part.to_string(),
            expected: width,
            found: digits.len(),
        });
    }
    Ok(format!("{:0>width$}", digits, width = width))
}

/// Splits a CNPJ into firm, establishment and check digits.
///
/// With `formatted`, fields are text (`"02.558.157"`, `"0001"`, `"62"`);
/// otherwise they are integers.
pub fn parse_cnpj(text: &str, formatted: bool) -> Result<ParsedCnpj, ValidationError> {
    let digits = canonical(IdClass::Cnpj, text)?;
    let valid = matches_checks(IdClass::Cnpj, &digits);
    let firm = &digits[..FIRM_WIDTH];
    let establishment = &digits[FIRM_WIDTH..FIRM_WIDTH + ESTABLISHMENT_WIDTH];
    let check = &digits[FIRM_WIDTH + ESTABLISHMENT_WIDTH..];
    Ok(ParsedCnpj {
        cnpj: Field::render(&digits, insert_delimiters(IdClass::Cnpj, &digits), formatted),
        firm: Field::render(
            firm,
            format!("{}.{}.{}", &firm[..2], &firm[2..5], &firm[5..]),
            formatted,
        ),
        establishment: Field::render(establishment, establishment, formatted),
        check: Field::render(check, check, formatted),
        valid,
    })
}
