//! Digit-string normalization shared by every identifier class.

use std::sync::OnceLock;

use regex::Regex;

use crate::schema::IdClass;
use crate::validation::ValidationError;

fn non_digit() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9]").expect("invalid regex"))
}

/// Removes every character that is not an ASCII decimal digit.
///
/// No length is enforced here; callers check the width downstream.
pub fn clean(input: &str) -> String {
    non_digit().replace_all(input, "").into_owned()
}

/// Renders `number` in decimal, left-padded with `'0'` to `width` digits.
pub fn pad_digits(class: IdClass, number: u64, width: usize) -> Result<String, ValidationError> {
    zero_pad(class, &number.to_string(), width)
}

/// Left-pads an all-digit string with `'0'` to `width`, ignoring its own
/// leading zeros. At least one digit is required.
pub(crate) fn zero_pad(
    class: IdClass,
    digits: &str,
    width: usize,
) -> Result<String, ValidationError> {
    if digits.is_empty() {
        tracing::debug!(%class, width, "no digits to pad");
        return Err(ValidationError::PatternMismatch {
            class,
            value: digits.to_string(),
            expected: width,
            found: 0,
        });
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > width {
        tracing::debug!(%class, value = digits, width, "number too wide to pad");
        return Err(ValidationError::OutOfBounds {
            class,
            value: digits.to_string(),
            width,
        });
    }
    Ok(format!("{:0>width$}", significant, width = width))
}

/// Cleans `input` and requires exactly the class's total width.
pub(crate) fn canonical(class: IdClass, input: &str) -> Result<String, ValidationError> {
    let digits = clean(input);
    let expected = class.schema().total_width;
    if digits.len() != expected {
        tracing::debug!(
            %class,
            value = input,
            expected,
            found = digits.len(),
            "wrong digit count"
        );
        return Err(ValidationError::PatternMismatch {
            class,
            value: input.to_string(),
            expected,
            found: digits.len(),
        });
    }
    Ok(digits)
}

/// Converts an all-digit string into digit values.
pub(crate) fn digits_of(canonical: &str) -> Vec<u8> {
    canonical.bytes().map(|b| b - b'0').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_punctuation() {
        assert_eq!(clean("02.558.157/0001-62"), "02558157000162");
        assert_eq!(clean(" 968.811.342-58\n"), "96881134258");
        assert_eq!(clean("abc"), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn clean_ignores_non_ascii_digits() {
        assert_eq!(clean("١٢٣4"), "4");
    }

    #[test]
    fn clean_is_idempotent() {
        for input in ["12.345", "x1y2z3", "", "--//..", "000"] {
            assert_eq!(clean(&clean(input)), clean(input));
        }
    }

    #[test]
    fn pad_digits_left_pads() {
        assert_eq!(
            pad_digits(IdClass::Cnpj, 2558157000162, 14).unwrap(),
            "02558157000162"
        );
        assert_eq!(pad_digits(IdClass::Cpf, 0, 11).unwrap(), "00000000000");
    }

    #[test]
    fn pad_digits_rejects_wide_numbers() {
        let err = pad_digits(IdClass::Cpf, 123456789012, 11).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfBounds { width: 11, .. }));
    }

    #[test]
    fn zero_pad_requires_a_digit() {
        let err = zero_pad(IdClass::Cpf, "", 11).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::PatternMismatch {
                expected: 11,
                found: 0,
                ..
            }
        ));
        assert_eq!(zero_pad(IdClass::Cpf, "0", 11).unwrap(), "00000000000");
        assert_eq!(zero_pad(IdClass::Cpf, "000123", 4).unwrap(), "0123");
    }

    #[test]
    fn canonical_checks_width() {
        assert_eq!(
            canonical(IdClass::Pis, "125.6124.131-0").unwrap(),
            "12561241310"
        );
        let err = canonical(IdClass::Pis, "125").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::PatternMismatch {
                expected: 11,
                found: 3,
                ..
            }
        ));
    }
}
