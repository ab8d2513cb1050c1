//! Check-digit validation, formatting, padding, parsing and generation for
//! Brazilian identification numbers: CNPJ, CEI, CPF and PIS/PASEP.
//!
//! Every class is a fixed-width digit string made of base digits followed by
//! one or two check digits derived from a weighted modulo-11 sum. The
//! per-class tables live in [`schema`]; everything else is generic over
//! [`IdClass`]. The flat per-class functions (`validate_cnpj`,
//! `cpf_check_digits`, ...) are re-exported at the crate root.
//!
//! Only structural well-formedness is checked. Whether a number is registered
//! with any authority is out of scope.
//!
#![deny(missing_docs)]

/// CEI functions.
pub mod cei;
/// Weighted-sum check-digit engine.
pub mod checksum;
/// CNPJ functions, including firm/establishment handling.
pub mod cnpj;
/// CPF functions.
pub mod cpf;
/// Class-generic operations.
pub mod document;
/// Random identifiers for fixtures.
pub mod generator;
/// Validated identifier newtypes.
pub mod identifiers;
/// Digit-string cleanup and padding.
pub mod normalize;
/// PIS/PASEP functions.
pub mod pis;
/// Per-class widths, weights and delimiter patterns.
pub mod schema;
/// Error types.
pub mod validation;

pub use cei::{
    cei_check_digit, clean_cei, format_cei, pad_cei, parse_cei, random_cei, validate_cei,
};
pub use checksum::check_digits;
pub use cnpj::{
    clean_cnpj, cnpj_check_digits, cnpj_from_firm_id, format_cnpj, pad_cnpj, parse_cnpj,
    random_cnpj, validate_cnpj, ParsedCnpj,
};
pub use cpf::{
    clean_cpf, cpf_check_digits, format_cpf, pad_cpf, parse_cpf, random_cpf, validate_cpf,
};
pub use document::{format, from_base, pad, pad_text, parse, validate, Field, ParsedId};
pub use generator::{random, random_with};
pub use identifiers::{Cei, Cnpj, Cpf, Pis};
pub use normalize::{clean, pad_digits};
pub use pis::{
    clean_pis, format_pis, pad_pis, parse_pis, pis_check_digit, random_pis, validate_pis,
};
pub use schema::{CheckRule, IdClass, Schema, UnknownClass};
pub use validation::{ErrorKind, ValidationError};
