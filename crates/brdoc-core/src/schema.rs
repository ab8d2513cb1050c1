use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remainder-to-digit rule applied to a weighted digit sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckRule {
    /// `r = sum % 11`; the digit is `0` when `r < 2`, otherwise `11 - r`.
    ///
    /// This is the same function as "`11 - r`, clamped to `0` when the result
    /// is `10` or `11`", so CNPJ, CPF and PIS all share it.
    Mod11,
    /// CEI rule: fold the last two digits of the sum into one
    /// (`t = (tens + units) % 10`) and take `(10 - t) % 10`.
    DigitSum,
}

impl CheckRule {
    /// Maps a weighted sum to a single check digit.
    pub fn digit(self, sum: u32) -> u8 {
        match self {
            CheckRule::Mod11 => {
                let r = sum % 11;
                if r < 2 {
                    0
                } else {
                    (11 - r) as u8
                }
            }
            CheckRule::DigitSum => {
                let s = sum % 100;
                let t = (s / 10 + s % 10) % 10;
                ((10 - t) % 10) as u8
            }
        }
    }
}

/// Static description of one identifier class.
#[derive(Debug)]
pub struct Schema {
    /// Display name (`CNPJ`, `CEI`, ...).
    pub name: &'static str,
    /// Digits in the canonical form.
    pub total_width: usize,
    /// Leading digits the check digits are computed from.
    pub base_width: usize,
    /// One weight table per check digit, each one entry longer than the last.
    pub weights: &'static [&'static [u32]],
    /// Remainder rule shared by every check digit of the class.
    pub rule: CheckRule,
    /// Digit groups and the delimiter written after each (`None` for the last).
    pub groups: &'static [(usize, Option<char>)],
}

impl Schema {
    /// Number of trailing check digits.
    pub fn check_count(&self) -> usize {
        self.weights.len()
    }
}

static CNPJ: Schema = Schema {
    name: "CNPJ",
    total_width: 14,
    base_width: 12,
    weights: &[
        &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
        &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    ],
    rule: CheckRule::Mod11,
    groups: &[
        (2, Some('.')),
        (3, Some('.')),
        (3, Some('/')),
        (4, Some('-')),
        (2, None),
    ],
};

static CEI: Schema = Schema {
    name: "CEI",
    total_width: 12,
    base_width: 11,
    weights: &[&[7, 4, 1, 8, 5, 2, 1, 6, 3, 7, 4]],
    rule: CheckRule::DigitSum,
    groups: &[(2, Some('.')), (3, Some('.')), (5, Some('/')), (2, None)],
};

static CPF: Schema = Schema {
    name: "CPF",
    total_width: 11,
    base_width: 9,
    weights: &[
        &[10, 9, 8, 7, 6, 5, 4, 3, 2],
        &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    ],
    rule: CheckRule::Mod11,
    groups: &[(3, Some('.')), (3, Some('.')), (3, Some('-')), (2, None)],
};

static PIS: Schema = Schema {
    name: "PIS",
    total_width: 11,
    base_width: 10,
    weights: &[&[3, 2, 9, 8, 7, 6, 5, 4, 3, 2]],
    rule: CheckRule::Mod11,
    groups: &[(3, Some('.')), (4, Some('.')), (3, Some('-')), (1, None)],
};

/// The four Brazilian identifier classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdClass {
    /// Legal entities.
    Cnpj,
    /// Businesses registered without a CNPJ.
    Cei,
    /// Individual taxpayers.
    Cpf,
    /// PIS/PASEP worker registration.
    Pis,
}

impl IdClass {
    /// Every class, in a stable order.
    pub const ALL: [IdClass; 4] = [IdClass::Cnpj, IdClass::Cei, IdClass::Cpf, IdClass::Pis];

    /// Returns the static schema for this class.
    pub fn schema(self) -> &'static Schema {
        match self {
            IdClass::Cnpj => &CNPJ,
            IdClass::Cei => &CEI,
            IdClass::Cpf => &CPF,
            IdClass::Pis => &PIS,
        }
    }
}

impl fmt::Display for IdClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.schema().name)
    }
}

/// Error returned when a class name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown identifier class '{0}' (expected cnpj, cei, cpf or pis)")]
pub struct UnknownClass(pub String);

impl FromStr for IdClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cnpj" => Ok(IdClass::Cnpj),
            "cei" => Ok(IdClass::Cei),
            "cpf" => Ok(IdClass::Cpf),
            "pis" | "pasep" | "pis/pasep" => Ok(IdClass::Pis),
            _ => Err(UnknownClass(s.to_string())),
        }
    }
}
