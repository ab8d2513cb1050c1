use crate::document::{insert_delimiters, matches_checks};
use crate::generator;
use crate::normalize::canonical;
use crate::schema::IdClass;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! newtype {
    ($name:ident, $class:expr, $doc:expr) => {
        #[doc = $doc]
        ///
        /// Holds the canonical (digits-only) form; every constructor
        /// validates it. `Display` renders the formatted form; serde uses
        /// the canonical form and validates on the way in.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Identifier class of this type.
            pub const CLASS: IdClass = $class;

            /// Parses a validated identifier, formatted or not.
            pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
                let digits = canonical(Self::CLASS, value.as_ref())?;
                if !matches_checks(Self::CLASS, &digits) {
                    return Err(ValidationError::InvalidCheckDigits {
                        class: Self::CLASS,
                        value: digits,
                    });
                }
                Ok(Self(digits))
            }

            /// Draws a random valid value.
            pub fn random() -> Self {
                Self(generator::random(Self::CLASS, false))
            }

            /// Canonical digits.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Delimited rendering.
            pub fn formatted(&self) -> String {
                insert_delimiters(Self::CLASS, &self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::parse(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

newtype!(
    Cnpj,
    IdClass::Cnpj,
    "Validated CNPJ (`XX.XXX.XXX/XXXX-XX`)."
);
newtype!(Cei, IdClass::Cei, "Validated CEI (`XX.XXX.XXXXX/XX`).");
newtype!(Cpf, IdClass::Cpf, "Validated CPF (`XXX.XXX.XXX-XX`).");
newtype!(
    Pis,
    IdClass::Pis,
    "Validated PIS/PASEP number (`XXX.XXXX.XXX-X`)."
);

impl Cnpj {
    /// First 8 digits, identifying the legal entity.
    pub fn firm(&self) -> &str {
        &self.0[..8]
    }

    /// Digits 9 to 12, identifying the branch.
    pub fn establishment(&self) -> &str {
        &self.0[8..12]
    }

    /// Whether this is the firm's headquarters (`0001`).
    pub fn is_headquarters(&self) -> bool {
        self.establishment() == crate::cnpj::HEADQUARTERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stores_canonical_form() {
        let cnpj = Cnpj::parse("02.558.157/0001-62").unwrap();
        assert_eq!(cnpj.as_str(), "02558157000162");
        assert_eq!(cnpj.to_string(), "02.558.157/0001-62");
        assert_eq!(cnpj.firm(), "02558157");
        assert_eq!(cnpj.establishment(), "0001");
        assert!(cnpj.is_headquarters());
    }

    #[test]
    fn parse_rejects_invalid_and_malformed() {
        assert!(matches!(
            "968.811.342-59".parse::<Cpf>(),
            Err(ValidationError::InvalidCheckDigits { .. })
        ));
        assert!(matches!(
            Pis::parse("1234"),
            Err(ValidationError::PatternMismatch { .. })
        ));
    }

    #[test]
    fn serde_uses_canonical_form_and_validates() {
        let cpf = Cpf::parse("968.811.342-58").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), r#""96881134258""#);
        let back: Cpf = serde_json::from_str(r#""968.811.342-58""#).unwrap();
        assert_eq!(back, cpf);
        assert!(serde_json::from_str::<Cpf>(r#""96881134259""#).is_err());
    }

    #[test]
    fn short_values_never_reach_the_accessors() {
        assert!(serde_json::from_str::<Cnpj>(r#""123""#).is_err());
        assert!("123".parse::<Cnpj>().is_err());
        assert!(Cnpj::parse("").is_err());
    }

    #[test]
    fn random_values_parse() {
        let cei = Cei::random();
        assert_eq!(Cei::parse(cei.as_str()).unwrap(), cei);
        let cnpj = Cnpj::random();
        assert_eq!(cnpj.formatted().parse::<Cnpj>().unwrap(), cnpj);
    }
}
