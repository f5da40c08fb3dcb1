use super::error::ModelError;
use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BondType {
    Single,
    Double,
    Triple,
    Aromatic,
}

static HIN_BOND_TOKENS: Map<&'static str, BondType> = phf_map! {
    "s" => BondType::Single,
    "d" => BondType::Double,
    "t" => BondType::Triple,
    "a" => BondType::Aromatic,
};

impl BondType {
    /// Resolves a single-letter HIN bond code (`s`, `d`, `t`, `a`). Case-sensitive.
    pub fn from_hin_token(token: &str) -> Option<Self> {
        HIN_BOND_TOKENS.get(token).copied()
    }

    /// The HIN bond code for this type; inverse of [`BondType::from_hin_token`].
    pub fn hin_token(self) -> &'static str {
        match self {
            Self::Single => "s",
            Self::Double => "d",
            Self::Triple => "t",
            Self::Aromatic => "a",
        }
    }
}

impl FromStr for BondType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "a" | "ar" | "aromatic" => Ok(Self::Aromatic),
            _ => Err(ModelError::InvalidBondType(s.to_string())),
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Triple => "Triple",
            Self::Aromatic => "Aromatic",
        })
    }
}
