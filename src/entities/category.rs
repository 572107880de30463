//! Category shared by users and their wishlists.

use crate::errors::{Error, Result};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Household member classification, stored and serialized as `ADULT`, `KID` or `PET`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Grown-up household member
    #[sea_orm(string_value = "ADULT")]
    Adult,
    /// Child
    #[sea_orm(string_value = "KID")]
    Kid,
    /// Animal companion
    #[sea_orm(string_value = "PET")]
    Pet,
}

impl Category {
    /// Wire/storage spelling of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Kid => "KID",
            Self::Pet => "PET",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "ADULT" => Ok(Self::Adult),
            "KID" => Ok(Self::Kid),
            "PET" => Ok(Self::Pet),
            other => Err(Error::validation(format!(
                "Unknown category '{other}', expected one of ADULT, KID, PET"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!("ADULT".parse::<Category>().unwrap(), Category::Adult);
        assert_eq!(" KID ".parse::<Category>().unwrap(), Category::Kid);
        assert_eq!("PET".parse::<Category>().unwrap(), Category::Pet);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let result = "ROBOT".parse::<Category>();
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!("adult".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        assert_eq!(serde_json::to_string(&Category::Kid).unwrap(), "\"KID\"");
        let parsed: Category = serde_json::from_str("\"PET\"").unwrap();
        assert_eq!(parsed, Category::Pet);
    }
}
