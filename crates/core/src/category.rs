//! Candidate reservation categories and fee exemption rules.

use crate::error::CoreError;

/// Reservation category recorded on the candidate's personal info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Obc,
    Sc,
    St,
    Ews,
}

impl Category {
    /// Parse a category string from the database or a request body.
    ///
    /// Accepts the legacy `"ur"` alias for the unreserved/general category
    /// and is case-insensitive, matching what older application rows carry.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "ur" | "general" => Ok(Self::General),
            "obc" => Ok(Self::Obc),
            "sc" => Ok(Self::Sc),
            "st" => Ok(Self::St),
            "ews" => Ok(Self::Ews),
            _ => Err(CoreError::Validation(format!(
                "Invalid category '{s}'. Must be one of: general, obc, sc, st, ews"
            ))),
        }
    }

    /// Convert to the canonical database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Obc => "obc",
            Self::Sc => "sc",
            Self::St => "st",
            Self::Ews => "ews",
        }
    }

    /// Whether candidates in this category are exempt from the application
    /// fee. Exempt candidates get a zero-amount completed payment recorded
    /// on first view of the payment step.
    pub fn is_fee_exempt(&self) -> bool {
        matches!(self, Self::Sc | Self::St)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_values() {
        assert_eq!(Category::from_str_db("general").unwrap(), Category::General);
        assert_eq!(Category::from_str_db("obc").unwrap(), Category::Obc);
        assert_eq!(Category::from_str_db("sc").unwrap(), Category::Sc);
        assert_eq!(Category::from_str_db("st").unwrap(), Category::St);
        assert_eq!(Category::from_str_db("ews").unwrap(), Category::Ews);
    }

    #[test]
    fn parse_is_case_insensitive_and_accepts_ur_alias() {
        assert_eq!(Category::from_str_db("UR").unwrap(), Category::General);
        assert_eq!(Category::from_str_db(" ST ").unwrap(), Category::St);
        assert_eq!(Category::from_str_db("General").unwrap(), Category::General);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(Category::from_str_db("").is_err());
        assert!(Category::from_str_db("reserved").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        for cat in [
            Category::General,
            Category::Obc,
            Category::Sc,
            Category::St,
            Category::Ews,
        ] {
            assert_eq!(Category::from_str_db(cat.as_str()).unwrap(), cat);
        }
    }

    #[test]
    fn only_sc_and_st_are_exempt() {
        assert!(Category::Sc.is_fee_exempt());
        assert!(Category::St.is_fee_exempt());
        assert!(!Category::General.is_fee_exempt());
        assert!(!Category::Obc.is_fee_exempt());
        assert!(!Category::Ews.is_fee_exempt());
    }
}
