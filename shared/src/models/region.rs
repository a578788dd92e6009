//! Origin state codes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Origin state of a registered product.
///
/// Closed set of 27 two-letter region codes, serialized as the uppercase
/// two-letter form. The picker renders [`RegionCode::ALL`] in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionCode {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

impl RegionCode {
    /// All 27 codes, in picker order.
    pub const ALL: [RegionCode; 27] = [
        RegionCode::Ac,
        RegionCode::Al,
        RegionCode::Ap,
        RegionCode::Am,
        RegionCode::Ba,
        RegionCode::Ce,
        RegionCode::Df,
        RegionCode::Es,
        RegionCode::Go,
        RegionCode::Ma,
        RegionCode::Mt,
        RegionCode::Ms,
        RegionCode::Mg,
        RegionCode::Pa,
        RegionCode::Pb,
        RegionCode::Pr,
        RegionCode::Pe,
        RegionCode::Pi,
        RegionCode::Rj,
        RegionCode::Rn,
        RegionCode::Rs,
        RegionCode::Ro,
        RegionCode::Rr,
        RegionCode::Sc,
        RegionCode::Sp,
        RegionCode::Se,
        RegionCode::To,
    ];

    /// Two-letter uppercase form, as displayed and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse failure for a manually entered region code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region code: {0}")]
pub struct ParseRegionCodeError(pub String);

impl FromStr for RegionCode {
    type Err = ParseRegionCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        RegionCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| ParseRegionCodeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for code in RegionCode::ALL {
            assert!(seen.insert(code.as_str()));
        }
        assert_eq!(seen.len(), 27);
    }

    #[test]
    fn test_picker_order() {
        assert_eq!(RegionCode::ALL[0], RegionCode::Ac);
        assert_eq!(RegionCode::ALL[24], RegionCode::Sp);
        assert_eq!(RegionCode::ALL[26], RegionCode::To);
    }

    #[test]
    fn test_serde_uses_uppercase_form() {
        assert_eq!(serde_json::to_string(&RegionCode::Sp).unwrap(), "\"SP\"");
        let back: RegionCode = serde_json::from_str("\"RJ\"").unwrap();
        assert_eq!(back, RegionCode::Rj);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("SP".parse::<RegionCode>().unwrap(), RegionCode::Sp);
        assert_eq!("sp".parse::<RegionCode>().unwrap(), RegionCode::Sp);
        assert!("XX".parse::<RegionCode>().is_err());
        assert!("".parse::<RegionCode>().is_err());
    }
}
