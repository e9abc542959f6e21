use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a configured string is compared against a candidate after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
    All,
}

impl MatchType {
    /// Compares one already-normalized candidate against one already-normalized pattern.
    pub fn matches(self, candidate: &str, pattern: &str) -> bool {
        match self {
            MatchType::Exact => candidate == pattern,
            MatchType::Partial => candidate.contains(pattern),
            MatchType::All => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Partial => "partial",
            MatchType::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Fixed,
    Percent,
}

/// One configured rule: where it applies, which rates it targets, and what it takes off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub country_code: String,
    #[serde(default)]
    pub province_code: String,
    pub zip_code_match_type: MatchType,
    pub zip_codes: Vec<String>,
    pub rate_match_type: MatchType,
    #[serde(default)]
    pub rate_names: Option<Vec<String>>,
    pub discount_type: DiscountType,
    pub discount_amount: Decimal,
    pub discount_message: String,
    /// Off by default: the province is compared but does not gate the address match.
    #[serde(default)]
    pub require_province_match: bool,
}
