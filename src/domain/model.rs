use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::ports::DiscountableRate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub province_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub shipping_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    pub amount: Decimal,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<AppliedDiscount>,
}

impl ShippingRate {
    pub fn new(name: impl Into<String>, price: Decimal, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            source: source.into(),
            code: None,
            discounts: Vec::new(),
        }
    }

    pub fn total_discount(&self) -> Decimal {
        self.discounts.iter().map(|d| d.amount).sum()
    }

    /// Price before any discount was applied in this run.
    pub fn original_price(&self) -> Decimal {
        self.price + self.total_discount()
    }

    /// The message shown to the buyer, i.e. the most recent one.
    pub fn message(&self) -> Option<&str> {
        self.discounts.last().map(|d| d.message.as_str())
    }
}

impl DiscountableRate for ShippingRate {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Decimal {
        self.price
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn apply_discount(&mut self, amount: Decimal, message: &str) {
        // a rate never goes below zero
        let applied = amount.min(self.price).max(Decimal::ZERO);
        self.price -= applied;
        self.discounts.push(AppliedDiscount {
            amount: applied,
            message: message.to_string(),
        });
    }
}

/// What the platform hands to the hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub cart: Cart,
    #[serde(default)]
    pub shipping_rates: Vec<ShippingRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub campaigns_evaluated: usize,
    pub campaigns_matched: usize,
    pub discounts_applied: usize,
}

/// What the hook hands back: the same rates, possibly discounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookOutput {
    pub shipping_rates: Vec<ShippingRate>,
    pub summary: RunSummary,
    pub processed_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

// Platforms sometimes send numeric zips; treat them as text.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawText>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        RawText::Text(s) => s,
        RawText::Integer(n) => n.to_string(),
        RawText::Float(f) => f.to_string(),
        RawText::Flag(b) => b.to_string(),
    }))
}
