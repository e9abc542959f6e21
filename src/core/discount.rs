use crate::domain::campaign::DiscountType;
use crate::domain::ports::DiscountableRate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency minor unit: discounts are whole cents.
const MONEY_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DiscountValue {
    /// Share of the current price, already divided by 100.
    Fraction(Decimal),
    Flat(Decimal),
}

/// Takes a configured discount off a single shipping rate.
#[derive(Debug, Clone)]
pub struct DiscountApplicator {
    value: DiscountValue,
    message: String,
}

impl DiscountApplicator {
    pub fn new(discount_type: DiscountType, discount_amount: Decimal, message: impl Into<String>) -> Self {
        let value = match discount_type {
            DiscountType::Percent => DiscountValue::Fraction(discount_amount / Decimal::ONE_HUNDRED),
            DiscountType::Fixed => DiscountValue::Flat(discount_amount),
        };

        Self {
            value,
            message: message.into(),
        }
    }

    /// The amount this applicator would take off `rate` right now.
    pub fn discount_for<R: DiscountableRate + ?Sized>(&self, rate: &R) -> Decimal {
        match self.value {
            DiscountValue::Fraction(fraction) => (rate.price() * fraction)
                .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero),
            DiscountValue::Flat(amount) => amount,
        }
    }

    pub fn apply<R: DiscountableRate + ?Sized>(&self, rate: &mut R) {
        let discount = self.discount_for(rate);
        rate.apply_discount(discount, &self.message);
    }
}
