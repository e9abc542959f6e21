use crate::core::discount::DiscountApplicator;
use crate::core::rate_name_selector::RateNameSelector;
use crate::core::zip_selector::ZipSelector;
use crate::domain::campaign::Campaign;
use crate::domain::model::{Address, Cart, RunSummary};
use crate::domain::ports::DiscountableRate;

/// Rates calculated by the platform itself; carrier-calculated rates are never touched.
pub const ELIGIBLE_SOURCE: &str = "shopify";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignOutcome {
    pub campaign_index: usize,
    pub address_matched: bool,
    /// Positions in the rate slice this campaign discounted, in order.
    pub discounted_rates: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<CampaignOutcome>,
}

impl RunReport {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            campaigns_evaluated: self.outcomes.len(),
            campaigns_matched: self.outcomes.iter().filter(|o| o.address_matched).count(),
            discounts_applied: self.outcomes.iter().map(|o| o.discounted_rates.len()).sum(),
        }
    }
}

/// Runs every configured campaign, in order, against one cart's shipping rates.
#[derive(Debug, Clone)]
pub struct CampaignRunner {
    campaigns: Vec<Campaign>,
}

impl CampaignRunner {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self { campaigns }
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn run<R: DiscountableRate>(&self, cart: &Cart, rates: &mut [R]) {
        self.evaluate(cart, rates);
    }

    /// Same pass as [`run`](Self::run), reporting what each campaign did.
    pub fn evaluate<R: DiscountableRate>(&self, cart: &Cart, rates: &mut [R]) -> RunReport {
        let address = cart.shipping_address.as_ref();
        let mut report = RunReport::default();

        for (campaign_index, campaign) in self.campaigns.iter().enumerate() {
            let zip_selector = ZipSelector::new(campaign.zip_code_match_type, campaign.zip_codes.as_slice());
            let rate_name_selector =
                RateNameSelector::new(campaign.rate_match_type, campaign.rate_names.as_deref());

            let address_matched = match address {
                Some(address) => address_matches(campaign, address, &zip_selector),
                None => false,
            };

            let discount_applicator = DiscountApplicator::new(
                campaign.discount_type,
                campaign.discount_amount,
                campaign.discount_message.as_str(),
            );

            tracing::debug!(
                campaign = campaign_index,
                country = %campaign.country_code,
                address_matched,
                "Evaluating shipping campaign"
            );

            let mut discounted_rates = Vec::new();
            for (rate_index, rate) in rates.iter_mut().enumerate() {
                if rate_name_selector.matches(&*rate) && address_matched {
                    if rate.source() != ELIGIBLE_SOURCE {
                        continue;
                    }
                    discount_applicator.apply(&mut *rate);
                    tracing::trace!(
                        campaign = campaign_index,
                        rate = %rate.name(),
                        price = %rate.price(),
                        "Discount applied"
                    );
                    discounted_rates.push(rate_index);
                }
            }

            report.outcomes.push(CampaignOutcome {
                campaign_index,
                address_matched,
                discounted_rates,
            });
        }

        report
    }
}

fn address_matches(campaign: &Campaign, address: &Address, zip_selector: &ZipSelector) -> bool {
    let country_match = same_code(address.country_code.as_deref(), &campaign.country_code);
    let province_match = same_code(address.province_code.as_deref(), &campaign.province_code);
    let zip_match = zip_selector.matches(address.zip.as_deref());

    if !province_match && !campaign.require_province_match {
        tracing::trace!(
            expected = %campaign.province_code,
            actual = ?address.province_code,
            "Province differs; not enforced for this campaign"
        );
    }

    if campaign.require_province_match {
        country_match && province_match && zip_match
    } else {
        country_match && zip_match
    }
}

fn same_code(actual: Option<&str>, expected: &str) -> bool {
    actual.is_some_and(|code| code.trim().to_uppercase() == expected.trim().to_uppercase())
}
