use crate::domain::campaign::MatchType;
use crate::domain::ports::DiscountableRate;

/// Decides whether a shipping rate's display name is targeted by a campaign.
#[derive(Debug, Clone)]
pub struct RateNameSelector {
    match_type: MatchType,
    rate_names: Vec<String>,
}

impl RateNameSelector {
    pub fn new<S: AsRef<str>>(match_type: MatchType, rate_names: Option<&[S]>) -> Self {
        let rate_names = rate_names
            .unwrap_or_default()
            .iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .collect();

        Self {
            match_type,
            rate_names,
        }
    }

    pub fn matches<R: DiscountableRate + ?Sized>(&self, rate: &R) -> bool {
        if self.match_type == MatchType::All {
            return true;
        }

        // Only the configured names are trimmed; the rate name is compared as sent.
        let name = rate.name().to_lowercase();
        self.rate_names
            .iter()
            .any(|configured| self.match_type.matches(&name, configured))
    }
}
