use crate::domain::campaign::MatchType;

/// Decides whether a postal code falls inside a campaign's zip list.
#[derive(Debug, Clone)]
pub struct ZipSelector {
    match_type: MatchType,
    zip_codes: Vec<String>,
}

impl ZipSelector {
    pub fn new<S: AsRef<str>>(match_type: MatchType, zip_codes: &[S]) -> Self {
        Self {
            match_type,
            zip_codes: zip_codes.iter().map(|z| normalize(z.as_ref())).collect(),
        }
    }

    pub fn matches(&self, zip_code: Option<&str>) -> bool {
        let candidate = normalize(zip_code.unwrap_or_default());
        self.zip_codes
            .iter()
            .any(|zip| self.match_type.matches(&candidate, zip))
    }
}

fn normalize(zip_code: &str) -> String {
    zip_code.trim().to_uppercase()
}
