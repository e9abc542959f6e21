use crate::config::toml_config::CampaignConfig;
use crate::utils::error::{Result, ScriptError};
use crate::utils::validation::Validate;
use std::env;

pub const CONFIG_ENV: &str = "CAMPAIGN_CONFIG";
pub const CONFIG_PATH_ENV: &str = "CAMPAIGN_CONFIG_PATH";

/// Campaigns for the hosted hook, read once at cold start.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub campaigns: CampaignConfig,
}

impl LambdaConfig {
    /// Inline TOML in `CAMPAIGN_CONFIG` wins over a file at `CAMPAIGN_CONFIG_PATH`.
    pub fn from_env() -> Result<Self> {
        let campaigns = match env::var(CONFIG_ENV) {
            Ok(inline) => CampaignConfig::from_toml_str(&inline)?,
            Err(_) => {
                let path = env::var(CONFIG_PATH_ENV).map_err(|_| ScriptError::ConfigError {
                    message: format!("Either {} or {} must be set", CONFIG_ENV, CONFIG_PATH_ENV),
                })?;
                CampaignConfig::from_file(path)?
            }
        };

        Ok(Self { campaigns })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.campaigns.validate()?;

        tracing::info!(
            "✅ Lambda configuration validation passed ({} campaigns)",
            self.campaigns.campaign_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share one test so the env vars are not raced by parallel tests.
    #[test]
    fn test_from_env() {
        env::remove_var(CONFIG_ENV);
        env::remove_var(CONFIG_PATH_ENV);
        assert!(matches!(
            LambdaConfig::from_env(),
            Err(ScriptError::ConfigError { .. })
        ));

        env::set_var(
            CONFIG_ENV,
            r#"
[script]
name = "inline"

[[campaigns]]
country_code = "US"
zip_code_match_type = "partial"
zip_codes = ["100"]
rate_match_type = "all"
discount_type = "fixed"
discount_amount = 5
discount_message = "Manhattan rebate"
"#,
        );
        let config = LambdaConfig::from_env().unwrap();
        assert_eq!(config.campaigns.script.name, "inline");
        assert!(config.validate().is_ok());

        env::remove_var(CONFIG_ENV);
    }
}
