use crate::domain::campaign::{Campaign, DiscountType, MatchType};
use crate::utils::error::{Result, ScriptError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub script: ScriptInfo,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

impl CampaignConfig {
    /// 從 TOML 檔案載入活動配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScriptError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析活動配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScriptError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DISCOUNT_MESSAGE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證每個活動的設定
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("script.name", &self.script.name)?;

        for (index, campaign) in self.campaigns.iter().enumerate() {
            validate_campaign(&format!("campaigns[{}]", index), campaign)?;
        }

        Ok(())
    }

    pub fn campaign_count(&self) -> usize {
        self.campaigns.len()
    }
}

fn validate_campaign(prefix: &str, campaign: &Campaign) -> Result<()> {
    validation::validate_non_empty_string(&format!("{}.country_code", prefix), &campaign.country_code)?;

    if campaign.zip_code_match_type == MatchType::All {
        return Err(ScriptError::InvalidConfigValueError {
            field: format!("{}.zip_code_match_type", prefix),
            value: MatchType::All.as_str().to_string(),
            reason: "Zip codes can only be matched with 'exact' or 'partial'".to_string(),
        });
    }
    validation::validate_string_list(&format!("{}.zip_codes", prefix), &campaign.zip_codes)?;

    if campaign.rate_match_type != MatchType::All {
        let field = format!("{}.rate_names", prefix);
        let names = validation::validate_required_field(&field, &campaign.rate_names)?;
        validation::validate_string_list(&field, names)?;
    }

    let amount_field = format!("{}.discount_amount", prefix);
    match campaign.discount_type {
        DiscountType::Percent => validation::validate_range(
            &amount_field,
            campaign.discount_amount,
            Decimal::ZERO,
            Decimal::ONE_HUNDRED,
        )?,
        DiscountType::Fixed => validation::validate_range(
            &amount_field,
            campaign.discount_amount,
            Decimal::ZERO,
            Decimal::MAX,
        )?,
    }

    validation::validate_non_empty_string(&format!("{}.discount_message", prefix), &campaign.discount_message)?;

    if campaign.require_province_match {
        validation::validate_non_empty_string(&format!("{}.province_code", prefix), &campaign.province_code)?;
    }

    Ok(())
}

impl Validate for CampaignConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
