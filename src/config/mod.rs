pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::campaign::Campaign;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::CampaignConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shipping-discounts")]
#[command(about = "Applies zip-code based shipping rate discounts to a checkout payload")]
pub struct CliConfig {
    /// Path to the campaign TOML file
    #[arg(short, long, default_value = "campaigns.toml")]
    pub config: String,

    /// Hook input JSON (cart and shipping_rates)
    #[arg(short, long, default_value = "input.json")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Show the loaded campaigns without processing any input
    #[arg(long)]
    pub dry_run: bool,
}

/// Paths for one local run plus the campaigns loaded for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookConfig {
    pub input_path: String,
    pub output_path: String,
    pub campaigns: CampaignConfig,
}

impl HookConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>, campaigns: CampaignConfig) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            campaigns,
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let campaigns = CampaignConfig::from_file(&cli.config)?;
        Ok(Self::new(cli.input.clone(), cli.output_path.clone(), campaigns))
    }
}

impl ConfigProvider for HookConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn campaigns(&self) -> &[Campaign] {
        &self.campaigns.campaigns
    }
}

impl Validate for HookConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        self.campaigns.validate()
    }
}
