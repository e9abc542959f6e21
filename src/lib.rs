pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, lambda::LambdaConfig, toml_config::CampaignConfig, HookConfig};

pub use core::{
    campaign_runner::{CampaignRunner, RunReport, ELIGIBLE_SOURCE},
    discount::DiscountApplicator,
    engine::HookEngine,
    pipeline::{process, HookPipeline},
    rate_name_selector::RateNameSelector,
    zip_selector::ZipSelector,
};
pub use domain::campaign::{Campaign, DiscountType, MatchType};
pub use domain::model::{Address, AppliedDiscount, Cart, HookInput, HookOutput, RunSummary, ShippingRate};
pub use domain::ports::DiscountableRate;
pub use utils::error::{Result, ScriptError};
