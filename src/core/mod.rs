pub mod campaign_runner;
pub mod discount;
pub mod engine;
pub mod pipeline;
pub mod rate_name_selector;
pub mod zip_selector;

pub use crate::domain::model::{Cart, HookInput, HookOutput, ShippingRate};
pub use crate::domain::ports::{ConfigProvider, DiscountableRate, Pipeline, Storage};
pub use crate::utils::error::Result;
