use crate::domain::campaign::Campaign;
use crate::domain::model::{HookInput, HookOutput};
use crate::utils::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// The slice of a platform shipping rate the campaigns need.
pub trait DiscountableRate {
    fn name(&self) -> &str;
    fn price(&self) -> Decimal;
    fn source(&self) -> &str;
    fn apply_discount(&mut self, amount: Decimal, message: &str);
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn campaigns(&self) -> &[Campaign];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<HookInput>;
    async fn transform(&self, input: HookInput) -> Result<HookOutput>;
    async fn load(&self, output: HookOutput) -> Result<String>;
}
