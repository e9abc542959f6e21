use crate::core::campaign_runner::CampaignRunner;
use crate::core::{ConfigProvider, HookInput, HookOutput, Pipeline, Storage};
use crate::utils::error::{Result, ScriptError};
use std::path::Path;

pub const OUTPUT_FILENAME: &str = "shipping_rates.json";

/// Runs the campaigns over one hook payload and echoes the (mutated) rates back.
pub fn process(runner: &CampaignRunner, input: HookInput) -> HookOutput {
    let HookInput {
        cart,
        mut shipping_rates,
    } = input;

    let report = runner.evaluate(&cart, &mut shipping_rates);

    HookOutput {
        shipping_rates,
        summary: report.summary(),
        processed_at: chrono::Utc::now(),
    }
}

/// File-backed hook: reads the platform payload, applies campaigns, writes the result.
pub struct HookPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    runner: CampaignRunner,
}

impl<S: Storage, C: ConfigProvider> HookPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let runner = CampaignRunner::new(config.campaigns().to_vec());
        Self {
            storage,
            config,
            runner,
        }
    }

    fn output_file(&self) -> Result<String> {
        let path = Path::new(self.config.output_path()).join(OUTPUT_FILENAME);
        path.to_str()
            .map(str::to_string)
            .ok_or_else(|| ScriptError::ProcessingError {
                message: format!("Output path is not valid UTF-8: {}", path.display()),
            })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for HookPipeline<S, C> {
    async fn extract(&self) -> Result<HookInput> {
        tracing::debug!("Reading hook input from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        let input: HookInput = serde_json::from_slice(&data)?;
        Ok(input)
    }

    async fn transform(&self, input: HookInput) -> Result<HookOutput> {
        if self.runner.campaigns().is_empty() {
            tracing::warn!("No campaigns configured, shipping rates pass through unchanged");
        }
        Ok(process(&self.runner, input))
    }

    async fn load(&self, output: HookOutput) -> Result<String> {
        let path = self.output_file()?;
        let json = serde_json::to_vec_pretty(&output)?;
        self.storage.write_file(&path, &json).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::campaign::{Campaign, DiscountType, MatchType};
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()).into()
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        campaigns: Vec<Campaign>,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &str {
            "input.json"
        }

        fn output_path(&self) -> &str {
            "out"
        }

        fn campaigns(&self) -> &[Campaign] {
            &self.campaigns
        }
    }

    fn percent_campaign() -> Campaign {
        Campaign {
            country_code: "US".to_string(),
            province_code: "NY".to_string(),
            zip_code_match_type: MatchType::Exact,
            zip_codes: vec!["10001".to_string()],
            rate_match_type: MatchType::Partial,
            rate_names: Some(vec!["ground".to_string()]),
            discount_type: DiscountType::Percent,
            discount_amount: Decimal::TEN,
            discount_message: "10% off ground".to_string(),
            require_province_match: false,
        }
    }

    #[test]
    fn test_pipeline_round_trip_through_storage() {
        let storage = MemoryStorage::default();
        storage.files.lock().unwrap().insert(
            "input.json".to_string(),
            br#"{
                "cart": {"shipping_address": {"country_code": "US", "province_code": "NY", "zip": 10001}},
                "shipping_rates": [
                    {"name": "UPS Ground", "price": "50.00", "source": "shopify"},
                    {"name": "UPS Next Day Air", "price": "80.00", "source": "shopify"}
                ]
            }"#
            .to_vec(),
        );

        let pipeline = HookPipeline::new(storage, TestConfig { campaigns: vec![percent_campaign()] });

        let input = tokio_test::block_on(pipeline.extract()).unwrap();
        let output = tokio_test::block_on(pipeline.transform(input)).unwrap();
        assert_eq!(output.shipping_rates[0].price, Decimal::from_str("45.00").unwrap());
        assert_eq!(output.shipping_rates[1].price, Decimal::from_str("80.00").unwrap());
        assert_eq!(output.summary.discounts_applied, 1);

        let path = tokio_test::block_on(pipeline.load(output)).unwrap();
        assert_eq!(path, Path::new("out").join(OUTPUT_FILENAME).to_str().unwrap());

        let written = pipeline.storage.files.lock().unwrap().get(&path).cloned().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(json["shipping_rates"][0]["discounts"][0]["message"], "10% off ground");
        assert!(json["shipping_rates"][1].get("discounts").is_none());
    }

    #[test]
    fn test_extract_rejects_malformed_input() {
        let storage = MemoryStorage::default();
        storage
            .files
            .lock()
            .unwrap()
            .insert("input.json".to_string(), b"not json".to_vec());

        let pipeline = HookPipeline::new(storage, TestConfig { campaigns: vec![] });
        let err = tokio_test::block_on(pipeline.extract()).unwrap_err();
        assert!(matches!(err, ScriptError::SerializationError(_)));
    }
}
