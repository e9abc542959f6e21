use anyhow::Result;
use shipping_discounts::utils::validation::Validate;
use shipping_discounts::{
    CampaignConfig, HookConfig, HookEngine, HookOutput, HookPipeline, LocalStorage, ScriptError,
};
use std::str::FromStr;
use tempfile::TempDir;

const CAMPAIGNS: &str = r#"
[script]
name = "remote-zip-rebates"
description = "Refund the out-of-area surcharge for remote postal codes"
version = "2.1"

[[campaigns]]
country_code = "CA"
province_code = "BC"
zip_code_match_type = "partial"
zip_codes = ["M1R", "A0B"]
rate_match_type = "exact"
rate_names = ["Canada Post Expedited (3 to 7 business days - exclude weekends)"]
discount_type = "fixed"
discount_amount = 18.75
discount_message = "FedEx has a mandatory Out-of-Delivery Area surcharge for your shipping zip code."

[[campaigns]]
country_code = "CA"
zip_code_match_type = "exact"
zip_codes = ["A0B 1H0"]
rate_match_type = "partial"
rate_names = ["priority"]
discount_type = "percent"
discount_amount = 20
discount_message = "Outport priority rebate"
"#;

fn write_input(dir: &TempDir, body: serde_json::Value) -> Result<String> {
    let path = dir.path().join("input.json");
    std::fs::write(&path, serde_json::to_vec(&body)?)?;
    Ok(path.to_str().unwrap().to_string())
}

fn hook_config(dir: &TempDir, input_path: String) -> Result<HookConfig> {
    let campaigns = CampaignConfig::from_toml_str(CAMPAIGNS)?;
    let output_path = dir.path().join("out").to_str().unwrap().to_string();
    let config = HookConfig::new(input_path, output_path, campaigns);
    config.validate()?;
    Ok(config)
}

fn price(value: &serde_json::Value) -> rust_decimal::Decimal {
    rust_decimal::Decimal::from_str(value.as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_end_to_end_hook_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = write_input(
        &temp_dir,
        serde_json::json!({
            "cart": {
                "shipping_address": {"country_code": "ca", "province_code": "NL", "zip": "a0b 1h0"}
            },
            "shipping_rates": [
                {"name": "Canada Post Expedited (3 to 7 business days - exclude weekends)", "price": "40.00", "source": "shopify", "code": "EXP"},
                {"name": "Canada Post Priority", "price": "60.00", "source": "shopify"},
                {"name": "FedEx Priority Overnight", "price": "90.00", "source": "fedex"}
            ]
        }),
    )?;

    let config = hook_config(&temp_dir, input_path)?;
    let engine = HookEngine::new(HookPipeline::new(LocalStorage::default(), config));
    let output_path = engine.run().await?;

    assert!(output_path.ends_with("shipping_rates.json"));
    let written = std::fs::read(&output_path)?;
    let output: serde_json::Value = serde_json::from_slice(&written)?;
    let rates = output["shipping_rates"].as_array().unwrap();

    assert_eq!(rates.len(), 3);
    assert_eq!(price(&rates[0]["price"]), rust_decimal::Decimal::from_str("21.25")?);
    assert_eq!(rates[0]["code"], "EXP");
    assert_eq!(price(&rates[1]["price"]), rust_decimal::Decimal::from_str("48.00")?);
    assert_eq!(rates[1]["discounts"][0]["message"], "Outport priority rebate");
    assert_eq!(price(&rates[2]["price"]), rust_decimal::Decimal::from_str("90.00")?);

    assert_eq!(output["summary"]["campaigns_evaluated"], 2);
    assert_eq!(output["summary"]["campaigns_matched"], 2);
    assert_eq!(output["summary"]["discounts_applied"], 2);

    // the written file round-trips into the typed output
    let typed: HookOutput = serde_json::from_slice(&written)?;
    assert_eq!(typed.shipping_rates[0].original_price(), rust_decimal::Decimal::from_str("40.00")?);

    Ok(())
}

#[tokio::test]
async fn test_cart_without_address_passes_rates_through() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = write_input(
        &temp_dir,
        serde_json::json!({
            "cart": {"shipping_address": null},
            "shipping_rates": [
                {"name": "Canada Post Priority", "price": "60.00", "source": "shopify"}
            ]
        }),
    )?;

    let config = hook_config(&temp_dir, input_path)?;
    let engine = HookEngine::new(HookPipeline::new(LocalStorage::default(), config));
    let output_path = engine.run().await?;

    let output: HookOutput = serde_json::from_slice(&std::fs::read(output_path)?)?;
    assert!(output.shipping_rates[0].discounts.is_empty());
    assert_eq!(output.summary.campaigns_matched, 0);
    assert_eq!(output.summary.discounts_applied, 0);

    Ok(())
}

#[tokio::test]
async fn test_missing_input_file_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.json").to_str().unwrap().to_string();

    let config = hook_config(&temp_dir, missing)?;
    let engine = HookEngine::new(HookPipeline::new(LocalStorage::default(), config));

    match engine.run().await {
        Err(ScriptError::IoError(_)) => Ok(()),
        other => Err(anyhow::anyhow!("expected an IO error, got {:?}", other)),
    }
}
