use clap::Parser;
use shipping_discounts::utils::error::ErrorSeverity;
use shipping_discounts::utils::{logger, validation::Validate};
use shipping_discounts::{CliConfig, HookConfig, HookEngine, HookPipeline, LocalStorage, MatchType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting shipping-discounts hook");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入活動配置
    let config = match HookConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load campaign config '{}': {}", cli.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &cli);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No input will be processed");
        perform_dry_run(&config);
        return Ok(());
    }

    let pipeline = HookPipeline::new(LocalStorage::default(), config);
    let engine = HookEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Shipping discounts applied");
            println!("{}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Hook failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &HookConfig, cli: &CliConfig) {
    let script = &config.campaigns.script;
    eprintln!("📋 Configuration Summary:");
    eprintln!(
        "  Script: {} v{}",
        script.name,
        script.version.as_deref().unwrap_or("unversioned")
    );
    if let Some(description) = &script.description {
        eprintln!("  Description: {}", description);
    }
    eprintln!("  Campaigns: {}", config.campaigns.campaign_count());
    eprintln!("  Input: {}", config.input_path);
    eprintln!("  Output: {}", config.output_path);

    if cli.dry_run {
        eprintln!("  🔍 DRY RUN MODE ENABLED");
    }

    eprintln!();
}

fn perform_dry_run(config: &HookConfig) {
    eprintln!("🔍 Campaign Analysis:");

    for (index, campaign) in config.campaigns.campaigns.iter().enumerate() {
        eprintln!();
        eprintln!("  #{} {}", index + 1, campaign.country_code);
        eprintln!(
            "    Zip codes ({}): {}",
            campaign.zip_code_match_type.as_str(),
            campaign.zip_codes.join(", ")
        );

        match (&campaign.rate_match_type, &campaign.rate_names) {
            (MatchType::All, _) => eprintln!("    Rates: all"),
            (match_type, Some(names)) => {
                eprintln!("    Rates ({}): {}", match_type.as_str(), names.join(", "))
            }
            (match_type, None) => eprintln!("    Rates ({}): none", match_type.as_str()),
        }

        eprintln!(
            "    Discount: {:?} {} \"{}\"",
            campaign.discount_type, campaign.discount_amount, campaign.discount_message
        );

        if campaign.require_province_match {
            eprintln!("    Province: {} (enforced)", campaign.province_code);
        }
    }

    eprintln!();
    eprintln!("✅ Dry run complete. Use --verbose for per-campaign logs during a real run.");
}
