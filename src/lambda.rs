#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use shipping_discounts::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use shipping_discounts::{process, CampaignRunner, HookInput, HookOutput, LambdaConfig};

#[cfg(feature = "lambda")]
async fn function_handler(
    runner: &CampaignRunner,
    event: LambdaEvent<HookInput>,
) -> Result<HookOutput, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        rates = event.payload.shipping_rates.len(),
        "Applying shipping discounts"
    );

    let output = process(runner, event.payload);

    tracing::info!(
        campaigns_matched = output.summary.campaigns_matched,
        discounts_applied = output.summary.discounts_applied,
        "Shipping discounts applied"
    );
    Ok(output)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let runner = CampaignRunner::new(config.campaigns.campaigns);
    let runner = &runner;

    run(service_fn(move |event: LambdaEvent<HookInput>| async move {
        function_handler(runner, event).await
    }))
    .await
}
