use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct HookEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> HookEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting shipping discount hook...");

        // Extract
        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} shipping rates (address present: {})",
            input.shipping_rates.len(),
            input.cart.shipping_address.is_some()
        );

        // Transform
        let output = self.pipeline.transform(input).await?;
        tracing::info!(
            "Evaluated {} campaigns, {} matched the address, {} discounts applied",
            output.summary.campaigns_evaluated,
            output.summary.campaigns_matched,
            output.summary.discounts_applied
        );

        // Load
        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
