use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        let started = Instant::now();

        // Extract
        tracing::info!("Extracting data...");
        let batch = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} rows for batch {}",
            batch.rows.len(),
            batch.batch_date
        );

        // Transform
        tracing::info!("Transforming data...");
        let rows = self.pipeline.transform(batch)?;
        tracing::info!("Transformed {} rows", rows.len());

        // Load
        tracing::info!("Loading data...");
        let output_path = self.pipeline.load(rows)?;
        tracing::info!("Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(output_path)
    }
}
