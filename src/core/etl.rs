use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    /// Run extract, transform and load in order. Returns the path of the
    /// written page. The first failing stage aborts the run.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Extracting match data...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} match records", records.len());
        self.monitor.log_stats("extract");

        tracing::info!("Transforming match data...");
        let report = self.pipeline.transform(records).await?;
        tracing::info!(
            "Summarized {} teams, {} findings",
            report.summaries.len(),
            report.findings.len()
        );
        self.monitor.log_stats("transform");

        tracing::info!("Rendering blog page...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Blog updated: {}", output_path);
        self.monitor.log_stats("load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
