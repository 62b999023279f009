// src/cli/run_export.rs
use crate::export::ProspectExporter;
use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn run_export(&self) -> Result<()> {
        let prospects = self.prospects.lock().await;
        if prospects.is_empty() {
            println!("❌ No prospects in this session");
            println!("💡 Run the research action first");
            return Ok(());
        }

        let filename = format!(
            "{}/{}",
            self.config.output.directory, self.config.output.csv_filename
        );

        let exporter = ProspectExporter::new();
        exporter.export_to_csv(&prospects, &filename).await?;

        let json_filename = filename
            .strip_suffix(".csv")
            .map(|stem| format!("{}.json", stem))
            .unwrap_or_else(|| format!("{}.json", filename));
        exporter.export_to_json(&prospects, &json_filename).await?;

        let stats = exporter.generate_stats(&prospects);
        println!(
            "✅ Exported {} prospect(s) to {} (+ {})",
            stats.total, filename, json_filename
        );
        println!("💰 Pipeline value: ${}", stats.pipeline_value);
        Ok(())
    }
}
