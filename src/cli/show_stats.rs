// src/cli/show_stats.rs
use crate::export::ProspectExporter;
use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn show_stats(&self) -> Result<()> {
        let prospects = self.prospects.lock().await;

        println!("\n📊 Session Statistics");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Seed companies:        {}", self.seeds.len());
        println!("Researched prospects:  {}", prospects.len());

        if prospects.is_empty() {
            return Ok(());
        }

        let stats = ProspectExporter::new().generate_stats(&prospects);
        println!("\nBy size bucket:");
        for (bucket, count) in &stats.by_bucket {
            println!("  {:<8} {}", bucket, count);
        }
        println!("\nBy training priority:");
        for (priority, count) in &stats.by_priority {
            println!("  {:<8} {}", priority, count);
        }
        println!("\n💰 Total pipeline value: ${}", stats.pipeline_value);

        let with_email = prospects.iter().filter(|p| p.email.is_some()).count();
        println!("📧 Prospects with an email address: {}", with_email);
        Ok(())
    }
}
