// src/cli/run_research.rs
use crate::analyzer::format_report;
use crate::extractor::ResearchStatus;
use crate::models::{CliApp, Result};
use tracing::info;

impl CliApp {
    /// Sequentially research every seed company: fetch, extract, score,
    /// and stash the resulting prospects for export/campaign actions.
    pub async fn run_research(&self) -> Result<()> {
        println!("\n🔍 Researching {} seed company(ies)", self.seeds.len());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let mut complete = 0usize;
        let mut no_data = 0usize;
        let mut unreachable = 0usize;
        let mut researched = Vec::new();

        for (i, seed) in self.seeds.iter().enumerate() {
            println!("[{}/{}] {}", i + 1, self.seeds.len(), seed.name);

            let analysis = self.analyzer.analyze(seed).await;
            match &analysis.status {
                ResearchStatus::Complete => complete += 1,
                ResearchStatus::NoData => no_data += 1,
                ResearchStatus::Unreachable { .. } => unreachable += 1,
            }

            if (i + 1) % self.config.logging.progress_interval == 0 {
                info!("Progress: {}/{} sites researched", i + 1, self.seeds.len());
            }

            println!("{}", format_report(&analysis));
            if let Some(prospect) = analysis.prospect {
                researched.push(prospect);
            }

            if i < self.seeds.len() - 1 {
                self.analyzer.fetcher().polite_pause().await;
            }
        }

        let mut prospects = self.prospects.lock().await;
        prospects.extend(researched);

        println!("🏁 Research complete: {} complete, {} with no data, {} unreachable", complete, no_data, unreachable);
        println!("📋 {} prospect(s) in session, ready for export", prospects.len());
        Ok(())
    }
}
