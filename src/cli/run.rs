// src/cli/run.rs
use dialoguer::{theme::ColorfulTheme, Select};

use crate::cli::cli::MenuAction;
use crate::models::{CliApp, Result};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🚀 Welcome to Prospect Scraper!");
        println!("═══════════════════════════════════════");
        println!("📋 {} seed company(ies) loaded", self.seeds.len());

        loop {
            let actions = vec![
                MenuAction::ResearchProspects,
                MenuAction::ProbeContactPages,
                MenuAction::ExportCsv,
                MenuAction::PreviewEmails,
                MenuAction::SendEmailCampaign,
                MenuAction::ShowStats,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::ResearchProspects => {
                    if let Err(e) = self.run_research().await {
                        error!("Research failed: {}", e);
                    }
                }
                MenuAction::ProbeContactPages => {
                    if let Err(e) = self.run_discovery().await {
                        error!("Contact-page probing failed: {}", e);
                    }
                }
                MenuAction::ExportCsv => {
                    if let Err(e) = self.run_export().await {
                        error!("Export failed: {}", e);
                    }
                }
                MenuAction::PreviewEmails => {
                    if let Err(e) = self.preview_emails().await {
                        error!("Email preview failed: {}", e);
                    }
                }
                MenuAction::SendEmailCampaign => {
                    if let Err(e) = self.run_send_emails().await {
                        error!("Email campaign failed: {}", e);
                    }
                }
                MenuAction::ShowStats => {
                    if let Err(e) = self.show_stats().await {
                        error!("Failed to show stats: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using Prospect Scraper!");
                    break;
                }
            }
        }

        Ok(())
    }
}
