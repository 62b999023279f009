// src/cli/run_discovery.rs
use crate::discovery::probe_contact_pages;
use crate::extractor::types::EmailKind;
use crate::models::{CliApp, Result};
use dialoguer::{theme::ColorfulTheme, Input};

impl CliApp {
    pub async fn run_discovery(&self) -> Result<()> {
        println!("\n🕷️  Contact-Page Probing");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let base_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Base site URL (e.g. https://acmepest.com)")
            .interact_text()?;

        let emails = probe_contact_pages(
            self.analyzer.fetcher(),
            self.analyzer.contacts(),
            &base_url,
        )
        .await;

        if emails.is_empty() {
            println!("❌ No emails found on the probed pages");
            return Ok(());
        }

        println!("📧 Found {} unique email(s):", emails.len());
        for candidate in &emails {
            let kind = match candidate.kind {
                EmailKind::Personal => "personal",
                EmailKind::Company => "company",
                EmailKind::Generic => "generic",
            };
            println!("  {} ({})", candidate.value, kind);
        }

        Ok(())
    }
}
