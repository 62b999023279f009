// src/cli/run_send_emails.rs
use crate::models::{CliApp, Result};
use crate::outreach::{build_campaign_email, CampaignEmail, MailgunConfig, MailgunSender};
use dialoguer::{theme::ColorfulTheme, Confirm};

impl CliApp {
    async fn campaign_emails(&self) -> Vec<CampaignEmail> {
        let prospects = self.prospects.lock().await;
        prospects.iter().filter_map(build_campaign_email).collect()
    }

    pub async fn preview_emails(&self) -> Result<()> {
        let emails = self.campaign_emails().await;
        if emails.is_empty() {
            println!("❌ No prospects with email addresses in this session");
            return Ok(());
        }

        println!("\n✉️  {} campaign email(s) ready", emails.len());
        for email in &emails {
            println!("\n──────────────────────────────────────");
            println!("TO: {} ({})", email.to, email.company_name);
            println!("SUBJECT: {}", email.subject);
            println!("{}", email.body);
        }
        Ok(())
    }

    pub async fn run_send_emails(&self) -> Result<()> {
        let mut emails = self.campaign_emails().await;
        if emails.is_empty() {
            println!("❌ No prospects with email addresses in this session");
            println!("💡 Run the research action first");
            return Ok(());
        }

        let cap = self.config.outreach.max_emails_per_campaign;
        if emails.len() > cap {
            println!("⚠️  Capping campaign at {} email(s) (had {})", cap, emails.len());
            emails.truncate(cap);
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Send {} email(s) via Mailgun?", emails.len()))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Campaign cancelled");
            return Ok(());
        }

        let sender = MailgunSender::new(MailgunConfig::from_env()?);
        let results = sender
            .send_batch(&emails, self.config.outreach.delay_between_emails_ms)
            .await;

        let sent = results.iter().filter(|r| r.is_ok()).count();
        println!("🏁 Campaign done: {}/{} sent", sent, results.len());
        Ok(())
    }
}
