// src/cli/cli.rs
use tracing::info;

use crate::analyzer::CompanyAnalyzer;
use crate::config::Config;
use crate::models::CliApp;
use crate::prospects::load_seeds;
use tokio::sync::Mutex;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone)]
pub enum MenuAction {
    ResearchProspects,
    ProbeContactPages,
    ExportCsv,
    PreviewEmails,
    SendEmailCampaign,
    ShowStats,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::ResearchProspects => {
                write!(f, "🔍 Research seed prospects (scrape & analyze)")
            }
            MenuAction::ProbeContactPages => {
                write!(f, "🕷️  Probe contact pages of one site for emails")
            }
            MenuAction::ExportCsv => write!(f, "📤 Export prospects to CSV"),
            MenuAction::PreviewEmails => write!(f, "✉️  Preview campaign emails"),
            MenuAction::SendEmailCampaign => write!(f, "📧 Send email campaign via Mailgun"),
            MenuAction::ShowStats => write!(f, "📊 Show session statistics"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub async fn new(config: Config) -> Result<Self> {
        let analyzer = CompanyAnalyzer::new(&config)?;

        info!("Loading seed companies from prospects.yml...");
        let seeds = load_seeds("prospects.yml").await?;
        info!("Loaded {} seed company(ies)", seeds.len());

        Ok(Self {
            config,
            analyzer,
            seeds,
            prospects: Mutex::new(Vec::new()),
        })
    }
}
