use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    analyzer::CompanyAnalyzer,
    config::Config,
    extractor::types::EmailKind,
    extractor::SizeBucket,
    prospects::SeedCompany,
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A candidate business record for sales outreach. Becomes one row in the
/// export sheet; created once per research pass, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prospect {
    pub id: String,
    pub company_name: String,
    pub website: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub email_kind: Option<EmailKind>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub contact_title: Option<String>,
    pub size_bucket: SizeBucket,
    pub employee_estimate: u32,
    pub services: Vec<String>,
    pub training_priority: String,
    pub training_gaps: Vec<String>,
    pub deal_min: u32,
    pub deal_max: u32,
    pub annual_value: u32,
    pub opportunity_level: String,
    pub pain_points: Vec<String>,
    pub campaign_angle: String,
    pub next_action: String,
    pub follow_up_date: Option<String>,
    pub notes: Option<String>,
    pub data_source: String,
    pub last_updated: String,
}

pub struct CliApp {
    pub config: Config,
    pub analyzer: CompanyAnalyzer,
    pub seeds: Vec<SeedCompany>,
    // Prospects researched this session, consumed by export/campaign actions
    pub prospects: Mutex<Vec<Prospect>>,
}
