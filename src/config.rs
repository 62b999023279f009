use crate::extractor::size::SizeHeuristics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    pub heuristics: SizeHeuristics,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub outreach: OutreachConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    pub user_agent: String,
    pub request_timeout_seconds: u64,

    // Politeness pause between sequential requests, uniform in [min, max]
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub progress_interval: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub csv_filename: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutreachConfig {
    pub delay_between_emails_ms: u64,
    pub max_emails_per_campaign: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig {
                user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                             AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
                request_timeout_seconds: 10,
                delay_min_ms: 1000,
                delay_max_ms: 3000,
            },
            heuristics: SizeHeuristics::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                progress_interval: 10,
            },
            output: OutputConfig {
                directory: "out".to_string(),
                csv_filename: "prospects.csv".to_string(),
            },
            outreach: OutreachConfig {
                delay_between_emails_ms: 3000,
                max_emails_per_campaign: 100,
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
