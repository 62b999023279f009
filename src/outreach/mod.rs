// src/outreach/mod.rs
use crate::extractor::SizeBucket;
use crate::models::Prospect;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct MailgunConfig {
    pub api_key: String,
    pub domain: String,
    pub from_email: String,
    pub from_name: String,
    pub base_url: String,
}

impl MailgunConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(MailgunConfig {
            api_key: std::env::var("MAILGUN_API_KEY")
                .map_err(|_| "MAILGUN_API_KEY environment variable required")?,
            domain: std::env::var("MAILGUN_DOMAIN")
                .unwrap_or_else(|_| "mg.pestprotraining.com".to_string()),
            from_email: std::env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "outreach@mg.pestprotraining.com".to_string()),
            from_name: std::env::var("FROM_NAME").unwrap_or_else(|_| "Pest Pro Training".to_string()),
            base_url: "https://api.mailgun.net/v3".to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct MailgunResponse {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct CampaignEmail {
    pub to: String,
    pub company_name: String,
    pub subject: String,
    pub body: String,
}

/// Build the personalized outreach email for a researched prospect.
/// Returns None when no address was found for the company.
pub fn build_campaign_email(prospect: &Prospect) -> Option<CampaignEmail> {
    let to = prospect.email.clone()?;
    let name = &prospect.company_name;

    let greeting = match prospect.contact_person.as_deref() {
        Some("Owner") | Some("Manager") | Some("President") | None => "Hello,".to_string(),
        Some(person) => format!(
            "Hi {},",
            person.split_whitespace().next().unwrap_or(person)
        ),
    };

    let hook = pain_point_hook(name, &prospect.pain_points);
    let (value_prop, benefit) = value_proposition(prospect.size_bucket);
    let service_line = service_benefit(&prospect.services);

    let cta = if prospect.contact_person.as_deref() == Some("Owner") {
        "Would you have 10 minutes for a quick call this week? I can show you exactly how \
         companies your size are using this to strengthen their operations."
            .to_string()
    } else {
        format!(
            "Would you be interested in a brief call to see how this might help {}? \
             I can share specific examples from companies your size.",
            name
        )
    };

    let mut body = format!(
        "{greeting}\n\n{hook}\n\n\
         I'm reaching out because Pest Pro University helps companies like {name} {benefit} \
         through our comprehensive online training platform.\n\n\
         What makes us different:\n\
         - {value_prop}\n\
         - CEU credits accepted in 22 states\n\
         - Three specialized tracks: Service Tech, Sales/Office, Business Management\n\
         - Industry-specific content designed specifically for pest control\n"
    );
    if let Some(line) = service_line {
        body.push_str("\n");
        body.push_str(line);
        body.push('\n');
    }
    body.push_str(&format!(
        "\n{cta}\n\n\
         The setup is simple: you can start immediately, train unlimited team members, \
         and there are no long-term commitments.\n\n\
         Best regards,\nPest Pro University\n"
    ));

    Some(CampaignEmail {
        to,
        company_name: name.clone(),
        subject: format!("Training Solution for {} - No Contracts, Unlimited Users", name),
        body,
    })
}

fn pain_point_hook(name: &str, pain_points: &[String]) -> String {
    let joined = pain_points.join(" ").to_lowercase();
    if joined.contains("hiring") {
        "I know finding and keeping quality technicians is one of the biggest challenges \
         in pest control right now."
            .to_string()
    } else if joined.contains("quality") {
        format!(
            "I noticed that {} has built a reputation for quality service - that's exactly \
             the kind of company we love working with.",
            name
        )
    } else if joined.contains("compliance") {
        "With all the regulatory changes in pest control, staying compliant while keeping \
         your team trained can be challenging."
            .to_string()
    } else if joined.contains("growth") || joined.contains("scaling") {
        format!(
            "Growing companies like {} often face the challenge of maintaining service \
             quality while expanding.",
            name
        )
    } else {
        format!(
            "I came across {} and was impressed by your professional approach to pest control.",
            name
        )
    }
}

fn value_proposition(bucket: SizeBucket) -> (&'static str, &'static str) {
    match bucket {
        SizeBucket::Large => (
            "Unlimited users per branch with no per-seat fees",
            "standardize training across all your locations while reducing per-employee costs",
        ),
        SizeBucket::Medium => (
            "Flexible training that grows with your business - no long-term contracts",
            "improve service consistency and operational efficiency as you continue to grow",
        ),
        SizeBucket::Small => (
            "No-contract approach with unlimited users for your entire team",
            "get professional training without the overhead of traditional programs",
        ),
    }
}

fn service_benefit(services: &[String]) -> Option<&'static str> {
    let joined = services.join(" ").to_lowercase();
    if joined.contains("termite") {
        Some(
            "Our termite inspection and treatment training modules cover both subterranean \
             and drywood termite protocols.",
        )
    } else if joined.contains("commercial") {
        Some(
            "Since you work with commercial accounts, our business management track covers \
             client retention and account growth strategies.",
        )
    } else if joined.contains("wildlife") {
        Some(
            "Our wildlife control training includes safety protocols and humane handling \
             procedures for specialized services like yours.",
        )
    } else if joined.contains("mosquito") {
        Some(
            "For seasonal services like mosquito control, our training standardizes service \
             delivery and customer communication through the season.",
        )
    } else {
        None
    }
}

pub struct MailgunSender {
    pub config: MailgunConfig,
    client: Client,
}

impl MailgunSender {
    pub fn new(config: MailgunConfig) -> Self {
        let client = Client::new();
        debug!("Created MailgunSender for domain: {}", config.domain);
        Self { config, client }
    }

    pub async fn send_email(
        &self,
        email: &CampaignEmail,
    ) -> Result<MailgunResponse, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/{}/messages", self.config.base_url, self.config.domain);
        debug!("Preparing email for {}: {}", email.to, email.subject);

        let mut form_data = HashMap::new();
        form_data.insert(
            "from",
            format!("{} <{}>", self.config.from_name, self.config.from_email),
        );
        form_data.insert("to", email.to.clone());
        form_data.insert("subject", email.subject.clone());
        form_data.insert("text", email.body.clone());
        form_data.insert("o:tracking", "yes".to_string());
        form_data.insert(
            "o:tag",
            format!("campaign-{}", chrono::Utc::now().format("%Y-%m")),
        );

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(&form_data)
            .send()
            .await?;

        debug!("Mailgun response status: {}", response.status());

        if response.status().is_success() {
            let mailgun_response: MailgunResponse = response.json().await?;
            Ok(mailgun_response)
        } else {
            let error_text = response.text().await?;
            error!("Mailgun API error: {}", error_text);
            Err(format!("Mailgun error: {}", error_text).into())
        }
    }

    /// Sequential batch send with a fixed delay between emails. Per-email
    /// failures are collected, never fatal.
    pub async fn send_batch(
        &self,
        emails: &[CampaignEmail],
        delay_ms: u64,
    ) -> Vec<Result<MailgunResponse, String>> {
        let mut results = Vec::new();
        info!(
            "Starting batch send of {} email(s) with {}ms delays",
            emails.len(),
            delay_ms
        );

        for (i, email) in emails.iter().enumerate() {
            println!(
                "Sending email {}/{} to {} ({})",
                i + 1,
                emails.len(),
                email.company_name,
                email.to
            );

            match self.send_email(email).await {
                Ok(response) => {
                    println!("✅ Sent to {}: {}", email.to, response.message);
                    results.push(Ok(response));
                }
                Err(e) => {
                    eprintln!("❌ Failed to send to {}: {}", email.to, e);
                    results.push(Err(e.to_string()));
                }
            }

            if i < emails.len() - 1 {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
            }
        }

        info!("Batch send complete, {} email(s) processed", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::SizeBucket;

    fn prospect(email: Option<&str>) -> Prospect {
        Prospect {
            id: "id".to_string(),
            company_name: "Acme Pest Control".to_string(),
            website: "https://acmepest.com".to_string(),
            phone: None,
            email: email.map(String::from),
            email_kind: None,
            address: None,
            contact_person: Some("Owner".to_string()),
            contact_title: Some("Owner".to_string()),
            size_bucket: SizeBucket::Small,
            employee_estimate: 5,
            services: vec!["Termite".to_string()],
            training_priority: "Medium".to_string(),
            training_gaps: vec![],
            deal_min: 3_600,
            deal_max: 7_200,
            annual_value: 8_000,
            opportunity_level: "Medium".to_string(),
            pain_points: vec!["hiring".to_string()],
            campaign_angle: String::new(),
            next_action: String::new(),
            follow_up_date: None,
            notes: None,
            data_source: "Website Scraping".to_string(),
            last_updated: String::new(),
        }
    }

    #[test]
    fn no_email_means_no_campaign_message() {
        assert!(build_campaign_email(&prospect(None)).is_none());
    }

    #[test]
    fn subject_names_the_company() {
        let email = build_campaign_email(&prospect(Some("owner@acmepest.com"))).unwrap();
        assert_eq!(
            email.subject,
            "Training Solution for Acme Pest Control - No Contracts, Unlimited Users"
        );
        assert_eq!(email.to, "owner@acmepest.com");
    }

    #[test]
    fn owner_contact_gets_neutral_greeting_and_call_cta() {
        let email = build_campaign_email(&prospect(Some("owner@acmepest.com"))).unwrap();
        assert!(email.body.starts_with("Hello,"));
        assert!(email.body.contains("10 minutes for a quick call"));
    }

    #[test]
    fn hiring_pain_point_drives_the_hook() {
        let email = build_campaign_email(&prospect(Some("x@acmepest.com"))).unwrap();
        assert!(email.body.contains("finding and keeping quality technicians"));
    }

    #[test]
    fn termite_service_gets_specific_line() {
        let email = build_campaign_email(&prospect(Some("x@acmepest.com"))).unwrap();
        assert!(email.body.contains("termite inspection and treatment training"));
    }
}
