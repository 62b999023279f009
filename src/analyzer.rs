// src/analyzer.rs
use crate::config::Config;
use crate::extractor::types::ResearchStatus;
use crate::extractor::{ContactExtractor, PageSnapshot, SizeBucket, SizeScorer};
use crate::fetcher::PageFetcher;
use crate::models::Prospect;
use crate::prospects::SeedCompany;
use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

/// Result of researching one company. The status tells "unreachable" apart
/// from "reachable but empty"; a prospect row is produced in both reachable
/// cases so the sheet still gets a placeholder-filled entry.
#[derive(Debug, Clone)]
pub struct CompanyAnalysis {
    pub company_name: String,
    pub website: String,
    pub status: ResearchStatus,
    pub size_score: u32,
    pub prospect: Option<Prospect>,
}

pub struct CompanyAnalyzer {
    fetcher: PageFetcher,
    contacts: ContactExtractor,
    scorer: SizeScorer,
}

impl CompanyAnalyzer {
    pub fn new(config: &Config) -> crate::models::Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(&config.scraping)?,
            contacts: ContactExtractor::new(),
            scorer: SizeScorer::new(config.heuristics.clone()),
        })
    }

    pub fn fetcher(&self) -> &PageFetcher {
        &self.fetcher
    }

    pub fn contacts(&self) -> &ContactExtractor {
        &self.contacts
    }

    /// Fetch the homepage and derive the full prospect record: contact
    /// fields, size bucket, training gaps, deal sizing.
    pub async fn analyze(&self, seed: &SeedCompany) -> CompanyAnalysis {
        info!("Researching {} ({})", seed.name, seed.website);

        let html = match self.fetcher.fetch(&seed.website).await {
            Ok(html) => html,
            Err(e) => {
                warn!("{} unreachable: {}", seed.website, e);
                return CompanyAnalysis {
                    company_name: seed.name.clone(),
                    website: seed.website.clone(),
                    status: ResearchStatus::Unreachable {
                        reason: e.to_string(),
                    },
                    size_score: 0,
                    prospect: None,
                };
            }
        };

        let page = PageSnapshot::parse(&seed.website, &html);
        let fields = self.contacts.extract(&page);
        let (size_score, bucket) = self.scorer.assess(&page.clean_text, page.image_count);

        let text = page.clean_text.to_lowercase();
        let gaps = derive_training_gaps(&text);
        let (deal_min, deal_max) = deal_potential(bucket);
        let (contact_person, contact_title) = detect_decision_maker(&text);

        let status = if fields.is_empty() && size_score == 0 {
            ResearchStatus::NoData
        } else {
            ResearchStatus::Complete
        };

        let (emp_lo, emp_hi) = bucket.employee_range();
        let prospect = Prospect {
            id: Uuid::new_v4().to_string(),
            company_name: seed.name.clone(),
            website: seed.website.clone(),
            phone: fields.phone.or_else(|| seed.phone.clone()),
            email: fields.email,
            email_kind: fields.email_kind,
            address: fields.address.or_else(|| seed.address.clone()),
            contact_person,
            contact_title,
            size_bucket: bucket,
            employee_estimate: fastrand::u32(emp_lo..=emp_hi),
            services: fields.services,
            training_priority: training_priority(gaps.len()).to_string(),
            training_gaps: gaps.clone(),
            deal_min,
            deal_max,
            annual_value: annual_value(bucket),
            opportunity_level: opportunity_level(gaps.len()).to_string(),
            pain_points: pain_points(bucket),
            campaign_angle: campaign_angle(bucket).to_string(),
            next_action: "Send intro email".to_string(),
            follow_up_date: Some((Utc::now() + Duration::days(7)).format("%Y-%m-%d").to_string()),
            notes: seed.notes.clone(),
            data_source: "Website Scraping".to_string(),
            last_updated: Utc::now().to_rfc3339(),
        };

        info!(
            "{}: size score {} -> {}, {} gap(s), status {}",
            seed.name, size_score, bucket, prospect.training_gaps.len(), status
        );

        CompanyAnalysis {
            company_name: seed.name.clone(),
            website: seed.website.clone(),
            status,
            size_score,
            prospect: Some(prospect),
        }
    }
}

fn derive_training_gaps(text: &str) -> Vec<String> {
    let mut gaps = Vec::new();
    if !text.contains("training") {
        gaps.push("No formal training mentioned".to_string());
    }
    if text.contains("hiring") || text.contains("careers") {
        gaps.push("Hiring challenges indicate training needs".to_string());
    }
    if text.contains("quality") && text.contains("service") {
        gaps.push("Quality focus suggests training opportunities".to_string());
    }
    if text.contains("compliance") || text.contains("licensed") {
        gaps.push("Compliance requirements".to_string());
    }
    gaps
}

fn training_priority(gap_count: usize) -> &'static str {
    if gap_count >= 3 {
        "High"
    } else if gap_count >= 1 {
        "Medium"
    } else {
        "Low"
    }
}

fn opportunity_level(gap_count: usize) -> &'static str {
    if gap_count >= 2 {
        "High"
    } else {
        "Medium"
    }
}

fn deal_potential(bucket: SizeBucket) -> (u32, u32) {
    match bucket {
        SizeBucket::Large => (15_000, 21_600),
        SizeBucket::Medium => (11_200, 16_800),
        SizeBucket::Small => (3_600, 7_200),
    }
}

fn annual_value(bucket: SizeBucket) -> u32 {
    match bucket {
        SizeBucket::Small => 8_000,
        SizeBucket::Medium => 15_000,
        SizeBucket::Large => 25_000,
    }
}

fn pain_points(bucket: SizeBucket) -> Vec<String> {
    let points: &[&str] = match bucket {
        SizeBucket::Small => &["hiring", "quality", "growth"],
        SizeBucket::Medium => &["scaling", "quality", "compliance"],
        SizeBucket::Large => &["hiring", "compliance", "established"],
    };
    points.iter().map(|p| p.to_string()).collect()
}

fn campaign_angle(bucket: SizeBucket) -> &'static str {
    match bucket {
        SizeBucket::Large => {
            "Standardize training across all locations with unlimited users per branch"
        }
        SizeBucket::Medium => "Flexible training that grows with the business, no long-term contracts",
        SizeBucket::Small => "No-contract training with unlimited users for the whole team",
    }
}

fn detect_decision_maker(text: &str) -> (Option<String>, Option<String>) {
    for (keyword, label) in [
        ("owner", "Owner"),
        ("president", "President"),
        ("manager", "Manager"),
    ] {
        if text.contains(keyword) {
            return (Some(label.to_string()), Some(label.to_string()));
        }
    }
    (None, None)
}

/// Human-readable analysis report, mirroring what the sales team reads
/// before deciding on outreach.
pub fn format_report(analysis: &CompanyAnalysis) -> String {
    let prospect = match &analysis.prospect {
        Some(p) => p,
        None => {
            return format!(
                "COMPANY ANALYSIS - {}\nWebsite: {}\nStatus: {}\n",
                analysis.company_name, analysis.website, analysis.status
            );
        }
    };

    let services = if prospect.services.is_empty() {
        "General pest control".to_string()
    } else {
        prospect.services.join(", ")
    };
    let gaps = if prospect.training_gaps.is_empty() {
        "  (none identified)".to_string()
    } else {
        prospect
            .training_gaps
            .iter()
            .map(|g| format!("  - {}", g))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "COMPANY ANALYSIS REPORT - {name}\n\
         ================================\n\
         Website: {website}\n\
         Estimated Size: {size} (score {score})\n\
         Services: {services}\n\
         Training Priority: {priority}\n\
         Training Gaps:\n{gaps}\n\
         Contact: {person} | Phone: {phone} | Email: {email}\n\
         Deal Potential: ${min}-${max} | Annual Value: ${annual}\n\
         Opportunity Level: {level}\n",
        name = prospect.company_name,
        website = prospect.website,
        size = prospect.size_bucket.label(),
        score = analysis.size_score,
        services = services,
        priority = prospect.training_priority,
        gaps = gaps,
        person = prospect.contact_person.as_deref().unwrap_or("Need further research"),
        phone = prospect.phone.as_deref().unwrap_or("Not found"),
        email = prospect.email.as_deref().unwrap_or("Not found"),
        min = prospect.deal_min,
        max = prospect.deal_max,
        annual = prospect.annual_value,
        level = prospect.opportunity_level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_without_training_mention_flags_gap() {
        let gaps = derive_training_gaps("we kill bugs");
        assert_eq!(gaps, vec!["No formal training mentioned".to_string()]);
    }

    #[test]
    fn all_four_gaps_detected() {
        let text = "careers open, quality service, fully licensed, no mention of the t-word";
        let gaps = derive_training_gaps(text);
        assert_eq!(gaps.len(), 4);
    }

    #[test]
    fn training_mention_clears_first_gap() {
        let gaps = derive_training_gaps("ongoing training for our techs");
        assert!(gaps.is_empty());
    }

    #[test]
    fn priority_thresholds() {
        assert_eq!(training_priority(0), "Low");
        assert_eq!(training_priority(1), "Medium");
        assert_eq!(training_priority(2), "Medium");
        assert_eq!(training_priority(3), "High");
    }

    #[test]
    fn opportunity_thresholds() {
        assert_eq!(opportunity_level(1), "Medium");
        assert_eq!(opportunity_level(2), "High");
    }

    #[test]
    fn deal_potential_scales_with_bucket() {
        assert_eq!(deal_potential(SizeBucket::Small), (3_600, 7_200));
        assert_eq!(deal_potential(SizeBucket::Medium), (11_200, 16_800));
        assert_eq!(deal_potential(SizeBucket::Large), (15_000, 21_600));
    }

    #[test]
    fn annual_value_per_bucket() {
        assert_eq!(annual_value(SizeBucket::Small), 8_000);
        assert_eq!(annual_value(SizeBucket::Large), 25_000);
    }

    #[test]
    fn decision_maker_prefers_owner() {
        let (person, title) = detect_decision_maker("our owner and manager are on site");
        assert_eq!(person.as_deref(), Some("Owner"));
        assert_eq!(title.as_deref(), Some("Owner"));
    }

    #[test]
    fn no_decision_maker_found() {
        assert_eq!(detect_decision_maker("bug free since 1993"), (None, None));
    }
}
