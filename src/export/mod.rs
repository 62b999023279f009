// src/export/mod.rs
use crate::extractor::types::EmailKind;
use crate::models::Prospect;
use std::collections::HashMap;
use std::io::Write;
use tracing::info;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Fixed sheet schema. Order matters: downstream scripts address columns by
/// position.
const COLUMNS: [&str; 24] = [
    "company_name",
    "website",
    "phone",
    "email",
    "address",
    "contact_person",
    "title",
    "company_size",
    "employee_count",
    "services",
    "training_priority",
    "training_gaps",
    "deal_potential_min",
    "deal_potential_max",
    "annual_value",
    "opportunity_level",
    "pain_points",
    "campaign_angle",
    "next_action",
    "follow_up_date",
    "notes",
    "data_source",
    "verification_status",
    "last_updated",
];

#[derive(Debug)]
pub struct ExportStats {
    pub total: usize,
    pub by_bucket: HashMap<String, usize>,
    pub by_priority: HashMap<String, usize>,
    pub pipeline_value: u64,
}

pub struct ProspectExporter;

impl ProspectExporter {
    pub fn new() -> Self {
        Self
    }

    pub async fn export_to_csv(&self, prospects: &[Prospect], filename: &str) -> Result<()> {
        if let Some(parent) = std::path::Path::new(filename).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::File::create(filename)?;
        writeln!(file, "{}", COLUMNS.join(","))?;

        for prospect in prospects {
            let row = prospect_row(prospect)
                .iter()
                .map(|field| csv_field(field))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(file, "{}", row)?;
        }

        info!("Exported {} prospect(s) to {}", prospects.len(), filename);
        Ok(())
    }

    /// JSON dump of the full records, for scripts that want more than the
    /// flat sheet columns.
    pub async fn export_to_json(&self, prospects: &[Prospect], filename: &str) -> Result<()> {
        if let Some(parent) = std::path::Path::new(filename).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(prospects)?;
        tokio::fs::write(filename, json).await?;

        info!("Exported {} prospect(s) to {}", prospects.len(), filename);
        Ok(())
    }

    pub fn generate_stats(&self, prospects: &[Prospect]) -> ExportStats {
        let mut by_bucket: HashMap<String, usize> = HashMap::new();
        let mut by_priority: HashMap<String, usize> = HashMap::new();
        let mut pipeline_value: u64 = 0;

        for prospect in prospects {
            *by_bucket.entry(prospect.size_bucket.to_string()).or_insert(0) += 1;
            *by_priority
                .entry(prospect.training_priority.clone())
                .or_insert(0) += 1;
            pipeline_value += prospect.annual_value as u64;
        }

        ExportStats {
            total: prospects.len(),
            by_bucket,
            by_priority,
            pipeline_value,
        }
    }
}

impl Default for ProspectExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// One sheet row. Unknown fields become the same placeholder text the old
/// sheets used, so partially-researched rows are recognizable at a glance.
pub fn prospect_row(p: &Prospect) -> Vec<String> {
    let verification = match p.email_kind {
        Some(EmailKind::Personal) => "Personal email",
        Some(EmailKind::Company) => "Company email",
        Some(EmailKind::Generic) => "Generic email",
        None => "Need further research",
    };

    vec![
        p.company_name.clone(),
        p.website.clone(),
        p.phone.clone().unwrap_or_else(|| "Not found".to_string()),
        p.email.clone().unwrap_or_else(|| "Not found".to_string()),
        p.address.clone().unwrap_or_else(|| "Not found".to_string()),
        p.contact_person
            .clone()
            .unwrap_or_else(|| "Need further research".to_string()),
        p.contact_title.clone().unwrap_or_default(),
        p.size_bucket.to_string(),
        p.employee_estimate.to_string(),
        p.services.join("; "),
        p.training_priority.clone(),
        p.training_gaps.join("; "),
        p.deal_min.to_string(),
        p.deal_max.to_string(),
        p.annual_value.to_string(),
        p.opportunity_level.clone(),
        p.pain_points.join("; "),
        p.campaign_angle.clone(),
        p.next_action.clone(),
        p.follow_up_date.clone().unwrap_or_default(),
        p.notes.clone().unwrap_or_default(),
        p.data_source.clone(),
        verification.to_string(),
        p.last_updated.clone(),
    ]
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::SizeBucket;

    fn prospect() -> Prospect {
        Prospect {
            id: "test-id".to_string(),
            company_name: "Acme Pest Control".to_string(),
            website: "https://acmepest.com".to_string(),
            phone: Some("(407) 555-0123".to_string()),
            email: None,
            email_kind: None,
            address: None,
            contact_person: None,
            contact_title: None,
            size_bucket: SizeBucket::Medium,
            employee_estimate: 15,
            services: vec!["Residential".to_string(), "Termite".to_string()],
            training_priority: "High".to_string(),
            training_gaps: vec!["Compliance requirements".to_string()],
            deal_min: 11_200,
            deal_max: 16_800,
            annual_value: 15_000,
            opportunity_level: "High".to_string(),
            pain_points: vec!["scaling".to_string()],
            campaign_angle: "Flexible training, no contracts".to_string(),
            next_action: "Send intro email".to_string(),
            follow_up_date: None,
            notes: None,
            data_source: "Website Scraping".to_string(),
            last_updated: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn row_always_has_24_columns() {
        assert_eq!(prospect_row(&prospect()).len(), COLUMNS.len());
        assert_eq!(COLUMNS.len(), 24);
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let row = prospect_row(&prospect());
        assert_eq!(row[3], "Not found"); // email
        assert_eq!(row[4], "Not found"); // address
        assert_eq!(row[5], "Need further research"); // contact person
        assert_eq!(row[22], "Need further research"); // verification status
    }

    #[test]
    fn comma_bearing_fields_are_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn stats_aggregate_pipeline_value() {
        let exporter = ProspectExporter::new();
        let stats = exporter.generate_stats(&[prospect(), prospect()]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.pipeline_value, 30_000);
        assert_eq!(stats.by_bucket.get("Medium"), Some(&2));
        assert_eq!(stats.by_priority.get("High"), Some(&2));
    }
}
