// src/extractor/types.rs
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

/// Everything the extractors need from a fetched page, derived once so the
/// HTML is only parsed in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    pub domain: String,
    pub title: String,
    pub html: String,
    pub clean_text: String,
    pub image_count: usize,
    pub links_count: usize,
}

impl PageSnapshot {
    pub fn parse(url: &str, html: &str) -> Self {
        let document = Html::parse_document(html);

        let title_selector = Selector::parse("title").unwrap();
        let title = document
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let img_selector = Selector::parse("img").unwrap();
        let image_count = document.select(&img_selector).count();

        let link_selector = Selector::parse("a[href]").unwrap();
        let links_count = document.select(&link_selector).count();

        let body_selector = Selector::parse("body").unwrap();
        let clean_text = document
            .select(&body_selector)
            .next()
            .map(|body| {
                body.text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();

        let domain = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            url: url.to_string(),
            domain,
            title,
            html: html.to_string(),
            clean_text,
            image_count,
            links_count,
        }
    }
}

/// Best-effort contact fields pulled from one page. Misses are None/empty,
/// never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFields {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub email_kind: Option<EmailKind>,
    pub address: Option<String>,
    pub services: Vec<String>,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.services.is_empty()
    }
}

/// How an email's local part reads. A heuristic label, not a verified
/// classifier; generic addresses are still usable, just ranked last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailKind {
    /// Local part looks like a person's name (jane.doe@, mike@)
    Personal,
    /// Custom local part that is neither generic nor name-shaped
    Company,
    /// Department/role alias (info@, sales@, admin@)
    Generic,
}

impl EmailKind {
    // Ranking used when picking the best candidate
    pub fn rank(&self) -> u8 {
        match self {
            EmailKind::Personal => 2,
            EmailKind::Company => 1,
            EmailKind::Generic => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailCandidate {
    pub value: String,
    pub kind: EmailKind,
    pub position: usize,
    pub context_score: u32,
}

/// Outcome of researching one site. Lets callers tell "site unreachable"
/// apart from "site reachable but nothing found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResearchStatus {
    Complete,
    NoData,
    Unreachable { reason: String },
}

impl std::fmt::Display for ResearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResearchStatus::Complete => write!(f, "complete"),
            ResearchStatus::NoData => write!(f, "no data found"),
            ResearchStatus::Unreachable { reason } => write!(f, "unreachable: {}", reason),
        }
    }
}
