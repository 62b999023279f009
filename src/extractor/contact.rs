// src/extractor/contact.rs
use crate::extractor::types::{ContactFields, EmailCandidate, EmailKind, PageSnapshot};
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;

/// Service vocabulary checked against page text. Matches are returned
/// title-cased, absent keywords are simply omitted.
const SERVICE_KEYWORDS: [&str; 11] = [
    "residential",
    "commercial",
    "termite",
    "rodent",
    "ant",
    "bed bug",
    "mosquito",
    "wildlife",
    "inspection",
    "treatment",
    "extermination",
];

/// Local parts that name a department or role rather than a person.
const GENERIC_LOCAL_PARTS: [&str; 17] = [
    "info@",
    "contact@",
    "hello@",
    "support@",
    "service@",
    "customerservice@",
    "sales@",
    "admin@",
    "webmaster@",
    "noreply@",
    "donotreply@",
    "help@",
    "team@",
    "office@",
    "general@",
    "mail@",
    "email@",
];

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    address_regex: Regex,
    personal_local_regex: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .unwrap(),
            phone_regex: Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
            address_regex: Regex::new(
                r"\d+\s+[A-Za-z][A-Za-z .]*?\s(?:St|Street|Ave|Avenue|Rd|Road|Blvd|Boulevard|Dr|Drive)\b",
            )
            .unwrap(),
            // first.last@, first@, first123@, firstlast@
            personal_local_regex: Regex::new(r"^[a-z]+(\.[a-z]+)?[0-9]*@").unwrap(),
        }
    }

    pub fn extract(&self, page: &PageSnapshot) -> ContactFields {
        let best_email = self.best_email(&page.html, &page.clean_text);
        let fields = ContactFields {
            phone: self.extract_phone(&page.clean_text),
            email: best_email.as_ref().map(|c| c.value.clone()),
            email_kind: best_email.map(|c| c.kind),
            address: self.extract_address(&page.clean_text),
            services: self.extract_services(&page.clean_text),
        };

        debug!(
            "Extracted from {}: phone={:?} email={:?} address={:?} services={}",
            page.url,
            fields.phone,
            fields.email,
            fields.address,
            fields.services.len()
        );
        fields
    }

    /// All email addresses on the page: text matches plus mailto: links,
    /// deduplicated, classified, and scored by surrounding context.
    pub fn find_emails(&self, html: &str, text: &str) -> Vec<EmailCandidate> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for m in self.email_regex.find_iter(text) {
            let email = m.as_str().to_lowercase();
            if !seen.insert(email.clone()) {
                continue;
            }
            let context = context_window(text, m.start(), m.end(), 60);
            candidates.push(EmailCandidate {
                kind: self.classify_email(&email),
                value: email,
                position: m.start(),
                context_score: contact_context_score(&context),
            });
        }

        // mailto: links are explicit contact intent even when the address
        // never appears in the visible text
        let document = Html::parse_document(html);
        let link_selector = Selector::parse("a[href]").unwrap();
        for element in document.select(&link_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(rest) = href.strip_prefix("mailto:") {
                    let email = rest
                        .split('?')
                        .next()
                        .unwrap_or("")
                        .trim()
                        .to_lowercase();
                    if self.email_regex.is_match(&email) && seen.insert(email.clone()) {
                        candidates.push(EmailCandidate {
                            kind: self.classify_email(&email),
                            value: email,
                            position: text.len(),
                            context_score: 1,
                        });
                    }
                }
            }
        }

        candidates
    }

    /// Highest-ranked email on the page: personal-looking beats company,
    /// company beats generic, contact-context beats none, document order
    /// breaks ties.
    pub fn best_email(&self, html: &str, text: &str) -> Option<EmailCandidate> {
        let mut candidates = self.find_emails(html, text);
        candidates.sort_by(|a, b| {
            b.kind
                .rank()
                .cmp(&a.kind.rank())
                .then(b.context_score.cmp(&a.context_score))
                .then(a.position.cmp(&b.position))
        });
        candidates.into_iter().next()
    }

    /// Best North-American phone match. Candidates near call/phone wording
    /// win; with no context signal anywhere this is plain first-match.
    pub fn extract_phone(&self, text: &str) -> Option<String> {
        let mut best: Option<(u32, usize, String)> = None;

        for m in self.phone_regex.find_iter(text) {
            let context = context_window(text, m.start(), m.end(), 50).to_lowercase();
            let mut score = 0;
            for keyword in ["phone", "call", "tel", "contact"] {
                if context.contains(keyword) {
                    score += 1;
                }
            }

            let replace = match &best {
                None => true,
                Some((best_score, _, _)) => score > *best_score,
            };
            if replace {
                best = Some((score, m.start(), m.as_str().trim().to_string()));
            }
        }

        best.map(|(_, _, phone)| phone)
    }

    /// First street-address-looking match. No normalization.
    pub fn extract_address(&self, text: &str) -> Option<String> {
        self.address_regex
            .find(text)
            .map(|m| m.as_str().trim().to_string())
    }

    /// Heuristic label only; name-shaped local parts pass for personal even
    /// when they are not.
    pub fn classify_email(&self, email: &str) -> EmailKind {
        if GENERIC_LOCAL_PARTS
            .iter()
            .any(|prefix| email.starts_with(prefix))
        {
            return EmailKind::Generic;
        }

        if self.personal_local_regex.is_match(email) {
            EmailKind::Personal
        } else {
            EmailKind::Company
        }
    }

    pub fn extract_services(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        SERVICE_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| title_case(keyword))
            .collect()
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn contact_context_score(context: &str) -> u32 {
    let context = context.to_lowercase();
    let mut score = 0;
    for keyword in ["contact", "email us", "reach", "get in touch", "owner"] {
        if context.contains(keyword) {
            score += 1;
        }
    }
    score
}

/// Slice of text around a match, clamped to char boundaries.
fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut from = start.saturating_sub(radius);
    while from > 0 && !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + radius).min(text.len());
    while to < text.len() && !text.is_char_boundary(to) {
        to += 1;
    }
    text[from..to].to_string()
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ContactExtractor {
        ContactExtractor::new()
    }

    #[test]
    fn finds_parenthesized_phone() {
        let phone = extractor().extract_phone("Call us at (407) 555-0123 today");
        assert_eq!(phone.as_deref(), Some("(407) 555-0123"));
    }

    #[test]
    fn finds_dashed_phone() {
        let phone = extractor().extract_phone("Office: 407-555-0199.");
        assert_eq!(phone.as_deref(), Some("407-555-0199"));
    }

    #[test]
    fn no_phone_yields_none() {
        assert_eq!(extractor().extract_phone("family owned since 1987"), None);
    }

    #[test]
    fn phone_near_call_wording_beats_earlier_match() {
        let text = "Fax: 407-555-0001 for written estimates and invoices only, checked weekly. \
                    Call us anytime at 407-555-0002 for service.";
        let phone = extractor().extract_phone(text);
        assert_eq!(phone.as_deref(), Some("407-555-0002"));
    }

    #[test]
    fn personal_email_preferred_over_generic() {
        let text = "Email info@acmepest.com or jane.doe@acmepest.com";
        let best = extractor().best_email("", text).unwrap();
        assert_eq!(best.value, "jane.doe@acmepest.com");
        assert_eq!(best.kind, EmailKind::Personal);
    }

    #[test]
    fn generic_email_still_returned_when_alone() {
        let best = extractor()
            .best_email("", "Questions? info@acmepest.com")
            .unwrap();
        assert_eq!(best.value, "info@acmepest.com");
        assert_eq!(best.kind, EmailKind::Generic);
    }

    #[test]
    fn mailto_links_are_collected() {
        let html = r#"<html><body><a href="mailto:mike@bugstoppers.com?subject=hi">Email Mike</a></body></html>"#;
        let best = extractor().best_email(html, "no addresses here").unwrap();
        assert_eq!(best.value, "mike@bugstoppers.com");
    }

    #[test]
    fn classify_recognizes_personal_patterns() {
        let e = extractor();
        assert_eq!(e.classify_email("jane.doe@x.com"), EmailKind::Personal);
        assert_eq!(e.classify_email("mike@x.com"), EmailKind::Personal);
        assert_eq!(e.classify_email("mike42@x.com"), EmailKind::Personal);
        assert_eq!(e.classify_email("sales@x.com"), EmailKind::Generic);
        assert_eq!(e.classify_email("front_desk@x.com"), EmailKind::Company);
    }

    #[test]
    fn first_address_match_wins() {
        let text = "Visit 123 Orange Ave or our branch at 456 Pine St";
        let address = extractor().extract_address(text);
        assert_eq!(address.as_deref(), Some("123 Orange Ave"));
    }

    #[test]
    fn services_are_title_cased_subset() {
        let text = "We offer residential pest control, termite inspection and bed bug removal";
        let services = extractor().extract_services(text);
        assert!(services.contains(&"Residential".to_string()));
        assert!(services.contains(&"Termite".to_string()));
        assert!(services.contains(&"Bed Bug".to_string()));
        assert!(services.contains(&"Inspection".to_string()));
        assert!(!services.contains(&"Mosquito".to_string()));
    }

    #[test]
    fn empty_page_extracts_nothing() {
        let page = PageSnapshot::parse("https://example.com", "<html><body></body></html>");
        let fields = extractor().extract(&page);
        assert!(fields.is_empty());
    }

    #[test]
    fn snapshot_counts_images() {
        let html = "<html><body><img src='a'><img src='b'><p>hi</p></body></html>";
        let page = PageSnapshot::parse("https://example.com", html);
        assert_eq!(page.image_count, 2);
        assert_eq!(page.clean_text, "hi");
    }
}
