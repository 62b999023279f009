// src/discovery.rs
use crate::extractor::types::EmailCandidate;
use crate::extractor::{ContactExtractor, PageSnapshot};
use crate::fetcher::PageFetcher;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Guessed subpaths, probed in order. No sitemap parsing, no link following.
const PROBE_PATHS: [&str; 6] = [
    "/contact",
    "/about",
    "/team",
    "/staff",
    "/contact-us",
    "/about-us",
];

pub fn candidate_urls(base_url: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    PROBE_PATHS
        .iter()
        .map(|path| format!("{}{}", base, path))
        .collect()
}

/// Probe the common contact/about/team subpaths of a site and accumulate
/// every email found. Individual page failures (404, timeout, DNS) are
/// logged and skipped; the batch always runs to the end of the guess list.
pub async fn probe_contact_pages(
    fetcher: &PageFetcher,
    extractor: &ContactExtractor,
    base_url: &str,
) -> Vec<EmailCandidate> {
    let urls = candidate_urls(base_url);
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    info!("Probing {} contact-page candidates on {}", urls.len(), base_url);

    for (i, url) in urls.iter().enumerate() {
        match fetcher.fetch(url).await {
            Ok(html) => {
                let page = PageSnapshot::parse(url, &html);
                let emails = extractor.find_emails(&page.html, &page.clean_text);
                debug!("{}: {} email(s)", url, emails.len());
                for email in emails {
                    if seen.insert(email.value.clone()) {
                        found.push(email);
                    }
                }
            }
            Err(e) => {
                warn!("Skipping {}: {}", url, e);
            }
        }

        if i < urls.len() - 1 {
            fetcher.polite_pause().await;
        }
    }

    info!(
        "Contact-page probing of {} found {} unique email(s)",
        base_url,
        found.len()
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_urls_cover_fixed_guess_list() {
        let urls = candidate_urls("https://acmepest.com");
        assert_eq!(urls.len(), 6);
        assert_eq!(urls[0], "https://acmepest.com/contact");
        assert_eq!(urls[5], "https://acmepest.com/about-us");
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let urls = candidate_urls("https://acmepest.com/");
        assert_eq!(urls[0], "https://acmepest.com/contact");
    }
}
