// src/prospects.rs
//
// Canonical seed list. Every script used to carry its own hard-coded company
// literals; this module is now the single source, loaded from prospects.yml
// and validated before anything downstream sees it.
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedCompany {
    pub name: String,
    pub website: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SeedList {
    pub companies: Vec<SeedCompany>,
}

pub async fn load_seeds(path: &str) -> crate::models::Result<Vec<SeedCompany>> {
    let content = tokio::fs::read_to_string(path).await?;
    let list: SeedList = serde_yaml::from_str(&content)?;

    let mut valid = Vec::new();
    for seed in list.companies {
        match validate_seed(&seed) {
            Ok(()) => valid.push(seed),
            Err(reason) => warn!("Skipping seed '{}': {}", seed.name, reason),
        }
    }

    if valid.is_empty() {
        return Err(format!("no valid seed companies in {}", path).into());
    }
    Ok(valid)
}

pub fn validate_seed(seed: &SeedCompany) -> std::result::Result<(), String> {
    if seed.name.trim().is_empty() {
        return Err("empty company name".to_string());
    }

    match Url::parse(&seed.website) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if url.host_str().is_none() {
                return Err(format!("website has no host: {}", seed.website));
            }
        }
        Ok(url) => return Err(format!("unsupported scheme '{}'", url.scheme())),
        Err(e) => return Err(format!("invalid website URL: {}", e)),
    }

    if let Some(phone) = &seed.phone {
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 10 {
            return Err(format!("implausible phone number: {}", phone));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> SeedCompany {
        SeedCompany {
            name: "Acme Pest Control".to_string(),
            website: "https://acmepest.com".to_string(),
            location: Some("Orlando, FL".to_string()),
            phone: Some("(407) 555-0123".to_string()),
            address: None,
            notes: None,
        }
    }

    #[test]
    fn well_formed_seed_passes() {
        assert!(validate_seed(&seed()).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut s = seed();
        s.name = "  ".to_string();
        assert!(validate_seed(&s).is_err());
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let mut s = seed();
        s.website = "ftp://acmepest.com".to_string();
        assert!(validate_seed(&s).is_err());
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut s = seed();
        s.phone = Some("555-01".to_string());
        assert!(validate_seed(&s).is_err());
    }

    #[test]
    fn missing_phone_is_fine() {
        let mut s = seed();
        s.phone = None;
        assert!(validate_seed(&s).is_ok());
    }
}
