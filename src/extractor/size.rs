// src/extractor/size.rs
use serde::{Deserialize, Serialize};

/// Employee-count bucket estimated from page signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
}

impl SizeBucket {
    pub fn label(&self) -> &'static str {
        match self {
            SizeBucket::Small => "Small (<10 employees)",
            SizeBucket::Medium => "Medium (10-20 employees)",
            SizeBucket::Large => "Large (20+ employees)",
        }
    }

    /// Rough employee range the bucket stands for, used when filling the
    /// employee-count column.
    pub fn employee_range(&self) -> (u32, u32) {
        match self {
            SizeBucket::Small => (3, 10),
            SizeBucket::Medium => (11, 25),
            SizeBucket::Large => (26, 50),
        }
    }
}

impl std::fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeBucket::Small => write!(f, "Small"),
            SizeBucket::Medium => write!(f, "Medium"),
            SizeBucket::Large => write!(f, "Large"),
        }
    }
}

/// Weights and thresholds for the size heuristic, kept as config data so
/// they can be tuned without touching the scoring code.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SizeHeuristics {
    pub team_weight: u32,
    pub locations_weight: u32,
    pub fleet_weight: u32,
    pub image_weight: u32,

    // An image count strictly above this adds image_weight
    pub image_threshold: usize,

    // Bucket cutoffs: score >= large_min is Large, >= medium_min is Medium
    pub large_min: u32,
    pub medium_min: u32,
}

impl Default for SizeHeuristics {
    fn default() -> Self {
        Self {
            team_weight: 1,
            locations_weight: 2,
            fleet_weight: 1,
            image_weight: 1,
            image_threshold: 10,
            large_min: 4,
            medium_min: 2,
        }
    }
}

/// Crude linear keyword heuristic for company size. Deterministic and
/// stateless: the same text and image count always produce the same bucket.
pub struct SizeScorer {
    heuristics: SizeHeuristics,
}

impl SizeScorer {
    pub fn new(heuristics: SizeHeuristics) -> Self {
        Self { heuristics }
    }

    pub fn score(&self, text: &str, image_count: usize) -> u32 {
        let text = text.to_lowercase();
        let mut score = 0;

        if text.contains("team") || text.contains("staff") {
            score += self.heuristics.team_weight;
        }
        if text.contains("locations") || text.contains("offices") {
            score += self.heuristics.locations_weight;
        }
        if text.contains("fleet") || text.contains("trucks") {
            score += self.heuristics.fleet_weight;
        }
        if image_count > self.heuristics.image_threshold {
            score += self.heuristics.image_weight;
        }

        score
    }

    pub fn bucket(&self, score: u32) -> SizeBucket {
        if score >= self.heuristics.large_min {
            SizeBucket::Large
        } else if score >= self.heuristics.medium_min {
            SizeBucket::Medium
        } else {
            SizeBucket::Small
        }
    }

    pub fn assess(&self, text: &str, image_count: usize) -> (u32, SizeBucket) {
        let score = self.score(text, image_count);
        (score, self.bucket(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SizeScorer {
        SizeScorer::new(SizeHeuristics::default())
    }

    #[test]
    fn large_company_page_scores_five() {
        let text = "Our team of 20 technicians operates 3 locations with a fleet of trucks";
        let (score, bucket) = scorer().assess(text, 12);
        assert_eq!(score, 5);
        assert_eq!(bucket, SizeBucket::Large);
    }

    #[test]
    fn empty_page_is_small() {
        let (score, bucket) = scorer().assess("", 0);
        assert_eq!(score, 0);
        assert_eq!(bucket, SizeBucket::Small);
    }

    #[test]
    fn image_threshold_contributes_exactly_one_point() {
        let text = "family owned and operated";
        let s = scorer();
        assert_eq!(s.score(text, 5), 0);
        assert_eq!(s.score(text, 11), 1);
    }

    #[test]
    fn bucket_boundaries() {
        let s = scorer();
        assert_eq!(s.bucket(0), SizeBucket::Small);
        assert_eq!(s.bucket(1), SizeBucket::Small);
        assert_eq!(s.bucket(2), SizeBucket::Medium);
        assert_eq!(s.bucket(3), SizeBucket::Medium);
        assert_eq!(s.bucket(4), SizeBucket::Large);
        assert_eq!(s.bucket(5), SizeBucket::Large);
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "our staff covers two offices";
        let s = scorer();
        assert_eq!(s.assess(text, 3), s.assess(text, 3));
    }

    #[test]
    fn custom_weights_are_honored() {
        let s = SizeScorer::new(SizeHeuristics {
            team_weight: 10,
            large_min: 10,
            ..SizeHeuristics::default()
        });
        let (score, bucket) = s.assess("meet the team", 0);
        assert_eq!(score, 10);
        assert_eq!(bucket, SizeBucket::Large);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let s = scorer();
        assert_eq!(s.score("OUR TEAM AND STAFF", 0), 1);
    }
}
