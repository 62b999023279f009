// src/extractor/mod.rs
pub mod contact;
pub mod size;
pub mod types;

pub use contact::ContactExtractor;
pub use size::{SizeBucket, SizeScorer};
pub use types::{ContactFields, PageSnapshot, ResearchStatus};
