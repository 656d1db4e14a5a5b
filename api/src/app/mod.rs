//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and text processing.

pub mod analysis_service;
pub mod stopwords;
pub mod word_frequency;

pub use analysis_service::{AnalysisService, CategoryAnalysis};
pub use stopwords::StopwordFilter;
pub use word_frequency::WordFrequencyAggregator;
