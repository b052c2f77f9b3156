//! # roomatch
//!
//! A roommate compatibility scoring engine.
//!
//! Lifestyle questionnaire records are encoded into fixed-order
//! normalized feature vectors; cosine similarity over those vectors
//! ranks candidate roommates; the top-K come back as integer match
//! percentages with per-candidate feature breakdowns.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install roomatch
//! roomatch demo
//! roomatch match --records users.json --user u42 --limit 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use roomatch::prelude::*;
//!
//! // Load questionnaire records from a JSON array file
//! let source = JsonFileSource::new("users.json");
//! let records = source.load_all().unwrap();
//!
//! // Build a candidate pool; invalid records are skipped, not fatal
//! let pool = MatchingPool::new(EncoderConfig::default());
//! let summary = pool.build(&records);
//! println!("{} candidates, {} skipped", summary.loaded, summary.skipped);
//!
//! // Rank everyone against one pool member
//! let matches = pool.find_matches_for("u42", 5).unwrap();
//! for m in matches {
//!     println!("{} - {}%", m.full_name, m.match_percentage);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! roomatch is composed of two crates:
//!
//! - [`roomatch-core`](https://docs.rs/roomatch-core) - Feature encoding, cosine similarity, candidate pools, top-K matching
//! - [`roomatch-data`](https://docs.rs/roomatch-data) - Record sources, the lifestyle CSV adapter, sample records
//!
//! ## Features
//!
//! - **Deterministic Encoding**: Same record, same vector, every time
//! - **Atomic Rebuilds**: Queries see the old pool or the new one, never a mix
//! - **Explainable Results**: Every match carries its feature breakdown
//! - **Tolerant Ingestion**: Bad records are skipped and counted, not fatal

// Re-export core types
pub use roomatch_core::{
    BuildSummary, CandidateEntry, EncoderConfig, EncoderDiagnostics, Error, FeatureEncoder,
    FeatureVector, LifestyleProfile, MatchResult, MatchingPool, PoolStats, Result,
    StudyStyleEncoding, UserRecord,
};

// Re-export data sources
pub use roomatch_data::{
    sample_records, JsonFileSource, LifestyleDataset, LifestyleRow, RecordSource, SourceError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        sample_records, BuildSummary, CandidateEntry, EncoderConfig, EncoderDiagnostics, Error,
        FeatureEncoder, FeatureVector, JsonFileSource, LifestyleDataset, LifestyleProfile,
        LifestyleRow, MatchResult, MatchingPool, PoolStats, RecordSource, Result, SourceError,
        StudyStyleEncoding, UserRecord,
    };
}
