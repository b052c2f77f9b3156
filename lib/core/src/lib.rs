//! # roomatch Core
//!
//! Core library for the roomatch compatibility engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`UserRecord`] - A questionnaire record as the upstream store supplies it
//! - [`FeatureEncoder`] - Turns records into normalized feature vectors
//! - [`FeatureVector`] - Fixed-order vector with cosine similarity
//! - [`MatchingPool`] - Atomic-swap candidate pool shared across readers
//! - [`MatchResult`] - A ranked suggestion with its feature breakdown
//!
//! ## Example
//!
//! ```rust
//! use roomatch_core::{EncoderConfig, MatchingPool, UserRecord};
//!
//! let records = vec![
//!     UserRecord {
//!         id: "a".to_string(),
//!         full_name: "Asha".to_string(),
//!         age: Some(21),
//!         budget_range: Some("8k-12k".to_string()),
//!         sleep_schedule: Some("late-sleeper".to_string()),
//!         smoking: Some("no".to_string()),
//!         drinking: Some("no".to_string()),
//!         cleanliness_level: Some("medium".to_string()),
//!         study_style: Some("group".to_string()),
//!         introvert_extrovert: Some(4),
//!     },
//!     UserRecord {
//!         id: "b".to_string(),
//!         full_name: "Badal".to_string(),
//!         age: Some(22),
//!         budget_range: Some("8k-12k".to_string()),
//!         sleep_schedule: Some("late-sleeper".to_string()),
//!         smoking: Some("no".to_string()),
//!         drinking: Some("no".to_string()),
//!         cleanliness_level: Some("medium".to_string()),
//!         study_style: Some("mixed".to_string()),
//!         introvert_extrovert: Some(4),
//!     },
//! ];
//!
//! let pool = MatchingPool::new(EncoderConfig::default());
//! let summary = pool.build(&records);
//! assert_eq!(summary.loaded, 2);
//!
//! // Rank everyone against pool member "a"; "a" itself is excluded
//! let matches = pool.find_matches_for("a", 5).unwrap();
//! assert_eq!(matches[0].id, "b");
//! ```

pub mod encoder;
pub mod error;
pub mod matcher;
pub mod pool;
pub mod record;
pub mod vector;

pub use encoder::{EncoderConfig, EncoderDiagnostics, FeatureEncoder, StudyStyleEncoding};
pub use error::{Error, Result};
pub use matcher::MatchResult;
pub use pool::{BuildSummary, CandidateEntry, MatchingPool, PoolStats};
pub use record::{LifestyleProfile, UserRecord};
pub use vector::FeatureVector;
