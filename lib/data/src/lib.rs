//! # roomatch Data
//!
//! Record sources and demo dataset adapters for the roomatch
//! compatibility engine.
//!
//! The engine in `roomatch-core` treats the record store as an opaque
//! collaborator. This crate supplies the seam ([`RecordSource`]), a
//! JSON-file implementation of it, the student lifestyle CSV adapter
//! used for calibration demos, and a handful of built-in sample
//! records.

pub mod error;
pub mod lifestyle;
pub mod samples;
pub mod source;

pub use error::{Result, SourceError};
pub use lifestyle::{LifestyleDataset, LifestyleRow};
pub use samples::sample_records;
pub use source::{JsonFileSource, RecordSource};
