use ahash::AHashMap;
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

use crate::encoder::{EncoderConfig, EncoderDiagnostics, FeatureEncoder};
use crate::error::{Error, Result};
use crate::record::{LifestyleProfile, UserRecord};
use crate::vector::FeatureVector;

/// One encoded member of a matching pool
#[derive(Debug, Clone)]
pub struct CandidateEntry {
    pub id: String,
    pub full_name: String,
    pub vector: FeatureVector,
    pub profile: LifestyleProfile,
}

/// Immutable snapshot of a built pool
///
/// Entries keep build order; `by_id` maps identities to slots. Replaced
/// wholesale on rebuild, never mutated in place.
#[derive(Debug)]
pub(crate) struct PoolState {
    pub(crate) entries: Vec<CandidateEntry>,
    pub(crate) by_id: AHashMap<String, usize>,
}

/// Outcome of a pool build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    /// Candidates in the new pool
    pub loaded: usize,
    /// Records that failed to encode and were dropped
    pub skipped: usize,
}

/// Point-in-time pool statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub ready: bool,
    pub candidates: usize,
    pub dimensions: usize,
}

/// A pool of encoded roommate candidates
///
/// Owns the encoder that all members and queries share. Rebuilds assemble
/// a fresh snapshot aside and swap it in with a single assignment, so
/// queries always see either the previous complete pool or the new one.
pub struct MatchingPool {
    encoder: FeatureEncoder,
    state: RwLock<Option<Arc<PoolState>>>,
}

impl MatchingPool {
    #[must_use]
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            encoder: FeatureEncoder::new(config),
            state: RwLock::new(None),
        }
    }

    #[inline]
    #[must_use]
    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    /// Encode records and replace the previous pool
    ///
    /// Records that fail to encode are skipped and counted, never fatal.
    /// A record reusing an earlier identity replaces that entry in place
    /// and keeps its position.
    pub fn build(&self, records: &[UserRecord]) -> BuildSummary {
        let encoded: Vec<Option<(FeatureVector, LifestyleProfile)>> = records
            .par_iter()
            .map(|record| {
                let profile = self.encoder.extract(record).ok()?;
                let vector = self.encoder.vectorize(&profile);
                Some((vector, profile))
            })
            .collect();

        let mut entries: Vec<CandidateEntry> = Vec::with_capacity(records.len());
        let mut by_id: AHashMap<String, usize> = AHashMap::with_capacity(records.len());
        let mut skipped = 0usize;

        for (record, encoded) in records.iter().zip(encoded) {
            let Some((vector, profile)) = encoded else {
                skipped += 1;
                continue;
            };
            let entry = CandidateEntry {
                id: record.id.clone(),
                full_name: record.full_name.clone(),
                vector,
                profile,
            };
            match by_id.get(&record.id) {
                Some(&slot) => entries[slot] = entry,
                None => {
                    by_id.insert(record.id.clone(), entries.len());
                    entries.push(entry);
                }
            }
        }

        let loaded = entries.len();
        *self.state.write() = Some(Arc::new(PoolState { entries, by_id }));

        BuildSummary { loaded, skipped }
    }

    /// True once a build has completed
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.read().is_some()
    }

    /// Number of candidates in the current pool, 0 before the first build
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().as_ref().map_or(0, |s| s.entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> PoolStats {
        let state = self.state.read();
        PoolStats {
            ready: state.is_some(),
            candidates: state.as_ref().map_or(0, |s| s.entries.len()),
            dimensions: self.encoder.dimensions(),
        }
    }

    /// Fallback counts from the shared encoder
    #[must_use]
    pub fn diagnostics(&self) -> EncoderDiagnostics {
        self.encoder.diagnostics()
    }

    /// Get one candidate by identity
    #[must_use]
    pub fn get(&self, id: &str) -> Option<CandidateEntry> {
        let state = self.state.read();
        let state = state.as_ref()?;
        let slot = *state.by_id.get(id)?;
        Some(state.entries[slot].clone())
    }

    /// Clone the current snapshot for lock-free scoring
    pub(crate) fn snapshot(&self) -> Result<Arc<PoolState>> {
        self.state.read().clone().ok_or(Error::PoolNotReady)
    }
}
