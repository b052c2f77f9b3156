//! Top-K ranking over a built pool
//!
//! Scores every candidate against a query vector, converts similarities
//! to integer percentages and returns the best `limit` in descending
//! order. Ties keep their pool build order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pool::{MatchingPool, PoolState};
use crate::record::{LifestyleProfile, UserRecord};
use crate::vector::FeatureVector;

/// A ranked roommate suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: String,
    pub full_name: String,
    /// round(similarity x 100), clamped to 0..=100
    pub match_percentage: u8,
    /// The candidate's scored attributes, for explainability
    pub features: LifestyleProfile,
}

impl MatchingPool {
    /// Rank pool candidates against an external query record
    ///
    /// `exclude` drops one identity from the results, typically the
    /// person the query belongs to. A non-positive `limit` is treated
    /// as 1.
    pub fn find_matches(
        &self,
        query: &UserRecord,
        exclude: Option<&str>,
        limit: usize,
    ) -> Result<Vec<MatchResult>> {
        let state = self.snapshot()?;
        let vector = self.encoder().encode(query)?;
        rank(&state, &vector, exclude, limit)
    }

    /// Rank pool candidates against one of their own
    ///
    /// The query member is looked up by identity and always excluded
    /// from its own results.
    pub fn find_matches_for(&self, id: &str, limit: usize) -> Result<Vec<MatchResult>> {
        let state = self.snapshot()?;
        let slot = *state
            .by_id
            .get(id)
            .ok_or_else(|| Error::CandidateNotFound(id.to_string()))?;
        let vector = state.entries[slot].vector.clone();
        rank(&state, &vector, Some(id), limit)
    }
}

fn rank(
    state: &PoolState,
    query: &FeatureVector,
    exclude: Option<&str>,
    limit: usize,
) -> Result<Vec<MatchResult>> {
    let limit = limit.max(1);

    let mut results = Vec::with_capacity(state.entries.len());
    for entry in &state.entries {
        if exclude == Some(entry.id.as_str()) {
            continue;
        }
        let similarity = query.cosine_similarity(&entry.vector)?;
        results.push(MatchResult {
            id: entry.id.clone(),
            full_name: entry.full_name.clone(),
            match_percentage: to_percentage(similarity),
            features: entry.profile.clone(),
        });
    }

    // Stable sort: equal percentages keep build order
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    results.truncate(limit);
    Ok(results)
}

#[inline]
fn to_percentage(similarity: f32) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}
