use serde::{Deserialize, Serialize};

/// A questionnaire record as supplied by the upstream document store
///
/// Field names follow the upstream camelCase document shape. Unknown
/// fields in the source documents are ignored. The eight scored
/// attributes are optional at this level; presence is validated by the
/// encoder, which names the first missing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque stable identity, unique per record
    pub id: String,
    /// Display label, never scored
    #[serde(default)]
    pub full_name: String,
    /// Expected 16-30, out-of-range values are clamped during encoding
    pub age: Option<u32>,
    /// One of `3k-5k`, `5k-8k`, `8k-12k`, `12k+`
    pub budget_range: Option<String>,
    /// `early-sleeper` or `late-sleeper`
    pub sleep_schedule: Option<String>,
    /// `yes` or `no`
    pub smoking: Option<String>,
    /// `yes` or `no`
    pub drinking: Option<String>,
    /// `low`, `medium` or `high`
    pub cleanliness_level: Option<String>,
    /// `quiet`, `group` or `mixed`
    pub study_style: Option<String>,
    /// 1 (most introverted) to 5 (most extroverted)
    pub introvert_extrovert: Option<u8>,
}

/// The scored attributes of one record after presence validation
///
/// Stored per pool candidate and echoed back in match results as the
/// feature breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleProfile {
    pub age: u32,
    pub budget_range: String,
    pub sleep_schedule: String,
    pub smoking: String,
    pub drinking: String,
    pub cleanliness_level: String,
    pub study_style: String,
    pub introvert_extrovert: u8,
}
