use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::record::{LifestyleProfile, UserRecord};
use crate::vector::FeatureVector;

/// Age range the questionnaire targets. Values outside are clamped.
const AGE_MIN: f32 = 16.0;
const AGE_MAX: f32 = 30.0;

/// How the study style attribute is embedded in the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyStyleEncoding {
    /// One dimension with quiet < group < mixed ranks
    Ordinal,
    /// Three binary dimensions, one per style
    OneHot,
}

impl Default for StudyStyleEncoding {
    fn default() -> Self {
        StudyStyleEncoding::Ordinal
    }
}

/// Configuration for a feature encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    pub study_style: StudyStyleEncoding,
}

impl EncoderConfig {
    /// Length of the vectors produced under this configuration
    #[must_use]
    pub fn dimensions(&self) -> usize {
        match self.study_style {
            StudyStyleEncoding::Ordinal => 8,
            StudyStyleEncoding::OneHot => 10,
        }
    }
}

/// Snapshot of the mid-range fallbacks an encoder has applied
///
/// Unrecognized budget, cleanliness and study style values do not fail
/// encoding; they take the middle rank and bump these counters so noisy
/// feeds are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EncoderDiagnostics {
    pub budget_defaults: u64,
    pub cleanliness_defaults: u64,
    pub study_style_defaults: u64,
}

/// Turns questionnaire records into normalized feature vectors
///
/// Encoding is deterministic: the same record always produces the same
/// vector under the same configuration. Every dimension lands in [0, 1].
#[derive(Debug, Default)]
pub struct FeatureEncoder {
    config: EncoderConfig,
    budget_defaults: AtomicU64,
    cleanliness_defaults: AtomicU64,
    study_style_defaults: AtomicU64,
}

impl FeatureEncoder {
    #[must_use]
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            budget_defaults: AtomicU64::new(0),
            cleanliness_defaults: AtomicU64::new(0),
            study_style_defaults: AtomicU64::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.config.dimensions()
    }

    /// Validate that every scored attribute is present
    ///
    /// The error names the first missing attribute using the upstream
    /// camelCase field name.
    pub fn extract(&self, record: &UserRecord) -> Result<LifestyleProfile> {
        Ok(LifestyleProfile {
            age: record.age.ok_or(Error::MissingAttribute("age"))?,
            budget_range: record
                .budget_range
                .clone()
                .ok_or(Error::MissingAttribute("budgetRange"))?,
            sleep_schedule: record
                .sleep_schedule
                .clone()
                .ok_or(Error::MissingAttribute("sleepSchedule"))?,
            smoking: record
                .smoking
                .clone()
                .ok_or(Error::MissingAttribute("smoking"))?,
            drinking: record
                .drinking
                .clone()
                .ok_or(Error::MissingAttribute("drinking"))?,
            cleanliness_level: record
                .cleanliness_level
                .clone()
                .ok_or(Error::MissingAttribute("cleanlinessLevel"))?,
            study_style: record
                .study_style
                .clone()
                .ok_or(Error::MissingAttribute("studyStyle"))?,
            introvert_extrovert: record
                .introvert_extrovert
                .ok_or(Error::MissingAttribute("introvertExtrovert"))?,
        })
    }

    /// Encode a questionnaire record into a normalized feature vector
    pub fn encode(&self, record: &UserRecord) -> Result<FeatureVector> {
        let profile = self.extract(record)?;
        Ok(self.vectorize(&profile))
    }

    /// Encode an already validated profile
    ///
    /// Dimension order: age, budget, sleep schedule, smoking, drinking,
    /// cleanliness, study style, introversion.
    #[must_use]
    pub fn vectorize(&self, profile: &LifestyleProfile) -> FeatureVector {
        let mut data = Vec::with_capacity(self.dimensions());

        data.push(normalize_age(profile.age));
        data.push(self.budget_rank(&profile.budget_range) / 4.0);
        data.push(if profile.sleep_schedule == "early-sleeper" {
            1.0
        } else {
            0.0
        });
        data.push(if profile.smoking == "yes" { 1.0 } else { 0.0 });
        data.push(if profile.drinking == "yes" { 1.0 } else { 0.0 });
        data.push(self.cleanliness_rank(&profile.cleanliness_level) / 3.0);

        match self.config.study_style {
            StudyStyleEncoding::Ordinal => {
                data.push(self.study_style_rank(&profile.study_style) / 3.0);
            }
            StudyStyleEncoding::OneHot => {
                let style = profile.study_style.as_str();
                if !matches!(style, "quiet" | "group" | "mixed") {
                    self.study_style_defaults.fetch_add(1, Ordering::Relaxed);
                }
                data.push(if style == "quiet" { 1.0 } else { 0.0 });
                data.push(if style == "group" { 1.0 } else { 0.0 });
                data.push(if style == "mixed" { 1.0 } else { 0.0 });
            }
        }

        data.push(normalize_introversion(profile.introvert_extrovert));

        FeatureVector::new(data)
    }

    /// Cumulative fallback counts applied by this encoder so far
    #[must_use]
    pub fn diagnostics(&self) -> EncoderDiagnostics {
        EncoderDiagnostics {
            budget_defaults: self.budget_defaults.load(Ordering::Relaxed),
            cleanliness_defaults: self.cleanliness_defaults.load(Ordering::Relaxed),
            study_style_defaults: self.study_style_defaults.load(Ordering::Relaxed),
        }
    }

    fn budget_rank(&self, value: &str) -> f32 {
        match value {
            "3k-5k" => 1.0,
            "5k-8k" => 2.0,
            "8k-12k" => 3.0,
            "12k+" => 4.0,
            _ => {
                self.budget_defaults.fetch_add(1, Ordering::Relaxed);
                2.0
            }
        }
    }

    fn cleanliness_rank(&self, value: &str) -> f32 {
        match value {
            "low" => 1.0,
            "medium" => 2.0,
            "high" => 3.0,
            _ => {
                self.cleanliness_defaults.fetch_add(1, Ordering::Relaxed);
                2.0
            }
        }
    }

    fn study_style_rank(&self, value: &str) -> f32 {
        match value {
            "quiet" => 1.0,
            "group" => 2.0,
            "mixed" => 3.0,
            _ => {
                self.study_style_defaults.fetch_add(1, Ordering::Relaxed);
                2.0
            }
        }
    }
}

#[inline]
fn normalize_age(age: u32) -> f32 {
    ((age as f32 - AGE_MIN) / (AGE_MAX - AGE_MIN)).clamp(0.0, 1.0)
}

#[inline]
fn normalize_introversion(score: u8) -> f32 {
    ((f32::from(score) - 1.0) / 4.0).clamp(0.0, 1.0)
}
