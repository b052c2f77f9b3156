//! Student lifestyle dataset adapter
//!
//! Derives plausible questionnaire records from the public student
//! lifestyle CSV (daily study, sleep, social and activity hours, GPA,
//! stress level). The dataset has no budget or smoking answers, so GPA
//! and stress stand in for them. Calibration glue for demos; the engine
//! never sees this module.

use std::path::Path;

use roomatch_core::UserRecord;

use crate::error::Result;

/// One parsed row of the lifestyle CSV
#[derive(Debug, Clone, PartialEq)]
pub struct LifestyleRow {
    pub student_id: u32,
    pub study_hours: f32,
    pub extracurricular_hours: f32,
    pub sleep_hours: f32,
    pub social_hours: f32,
    pub physical_activity_hours: f32,
    pub gpa: f32,
    pub stress_level: String,
}

impl LifestyleRow {
    /// Derive a questionnaire record via proxy heuristics
    #[must_use]
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: format!("csv_{}", self.student_id),
            full_name: format!("Student {}", self.student_id),
            age: Some(18 + self.student_id % 7),
            budget_range: Some(self.budget_range().to_string()),
            sleep_schedule: Some(self.sleep_schedule().to_string()),
            smoking: Some(self.smoking().to_string()),
            drinking: Some(self.drinking().to_string()),
            cleanliness_level: Some(self.cleanliness_level().to_string()),
            study_style: Some(self.study_style().to_string()),
            introvert_extrovert: Some(self.social_rating()),
        }
    }

    /// Higher GPA maps to a higher budget bracket
    fn budget_range(&self) -> &'static str {
        if self.gpa >= 3.5 {
            "12k+"
        } else if self.gpa >= 3.0 {
            "8k-12k"
        } else if self.gpa >= 2.5 {
            "5k-8k"
        } else {
            "3k-5k"
        }
    }

    fn sleep_schedule(&self) -> &'static str {
        if self.sleep_hours >= 8.0 {
            "early-sleeper"
        } else {
            "late-sleeper"
        }
    }

    fn smoking(&self) -> &'static str {
        if self.stress_level == "High" {
            "yes"
        } else {
            "no"
        }
    }

    fn drinking(&self) -> &'static str {
        if self.social_hours > 3.0 && self.stress_level != "Low" {
            "yes"
        } else {
            "no"
        }
    }

    /// Physical activity stands in for cleanliness
    fn cleanliness_level(&self) -> &'static str {
        if self.physical_activity_hours >= 4.0 {
            "high"
        } else if self.physical_activity_hours >= 2.0 {
            "medium"
        } else {
            "low"
        }
    }

    /// Heavy studiers get the quiet style
    fn study_style(&self) -> &'static str {
        if self.study_hours >= 8.0 {
            "quiet"
        } else if self.study_hours >= 5.0 {
            "group"
        } else {
            "mixed"
        }
    }

    fn social_rating(&self) -> u8 {
        if self.social_hours >= 5.0 {
            5
        } else if self.social_hours >= 4.0 {
            4
        } else if self.social_hours >= 3.0 {
            3
        } else if self.social_hours >= 2.0 {
            2
        } else {
            1
        }
    }
}

/// Parsed lifestyle dataset plus a count of rows that failed to parse
#[derive(Debug, Clone, Default)]
pub struct LifestyleDataset {
    rows: Vec<LifestyleRow>,
    skipped: usize,
}

impl LifestyleDataset {
    /// Read and parse a CSV file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::from_csv(&raw))
    }

    /// Parse CSV text, skipping the header row
    ///
    /// Rows with fewer than eight columns or non-numeric values are
    /// dropped and counted, matching how noisy exports behave.
    #[must_use]
    pub fn from_csv(raw: &str) -> Self {
        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for line in raw.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_row(line) {
                Some(row) => rows.push(row),
                None => skipped += 1,
            }
        }

        Self { rows, skipped }
    }

    #[must_use]
    pub fn rows(&self) -> &[LifestyleRow] {
        &self.rows
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Derive questionnaire records for every row
    #[must_use]
    pub fn to_records(&self) -> Vec<UserRecord> {
        self.rows.iter().map(LifestyleRow::to_record).collect()
    }
}

// Column order: Student_ID, Study_Hours_Per_Day, Extracurricular_Hours_Per_Day,
// Sleep_Hours_Per_Day, Social_Hours_Per_Day, Physical_Activity_Hours_Per_Day,
// GPA, Stress_Level
fn parse_row(line: &str) -> Option<LifestyleRow> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 8 {
        return None;
    }

    Some(LifestyleRow {
        student_id: fields[0].parse().ok()?,
        study_hours: fields[1].parse().ok()?,
        extracurricular_hours: fields[2].parse().ok()?,
        sleep_hours: fields[3].parse().ok()?,
        social_hours: fields[4].parse().ok()?,
        physical_activity_hours: fields[5].parse().ok()?,
        gpa: fields[6].parse().ok()?,
        stress_level: fields[7].to_string(),
    })
}
