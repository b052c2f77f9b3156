//! Built-in questionnaire records for demos and tests

use roomatch_core::UserRecord;

/// Five contrasting questionnaire records
///
/// Deliberately diverse: two early-sleeping quiet studiers, two
/// late-sleeping mixed profiles and one in between, so every demo run
/// produces a visible ranking spread.
#[must_use]
pub fn sample_records() -> Vec<UserRecord> {
    vec![
        record("u1", "Rahul Sharma", 21, "8k-12k", "late-sleeper", "no", "no", "medium", "group", 4),
        record("u2", "Priya Patel", 20, "5k-8k", "early-sleeper", "no", "no", "high", "quiet", 2),
        record("u3", "Aman Kumar", 22, "8k-12k", "late-sleeper", "yes", "yes", "low", "mixed", 5),
        record("u4", "Neha Gupta", 19, "3k-5k", "early-sleeper", "no", "no", "high", "quiet", 1),
        record("u5", "Vikram Singh", 23, "12k+", "late-sleeper", "no", "yes", "medium", "mixed", 3),
    ]
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    full_name: &str,
    age: u32,
    budget_range: &str,
    sleep_schedule: &str,
    smoking: &str,
    drinking: &str,
    cleanliness_level: &str,
    study_style: &str,
    introvert_extrovert: u8,
) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        full_name: full_name.to_string(),
        age: Some(age),
        budget_range: Some(budget_range.to_string()),
        sleep_schedule: Some(sleep_schedule.to_string()),
        smoking: Some(smoking.to_string()),
        drinking: Some(drinking.to_string()),
        cleanliness_level: Some(cleanliness_level.to_string()),
        study_style: Some(study_style.to_string()),
        introvert_extrovert: Some(introvert_extrovert),
    }
}
