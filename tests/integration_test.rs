// Integration tests for the roomatch engine
use roomatch::{
    sample_records, EncoderConfig, Error, JsonFileSource, LifestyleDataset, MatchingPool,
    RecordSource, StudyStyleEncoding, UserRecord,
};
use std::io::Write;

fn record(id: &str, name: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        full_name: name.to_string(),
        age: Some(21),
        budget_range: Some("8k-12k".to_string()),
        sleep_schedule: Some("late-sleeper".to_string()),
        smoking: Some("no".to_string()),
        drinking: Some("no".to_string()),
        cleanliness_level: Some("medium".to_string()),
        study_style: Some("group".to_string()),
        introvert_extrovert: Some(4),
    }
}

fn contrasting_record(id: &str, name: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        full_name: name.to_string(),
        age: Some(29),
        budget_range: Some("3k-5k".to_string()),
        sleep_schedule: Some("early-sleeper".to_string()),
        smoking: Some("yes".to_string()),
        drinking: Some("yes".to_string()),
        cleanliness_level: Some("high".to_string()),
        study_style: Some("quiet".to_string()),
        introvert_extrovert: Some(1),
    }
}

#[test]
fn test_near_identical_pair_outranks_contrast() {
    let a = record("a", "Asha");
    let mut b = record("b", "Badal");
    b.age = Some(22); // nearly identical to a
    let c = contrasting_record("c", "Chirag");

    let pool = MatchingPool::new(EncoderConfig::default());
    let summary = pool.build(&[a.clone(), b, c]);
    assert_eq!(summary.loaded, 3);

    let matches = pool.find_matches(&a, Some("a"), 10).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "b");
    assert!(matches[0].match_percentage >= 99);
    assert_eq!(matches[1].id, "c");
    assert!(matches[1].match_percentage < matches[0].match_percentage);
}

#[test]
fn test_invalid_record_skipped_without_aborting_build() {
    let mut broken = record("broken", "Broken");
    broken.smoking = None;

    let pool = MatchingPool::new(EncoderConfig::default());
    let summary = pool.build(&[record("a", "Asha"), broken, record("b", "Badal")]);
    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 1);

    let matches = pool.find_matches_for("a", 10).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "b");
}

#[test]
fn test_unknown_identity_is_reported() {
    let pool = MatchingPool::new(EncoderConfig::default());
    pool.build(&[record("a", "Asha")]);

    let err = pool.find_matches_for("ghost", 5).unwrap_err();
    assert!(matches!(err, Error::CandidateNotFound(id) if id == "ghost"));
}

#[test]
fn test_json_source_feeds_the_pool() {
    let records = sample_records();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&records).unwrap().as_bytes())
        .unwrap();

    let source = JsonFileSource::new(file.path());
    let loaded = source.load_all().unwrap();
    assert_eq!(loaded.len(), records.len());

    let by_id = source.load_by_id("u3").unwrap().unwrap();
    assert_eq!(by_id.full_name, "Aman Kumar");

    let pool = MatchingPool::new(EncoderConfig::default());
    let summary = pool.build(&loaded);
    assert_eq!(summary.loaded, records.len());
    assert_eq!(summary.skipped, 0);

    let matches = pool.find_matches_for("u1", 3).unwrap();
    assert_eq!(matches.len(), 3);
}

#[test]
fn test_lifestyle_dataset_to_matches() {
    let csv = "\
Student_ID,Study_Hours_Per_Day,Extracurricular_Hours_Per_Day,Sleep_Hours_Per_Day,Social_Hours_Per_Day,Physical_Activity_Hours_Per_Day,GPA,Stress_Level
1,8.5,2.0,8.2,2.5,4.5,3.8,Moderate
2,4.0,1.0,6.5,5.0,1.0,2.3,High
3,6.0,3.0,7.0,3.5,2.5,3.1,Low
4,9.0,1.5,8.5,1.5,5.0,3.9,Low
5,5.0,2.5,7.5,4.5,2.0,2.8,Moderate
";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let dataset = LifestyleDataset::from_file(file.path()).unwrap();
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.skipped(), 0);

    let records = dataset.to_records();
    let pool = MatchingPool::new(EncoderConfig::default());
    let summary = pool.build(&records);
    assert_eq!(summary.loaded, 5);

    // An external applicant shaped like the studious low-stress rows
    let query = UserRecord {
        id: "applicant".to_string(),
        full_name: "Applicant".to_string(),
        age: Some(19),
        budget_range: Some("12k+".to_string()),
        sleep_schedule: Some("early-sleeper".to_string()),
        smoking: Some("no".to_string()),
        drinking: Some("no".to_string()),
        cleanliness_level: Some("high".to_string()),
        study_style: Some("quiet".to_string()),
        introvert_extrovert: Some(2),
    };

    let matches = pool.find_matches(&query, None, 3).unwrap();
    assert_eq!(matches.len(), 3);
    for pair in matches.windows(2) {
        assert!(pair[0].match_percentage >= pair[1].match_percentage);
    }
    // The high-GPA early-sleeping quiet studiers should lead
    assert!(matches[0].id == "csv_1" || matches[0].id == "csv_4");
}

#[test]
fn test_one_hot_pool_end_to_end() {
    let config = EncoderConfig {
        study_style: StudyStyleEncoding::OneHot,
    };
    let pool = MatchingPool::new(config);
    let summary = pool.build(&sample_records());
    assert_eq!(summary.loaded, 5);

    let stats = pool.stats();
    assert_eq!(stats.dimensions, 10);

    // Same query flow as the default configuration
    let matches = pool.find_matches_for("u2", 5).unwrap();
    assert_eq!(matches.len(), 4);
    assert_eq!(matches[0].id, "u4");
}

#[test]
fn test_rebuild_swaps_the_pool_for_queries() {
    let pool = MatchingPool::new(EncoderConfig::default());
    pool.build(&[record("a", "Asha"), record("b", "Badal")]);
    assert_eq!(pool.find_matches_for("a", 5).unwrap().len(), 1);

    pool.build(&[record("x", "Xavier"), record("y", "Yamini"), record("z", "Zoya")]);
    let err = pool.find_matches_for("a", 5).unwrap_err();
    assert!(matches!(err, Error::CandidateNotFound(_)));
    assert_eq!(pool.find_matches_for("x", 5).unwrap().len(), 2);
}
