use std::path::{Path, PathBuf};

use roomatch_core::UserRecord;

use crate::error::Result;

/// Anything that can hand the engine questionnaire records
///
/// The engine treats the record store as an opaque collaborator; this is
/// the seam it talks through.
pub trait RecordSource {
    /// Load every available record
    fn load_all(&self) -> Result<Vec<UserRecord>>;

    /// Load a single record by identity
    fn load_by_id(&self, id: &str) -> Result<Option<UserRecord>>;
}

/// Record source backed by a JSON array file
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load_all(&self) -> Result<Vec<UserRecord>> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn load_by_id(&self, id: &str) -> Result<Option<UserRecord>> {
        Ok(self.load_all()?.into_iter().find(|r| r.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RECORDS: &str = r#"[
        {
            "id": "u1",
            "fullName": "Rahul Sharma",
            "age": 21,
            "budgetRange": "8k-12k",
            "sleepSchedule": "late-sleeper",
            "smoking": "no",
            "drinking": "no",
            "cleanlinessLevel": "medium",
            "studyStyle": "group",
            "introvertExtrovert": 4
        },
        {
            "id": "u2",
            "fullName": "Priya Patel",
            "age": 20,
            "budgetRange": "5k-8k",
            "sleepSchedule": "early-sleeper",
            "smoking": "no",
            "drinking": "no",
            "cleanlinessLevel": "high",
            "studyStyle": "quiet",
            "introvertExtrovert": 2
        }
    ]"#;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_all_from_json_file() {
        let file = write_fixture(RECORDS);
        let source = JsonFileSource::new(file.path());

        let records = source.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "u1");
        assert_eq!(records[1].full_name, "Priya Patel");
    }

    #[test]
    fn test_load_by_id() {
        let file = write_fixture(RECORDS);
        let source = JsonFileSource::new(file.path());

        let record = source.load_by_id("u2").unwrap().unwrap();
        assert_eq!(record.full_name, "Priya Patel");
        assert!(source.load_by_id("u9").unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/records.json");
        let err = source.load_all().unwrap_err();
        assert!(matches!(err, crate::SourceError::Io(_)));
    }

    #[test]
    fn test_malformed_payload_is_json_error() {
        let file = write_fixture("{ not json ]");
        let source = JsonFileSource::new(file.path());
        let err = source.load_all().unwrap_err();
        assert!(matches!(err, crate::SourceError::Json(_)));
    }
}
