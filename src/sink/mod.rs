use crate::generator::GeneratedSecret;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const RECORD_FILE_NAME: &str = "generated_password.json";

/// On-disk form of a generated password
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PersistedRecord {
    pub password: String,
}

/// Writes `secret` to `output_dir`/[`RECORD_FILE_NAME`], replacing an existing record.
/// Returns the path written.
pub fn persist(secret: &GeneratedSecret, output_dir: &Path) -> std::io::Result<PathBuf> {
    let path = output_dir.join(RECORD_FILE_NAME);

    let record = PersistedRecord {
        password: secret.as_str().to_string(),
    };
    let json = serde_json::to_string_pretty(&record)?;

    fs::write(&path, json)?;
    info!("Password saved to {}", path.display());

    Ok(path)
}

/// Reads back a record written by [`persist`]
pub fn load(path: &Path) -> std::io::Result<PersistedRecord> {
    let reader = BufReader::new(File::open(path)?);
    let record: PersistedRecord = serde_json::from_reader(reader)?;

    Ok(record)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Fresh, empty directory removed again when dropped
    pub fn scratch_dir(name: &str) -> TempDir {
        tempfile::Builder::new()
            .prefix(&format!("pass_forge_{}_", name))
            .tempdir()
            .unwrap()
    }

    #[test_env_log::test]
    fn record_round_trips_byte_for_byte() {
        let scratch = scratch_dir("round_trip");
        let dir = scratch.path();
        let secret = GeneratedSecret::from_trusted("a\"b\\c{}[]<>?~|;:,.'".to_string());

        let path = persist(&secret, dir).unwrap();

        assert_eq!(path, dir.join(RECORD_FILE_NAME));
        assert_eq!(load(&path).unwrap().password.as_bytes(), secret.as_str().as_bytes());
    }

    #[test_env_log::test]
    fn record_has_single_password_key() {
        let scratch = scratch_dir("single_key");
        let dir = scratch.path();
        let secret = GeneratedSecret::from_trusted("q\\\"".to_string());

        let path = persist(&secret, dir).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(object["password"], "q\\\"");
    }

    #[test_env_log::test]
    fn persist_overwrites_previous_record() {
        let scratch = scratch_dir("overwrite");
        let dir = scratch.path();

        persist(&GeneratedSecret::from_trusted("first-much-longer-value".to_string()), dir).unwrap();
        let path = persist(&GeneratedSecret::from_trusted("second".to_string()), dir).unwrap();

        assert_eq!(
            load(&path).unwrap(),
            PersistedRecord {
                password: "second".to_string()
            }
        );
    }

    #[test_env_log::test]
    fn persist_into_missing_directory_fails() {
        let scratch = scratch_dir("missing");
        let dir = scratch.path().join("does/not/exist");
        let secret = GeneratedSecret::from_trusted("abc".to_string());

        assert!(persist(&secret, &dir).is_err());
    }

    #[test_env_log::test]
    fn load_rejects_foreign_records() {
        let scratch = scratch_dir("foreign");
        let dir = scratch.path();
        let path = dir.join(RECORD_FILE_NAME);
        fs::write(&path, r#"{"password": "abc", "user": "root"}"#).unwrap();

        assert!(load(&path).is_err());
    }

    #[test_env_log::test]
    fn scratch_records_are_cleaned_up() {
        let scratch = scratch_dir("cleanup");
        let path = persist(&GeneratedSecret::from_trusted("abc".to_string()), scratch.path()).unwrap();
        let dir = scratch.path().to_path_buf();

        assert!(path.exists());
        drop(scratch);

        assert!(!path.exists());
        assert!(!dir.exists());
    }
}
