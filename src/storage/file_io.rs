//! JSON file reading and atomic writing
//!
//! A missing file is a normal state for the ledger, so reads report it as
//! `None` instead of an error. Writes go through a sibling temp file and a
//! rename, leaving the previous content in place if anything fails.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Read JSON from `path`, or `None` when no file exists there
pub fn read_json<T, P>(path: P) -> LedgerResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let data = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LedgerError::Json(format!("{}: {}", path.display(), e)))?;
    Ok(Some(data))
}

/// Write JSON to `path` atomically, creating parent directories as needed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path).map_err(|e| {
        LedgerError::Storage(format!("Failed to create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })
}

/// Temp file next to `path`, so the rename stays on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("ledger"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        assert_eq!(read_json::<TestData, _>(&path).unwrap(), None);
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        match read_json::<TestData, _>(&path) {
            Err(LedgerError::Json(message)) => assert!(message.contains("broken.json")),
            other => panic!("expected JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_temp_path_keeps_full_file_name() {
        assert_eq!(
            temp_path_for(Path::new("/data/march.ledger")),
            Path::new("/data/march.ledger.tmp")
        );
        assert_eq!(
            temp_path_for(Path::new("budget.json")),
            Path::new("budget.json.tmp")
        );
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        let updated = TestData {
            name: "updated".to_string(),
            value: 7,
        };
        write_json_atomic(&path, &updated).unwrap();

        assert_eq!(read_json::<TestData, _>(&path).unwrap(), Some(updated));
    }
}
