use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

const APP_DIR_NAME: &str = "self-aware-snake";
const RECORDS_FILE_NAME: &str = "records.json";

/// Best results across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    pub high_score: u32,
    /// Number of sessions the snake has escaped from.
    pub escapes: u32,
}

/// Returns the platform-correct records file path.
#[must_use]
pub fn records_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(RECORDS_FILE_NAME);
    base
}

/// Loads records from disk.
///
/// Returns defaults when the file does not yet exist (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller
/// can surface a warning before entering raw terminal mode.
pub fn load_records() -> Result<Records, AppError> {
    load_records_from_path(&records_path())
}

/// Saves records to disk, creating parent directories when needed.
pub fn save_records(records: Records) -> Result<(), AppError> {
    save_records_to_path(&records_path(), records)
}

fn load_records_from_path(path: &Path) -> Result<Records, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Records::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn save_records_to_path(path: &Path, records: Records) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json)?;
    Ok(())
}
