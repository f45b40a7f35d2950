use super::RecordStore;
use crate::error::{Result, SiteError};
use crate::model::{Fields, Record};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File-backed record store: one JSON array per entity type.
///
/// Writes take `lock` for the whole load-mutate-save cycle so that id
/// assignment and field updates never interleave (see the module docs on
/// the single-writer discipline). Reads take the same lock, so a listing
/// never observes a half-written file.
pub struct JsonFileStore {
    path: PathBuf,
    default_status: Option<String>,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the parent directory and an
    /// empty array file if they don't exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(SiteError::Io)?;
            }
        }
        if !path.exists() {
            fs::write(&path, "[]").map_err(SiteError::Io)?;
        }
        Ok(Self {
            path,
            default_status: None,
            lock: Mutex::new(()),
        })
    }

    /// Status stamped onto every appended record (orders and bookings
    /// carry one, contacts don't).
    pub fn with_default_status(mut self, status: &str) -> Self {
        self.default_status = Some(status.to_string());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Vec<Record> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn write_records(&self, records: &[Record]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(SiteError::Serialization)?;
        fs::write(&self.path, content).map_err(SiteError::Io)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load_all(&self) -> Vec<Record> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_records()
    }

    fn append(&self, fields: Fields) -> Result<Record> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.read_records();
        let id = records.len() as u64 + 1;
        let record = Record::assemble(fields, id, self.default_status.as_deref());
        records.push(record.clone());
        self.write_records(&records)?;

        Ok(record)
    }

    fn update_field(&self, id: u64, field: &str, value: Value) -> Result<bool> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.read_records();
        let mut found = false;
        for record in records.iter_mut() {
            if record.id() == Some(id) {
                record.set(field, value);
                found = true;
                break;
            }
        }
        // The original rewrote the file even on a miss; keep that, it
        // leaves the contents unchanged.
        self.write_records(&records)?;

        Ok(found)
    }
}
