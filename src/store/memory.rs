use super::RecordStore;
use crate::error::Result;
use crate::model::{Fields, Record};
use serde_json::Value;
use std::sync::Mutex;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<Record>>,
    default_status: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_status(mut self, status: &str) -> Self {
        self.default_status = Some(status.to_string());
        self
    }
}

impl RecordStore for InMemoryStore {
    fn load_all(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn append(&self, fields: Fields) -> Result<Record> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let id = records.len() as u64 + 1;
        let record = Record::assemble(fields, id, self.default_status.as_deref());
        records.push(record.clone());
        Ok(record)
    }

    fn update_field(&self, id: u64, field: &str, value: Value) -> Result<bool> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        for record in records.iter_mut() {
            if record.id() == Some(id) {
                record.set(field, value);
                return Ok(true);
            }
        }
        Ok(false)
    }
}
