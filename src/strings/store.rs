//! Content-addressed in-memory string store
//!
//! Single source of truth for all records. The record key is the SHA-256
//! digest of the value, so uniqueness of values is uniqueness of keys. The
//! store lives exactly as long as the process; it starts empty and is
//! discarded on shutdown.

use crate::analysis::{analyze, sha256_hex};
use crate::strings::types::{ApiError, StringRecord};
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// In-memory store keyed by content hash
///
/// Reads take a shared lock and may run concurrently; create and delete
/// take the exclusive lock. Lock hold time is bounded by hashing and
/// analysis cost, both linear in the value length.
pub struct StringStore {
    records: RwLock<IndexMap<String, StringRecord>>,
}

impl StringStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
        }
    }

    /// Analyze and store a new string
    ///
    /// Fails with a conflict if a record with the same content hash already
    /// exists; a failed create inserts nothing.
    pub async fn create(&self, value: String) -> Result<StringRecord, ApiError> {
        let id = sha256_hex(&value);

        let mut records = self.records.write().await;
        if records.contains_key(&id) {
            return Err(ApiError::conflict("String already exists"));
        }

        let record = StringRecord {
            id: id.clone(),
            properties: analyze(&value),
            value,
            created_at: Utc::now(),
        };

        records.insert(id, record.clone());
        Ok(record)
    }

    /// Look up a record by its exact value
    pub async fn get_by_value(&self, value: &str) -> Result<StringRecord, ApiError> {
        let id = sha256_hex(value);
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("String not found"))
    }

    /// All records in insertion order
    pub async fn list_all(&self) -> Vec<StringRecord> {
        self.records.read().await.values().cloned().collect()
    }

    /// Remove a record by its exact value
    pub async fn delete_by_value(&self, value: &str) -> Result<(), ApiError> {
        let id = sha256_hex(value);
        // shift_remove keeps the remaining records in insertion order
        match self.records.write().await.shift_remove(&id) {
            Some(_) => Ok(()),
            None => Err(ApiError::not_found("String not found")),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for StringStore {
    fn default() -> Self {
        Self::new()
    }
}
