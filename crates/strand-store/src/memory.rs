//! In-memory string repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use strand_core::{Error, Result, StringRecord, StringRepository};

/// Record store backed by a `HashMap` behind an async `RwLock`.
///
/// Cloning is cheap and every clone shares the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<String, StringRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StringRepository for MemoryStore {
    async fn put(&self, record: StringRecord) -> Result<StringRecord> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            debug!(
                subsystem = "store",
                component = "memory_store",
                op = "put",
                record_id = %record.id,
                "Rejected duplicate content"
            );
            return Err(Error::Conflict("String already exists".to_string()));
        }

        records.insert(record.id.clone(), record.clone());
        info!(
            subsystem = "store",
            component = "memory_store",
            op = "put",
            record_id = %record.id,
            store_size = records.len(),
            "Stored string record"
        );
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<StringRecord>> {
        let record = self.records.read().await.get(id).cloned();
        debug!(
            subsystem = "store",
            component = "memory_store",
            op = "get",
            record_id = %id,
            found = record.is_some(),
            "Looked up string record"
        );
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        if records.remove(id).is_none() {
            return Err(Error::NotFound("string not found".to_string()));
        }
        info!(
            subsystem = "store",
            component = "memory_store",
            op = "delete",
            record_id = %id,
            store_size = records.len(),
            "Deleted string record"
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StringRecord>> {
        let mut snapshot: Vec<StringRecord> =
            self.records.read().await.values().cloned().collect();
        snapshot.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        debug!(
            subsystem = "store",
            component = "memory_store",
            op = "list",
            result_count = snapshot.len(),
            "Listed string records"
        );
        Ok(snapshot)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}
