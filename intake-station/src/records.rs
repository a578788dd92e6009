//! Record collection persistence
//!
//! The full ordered list of registered products lives under a single key as
//! a JSON array. Each submit is a read-modify-write of that one value; an
//! absent key reads as an empty collection.

use shared::{ProductRecord, RegistrationError, RegistrationResult};

use crate::capability::RecordStore;

/// Collection key for the registered product list.
pub const RECORDS_KEY: &str = "products";

/// Load the record collection.
///
/// A decode failure counts as a persistence fault, same as a failed read.
pub async fn load(store: &dyn RecordStore) -> RegistrationResult<Vec<ProductRecord>> {
    let raw = store
        .get(RECORDS_KEY)
        .await
        .map_err(RegistrationError::persistence)?;

    match raw {
        Some(json) => serde_json::from_str(&json).map_err(RegistrationError::persistence),
        None => Ok(Vec::new()),
    }
}

/// Append one record to the collection, preserving existing order.
///
/// Returns the collection length after the append.
pub async fn append(store: &dyn RecordStore, record: &ProductRecord) -> RegistrationResult<usize> {
    let mut records = load(store).await?;
    records.push(record.clone());

    let json = serde_json::to_string(&records).map_err(RegistrationError::persistence)?;
    store
        .set(RECORDS_KEY, json)
        .await
        .map_err(RegistrationError::persistence)?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use shared::RegionCode;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        map: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
            self.map.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }
    }

    fn record(id: i64, name: &str) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            manufacture_date: "01/01/2024".to_string(),
            expiry_date: "01/01/2025".to_string(),
            quantity: "1".to_string(),
            lot: "L1".to_string(),
            origin_state: RegionCode::Sp,
            barcode: "789".to_string(),
        }
    }

    #[tokio::test]
    async fn test_absent_key_is_empty_collection() {
        let store = MemoryStore::default();
        assert!(load(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = MemoryStore::default();
        append(&store, &record(1, "a")).await.unwrap();
        append(&store, &record(2, "b")).await.unwrap();
        let len = append(&store, &record(3, "c")).await.unwrap();
        assert_eq!(len, 3);

        let records = load(&store).await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_corrupt_collection_is_persistence_error() {
        let store = MemoryStore::default();
        store
            .set(RECORDS_KEY, "not json".to_string())
            .await
            .unwrap();

        let err = load(&store).await.unwrap_err();
        assert!(matches!(err, RegistrationError::Persistence { .. }));
    }
}
