//! redb-backed record store
//!
//! Single-table embedded database holding serialized record collections,
//! keyed by collection name. redb commits with immediate durability by
//! default; the database file stays consistent across power loss, which is
//! the failure mode that matters on handheld intake devices.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use thiserror::Error;

use crate::capability::RecordStore;

/// Serialized collection values by collection key.
const COLLECTIONS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("collections");

/// Store errors
#[derive(Debug, Error)]
pub enum RedbStoreError {
    #[error("database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

pub type StoreResult<T> = Result<T, RedbStoreError>;

/// Record store backed by redb.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database. Used by tests; nothing survives drop.
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for RedbStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read(key)?)
    }

    async fn set(&self, key: &str, value: String) -> anyhow::Result<()> {
        Ok(self.write(key, &value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = RedbStore::open_in_memory().unwrap();
        assert_eq!(store.read("products").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = RedbStore::open_in_memory().unwrap();
        store.write("products", "[]").unwrap();
        assert_eq!(store.read("products").unwrap().as_deref(), Some("[]"));

        // Overwrite replaces the previous value.
        store.write("products", "[1]").unwrap();
        assert_eq!(store.read("products").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.write("products", "[{\"id\":1}]").unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(
            store.read("products").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }
}
