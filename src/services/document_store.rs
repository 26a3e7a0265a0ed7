use std::collections::HashMap;
use std::sync::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Handle;

use crate::Database;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store failed: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("store worker failed: {0}")]
    Executor(#[from] tokio::task::JoinError)
}

/// Whole-document storage keyed by id, holding JSON text. Every call blocks.
pub trait DocumentStore: Send + Sync {
    fn find(&self, id: &str) -> Result<Option<String>, StoreError>;

    fn insert(&self, id: &str, document: &str) -> Result<(), StoreError>;

    /// Replaces an existing document. Missing documents are left missing.
    fn update(&self, id: &str, document: &str) -> Result<(), StoreError>;
}

/// Typed access on top of any [`DocumentStore`].
pub trait Documents {
    fn load<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, StoreError>;

    fn create<T: Serialize>(&self, id: &str, document: &T) -> Result<(), StoreError>;

    fn save<T: Serialize>(&self, id: &str, document: &T) -> Result<(), StoreError>;

    /// Loads a document, inserting `T::default()` first when it is missing.
    fn load_or_create<T: DeserializeOwned + Serialize + Default>(&self, id: &str) -> Result<T, StoreError> {
        if let Some(document) = self.load(id)? {
            return Ok(document);
        }

        let document = T::default();
        self.create(id, &document)?;
        Ok(document)
    }
}

impl<S: DocumentStore + ?Sized> Documents for S {
    fn load<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, StoreError> {
        match self.find(id)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None)
        }
    }

    fn create<T: Serialize>(&self, id: &str, document: &T) -> Result<(), StoreError> {
        self.insert(id, &serde_json::to_string(document)?)
    }

    fn save<T: Serialize>(&self, id: &str, document: &T) -> Result<(), StoreError> {
        self.update(id, &serde_json::to_string(document)?)
    }
}

/// Keeps documents in memory. Used when no SQL Server is configured.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<String, String>>
}

impl MemoryDocumentStore {
    fn documents(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.documents.lock().map_err(|_| StoreError::Store("document lock poisoned".into()))
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn find(&self, id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents()?.get(id).cloned())
    }

    fn insert(&self, id: &str, document: &str) -> Result<(), StoreError> {
        self.documents()?.insert(id.to_string(), document.to_string());
        Ok(())
    }

    fn update(&self, id: &str, document: &str) -> Result<(), StoreError> {
        if let Some(existing) = self.documents()?.get_mut(id) {
            *existing = document.to_string();
        }
        Ok(())
    }
}

/// SQL Server backed documents. The pool is async, so calls drive it on the runtime handle;
/// only call this from blocking worker threads (never from inside an async task).
pub struct SqlDocumentStore {
    database: Database,
    runtime: Handle
}

impl SqlDocumentStore {
    /// Must be created from within the tokio runtime.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            runtime: Handle::current()
        }
    }
}

impl DocumentStore for SqlDocumentStore {
    fn find(&self, id: &str) -> Result<Option<String>, StoreError> {
        self.runtime
            .block_on(self.database.find_document(id))
            .map_err(StoreError::Store)
    }

    fn insert(&self, id: &str, document: &str) -> Result<(), StoreError> {
        self.runtime
            .block_on(self.database.insert_document(id, document))
            .map_err(StoreError::Store)
    }

    fn update(&self, id: &str, document: &str) -> Result<(), StoreError> {
        self.runtime
            .block_on(self.database.update_document(id, document))
            .map_err(StoreError::Store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::case_models::CaseCollection;

    #[test]
    fn update_does_not_create_documents() {
        let store = MemoryDocumentStore::default();
        store.save("bugs", &CaseCollection::default()).unwrap();

        assert!(store.load::<CaseCollection>("bugs").unwrap().is_none());
    }

    #[test]
    fn documents_round_trip_through_json() {
        let store = MemoryDocumentStore::default();
        let mut document = CaseCollection::default();
        store.create("suggestions", &document).unwrap();

        document.number = 4;
        store.save("suggestions", &document).unwrap();

        assert_eq!(store.load("suggestions").unwrap(), Some(document));
    }

    #[test]
    fn missing_documents_are_created_once() {
        let store = MemoryDocumentStore::default();

        let created: CaseCollection = store.load_or_create("bugs").unwrap();
        assert_eq!(created.number, 1);
        assert!(store.find("bugs").unwrap().is_some());

        let mut changed = created;
        changed.number = 9;
        store.save("bugs", &changed).unwrap();
        assert_eq!(store.load_or_create::<CaseCollection>("bugs").unwrap().number, 9);
    }

    #[test]
    fn malformed_text_is_reported() {
        let store = MemoryDocumentStore::default();
        store.insert("bugs", "{ not json").unwrap();

        assert!(matches!(store.load::<CaseCollection>("bugs"), Err(StoreError::Malformed(_))));
    }
}
