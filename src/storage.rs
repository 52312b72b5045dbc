use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Contact;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Failed to access the contact document")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize the contact list")]
    Serialization(#[from] serde_json::Error),
}

/// Durable storage for the full contact list. The list is always read and
/// written whole; callers see insertion order exactly as persisted.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Missing or unreadable storage yields an empty list rather than an
    /// error, so a fresh deployment starts from zero without any setup.
    async fn load_all(&self) -> Result<Vec<Contact>, StorageError>;

    /// Overwrites the persisted document with the given list.
    async fn save_all(&self, contacts: &[Contact]) -> Result<(), StorageError>;
}

/// Production store: one pretty-printed JSON array on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ContactStore for FileStore {
    async fn load_all(&self) -> Result<Vec<Contact>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Failed to read the contact document, starting fresh: {:?}",
                    error,
                );
                return Ok(Vec::new());
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(contacts) => Ok(contacts),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Contact document is not valid JSON, starting fresh: {:?}",
                    error,
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_all(&self, contacts: &[Contact]) -> Result<(), StorageError> {
        let document = serde_json::to_vec_pretty(contacts)?;
        tokio::fs::write(&self.path, document).await?;

        Ok(())
    }
}

/// In-memory store backing tests; behaves like an always-present document.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: RwLock<Vec<Contact>>,
}

#[async_trait]
impl ContactStore for InMemoryStore {
    async fn load_all(&self) -> Result<Vec<Contact>, StorageError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn save_all(&self, contacts: &[Contact]) -> Result<(), StorageError> {
        *self.contacts.write().await = contacts.to_vec();

        Ok(())
    }
}
