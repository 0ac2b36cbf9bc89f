//! Persistent backend over fjall.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use crate::logging::{info, trace};
use crate::store::{Backend, BackendError, Kind, Value};

use super::format;

/// Meta keyspace key holding the store format version.
const META_CONFIG_KEY: &str = "config";

/// Current store format version.
const STORE_VERSION: u32 = 1;

/// Persistent [`Backend`] storing entries in a fjall database.
///
/// Writes become visible immediately; physical persistence is deferred
/// until `commit`, which syncs the database.
pub struct FjallBackend {
    db: fjall::Database,
    entries: Keyspace,
}

impl FjallBackend {
    /// Open the store at `path`, creating it when missing.
    ///
    /// An existing store must carry the current format version.
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace("_meta", KeyspaceCreateOptions::default)?;

        match meta.get(META_CONFIG_KEY)? {
            Some(config) => {
                let version = u32::from_le_bytes(config.as_ref().try_into().map_err(|_| {
                    BackendError::InvalidFormat("invalid store config".to_string())
                })?);
                if version != STORE_VERSION {
                    return Err(BackendError::InvalidFormat(format!(
                        "store version mismatch: expected {}, got {}",
                        STORE_VERSION, version
                    )));
                }
            }
            None => {
                meta.insert(META_CONFIG_KEY, STORE_VERSION.to_le_bytes())?;
                db.persist(PersistMode::SyncAll)?;
            }
        }

        let entries = db.keyspace("entries", KeyspaceCreateOptions::default)?;
        info!(path = %path.display(), "opened settings store");

        Ok(Self { db, entries })
    }
}

impl Backend for FjallBackend {
    fn read(&self, key: &str, _kind: Kind) -> Result<Option<Value>, BackendError> {
        match self.entries.get(key)? {
            Some(bytes) => format::decode_entry(bytes.as_ref()).map(Some),
            None => Ok(None),
        }
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), BackendError> {
        trace!(key = key, kind = %value.kind(), "write");
        self.entries.insert(key, format::encode_entry(&value))?;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), BackendError> {
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}
