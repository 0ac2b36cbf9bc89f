//! Pluggable persistence capability for the settings store.

use std::collections::BTreeSet;

use thiserror::Error;

use super::value::{Kind, Value};

/// Errors raised by storage backends.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "fjall")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("Invalid entry format: {0}")]
    InvalidFormat(String),

    #[error("Backend error: {0}")]
    Other(String),
}

impl BackendError {
    /// Create a backend-specific error from a message. For third-party
    /// [`Backend`] implementations whose failures fit no other variant.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// A pluggable persistence provider.
///
/// Implementations decide the persistence format and medium. The store
/// requires two things of them: a written entry is visible to subsequent
/// `read` calls as soon as `write` returns, and `commit` flushes whatever
/// physical persistence was deferred. Serialization across concurrent
/// callers is the backend's concern; the store adds no locking.
pub trait Backend {
    /// Read the value stored under `key`.
    ///
    /// `kind` tells backends with kind-addressed storage which accessor to
    /// use; backends that store self-describing entries may ignore it and
    /// return the entry as stored. Returns `Ok(None)` when the key is
    /// absent.
    fn read(&self, key: &str, kind: Kind) -> Result<Option<Value>, BackendError>;

    /// Write `value` under `key`, replacing any previous entry.
    fn write(&mut self, key: &str, value: Value) -> Result<(), BackendError>;

    /// Flush pending writes to the underlying medium.
    fn commit(&mut self) -> Result<(), BackendError>;

    // Kind-specific write entry points. `TypedStore::set` dispatches on the
    // value's kind and lands on one of these.

    /// Write a string value.
    fn write_string(&mut self, key: &str, value: String) -> Result<(), BackendError> {
        self.write(key, Value::String(value))
    }

    /// Write a set of strings.
    fn write_string_set(
        &mut self,
        key: &str,
        value: BTreeSet<String>,
    ) -> Result<(), BackendError> {
        self.write(key, Value::StringSet(value))
    }

    /// Write a 32-bit integer value.
    fn write_i32(&mut self, key: &str, value: i32) -> Result<(), BackendError> {
        self.write(key, Value::I32(value))
    }

    /// Write a 64-bit integer value.
    fn write_i64(&mut self, key: &str, value: i64) -> Result<(), BackendError> {
        self.write(key, Value::I64(value))
    }

    /// Write a 32-bit float value.
    fn write_f32(&mut self, key: &str, value: f32) -> Result<(), BackendError> {
        self.write(key, Value::F32(value))
    }

    /// Write a boolean value.
    fn write_bool(&mut self, key: &str, value: bool) -> Result<(), BackendError> {
        self.write(key, Value::Bool(value))
    }
}
