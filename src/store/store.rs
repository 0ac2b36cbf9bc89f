//! Typed store implementation.

use std::collections::BTreeSet;

use crate::logging::debug;

use super::backend::Backend;
use super::error::{Result, StoreError};
use super::value::{Primitive, Value};

/// Type-directed key-value store over a pluggable [`Backend`].
///
/// The backend is injected at construction; there is no process-wide
/// default. Each operation is a single synchronous request against the
/// backend, and `set` commits before returning, so a stored value is
/// visible to every subsequent read.
pub struct TypedStore<B> {
    backend: B,
}

impl<B: Backend> TypedStore<B> {
    /// Create a store over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the underlying backend, e.g. to batch several writes
    /// before a single `commit`.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Store `value` under `key`, overwriting any previous entry, then
    /// commit the backend.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        debug!(key = key, kind = %value.kind(), "set");
        match value {
            Value::String(v) => self.backend.write_string(key, v)?,
            Value::StringSet(v) => self.backend.write_string_set(key, v)?,
            Value::I32(v) => self.backend.write_i32(key, v)?,
            Value::I64(v) => self.backend.write_i64(key, v)?,
            Value::F32(v) => self.backend.write_f32(key, v)?,
            Value::Bool(v) => self.backend.write_bool(key, v)?,
        }
        self.backend.commit()?;
        Ok(())
    }

    /// Read the value under `key`, falling back to `default` when the key
    /// is absent.
    ///
    /// Returns [`StoreError::KindMismatch`] when the key holds a value of a
    /// different kind than `T`.
    pub fn get<T: Primitive>(&self, key: &str, default: T) -> Result<T> {
        match self.get_opt(key, None)? {
            Some(value) => Ok(value),
            None => Ok(default),
        }
    }

    /// Read the value under `key`; when the key is absent, returns
    /// `default` as supplied (so `None` when no default was given).
    ///
    /// This is the entry point for callers without a default value to
    /// dispatch on: the accessor is selected by the requested type `T`
    /// alone.
    pub fn get_opt<T: Primitive>(&self, key: &str, default: Option<T>) -> Result<Option<T>> {
        debug!(key = key, kind = %T::KIND, "get");
        match self.backend.read(key, T::KIND)? {
            Some(value) => {
                let stored = value.kind();
                match T::from_value(value) {
                    Some(v) => Ok(Some(v)),
                    None => Err(StoreError::KindMismatch {
                        key: key.to_string(),
                        stored,
                        requested: T::KIND,
                    }),
                }
            }
            None => Ok(default),
        }
    }

    // Kind-specific read accessors, for callers that prefer a monomorphic
    // surface over the generic `get`.

    /// Read a string value.
    pub fn get_string(&self, key: &str, default: &str) -> Result<String> {
        match self.get_opt(key, None)? {
            Some(value) => Ok(value),
            None => Ok(default.to_string()),
        }
    }

    /// Read a set of strings.
    pub fn get_string_set(
        &self,
        key: &str,
        default: BTreeSet<String>,
    ) -> Result<BTreeSet<String>> {
        self.get(key, default)
    }

    /// Read a 32-bit integer value.
    pub fn get_i32(&self, key: &str, default: i32) -> Result<i32> {
        self.get(key, default)
    }

    /// Read a 64-bit integer value.
    pub fn get_i64(&self, key: &str, default: i64) -> Result<i64> {
        self.get(key, default)
    }

    /// Read a 32-bit float value.
    pub fn get_f32(&self, key: &str, default: f32) -> Result<f32> {
        self.get(key, default)
    }

    /// Read a boolean value.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        self.get(key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::store::Kind;

    fn store() -> TypedStore<MemoryBackend> {
        TypedStore::new(MemoryBackend::new())
    }

    #[test]
    fn test_set_then_get() {
        let mut store = store();
        store.set("volume", 7).unwrap();
        assert_eq!(store.get("volume", 0).unwrap(), 7);
    }

    #[test]
    fn test_get_absent_returns_default() {
        let store = store();
        assert_eq!(store.get("missing_key", 3.5f32).unwrap(), 3.5);
        assert_eq!(store.get_string("missing_key", "fallback").unwrap(), "fallback");
        assert!(store.get_bool("missing_key", true).unwrap());
    }

    #[test]
    fn test_string_set_roundtrip() {
        let mut store = store();
        let tags: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        store.set("tags", tags.clone()).unwrap();
        assert_eq!(store.get_string_set("tags", BTreeSet::new()).unwrap(), tags);
    }

    #[test]
    fn test_all_kinds_roundtrip() {
        let mut store = store();
        store.set("s", "text").unwrap();
        store.set("i", 42i32).unwrap();
        store.set("l", 1_234_567_890_123i64).unwrap();
        store.set("f", 2.5f32).unwrap();
        store.set("b", true).unwrap();

        assert_eq!(store.get_string("s", "").unwrap(), "text");
        assert_eq!(store.get_i32("i", 0).unwrap(), 42);
        assert_eq!(store.get_i64("l", 0).unwrap(), 1_234_567_890_123);
        assert_eq!(store.get_f32("f", 0.0).unwrap(), 2.5);
        assert!(store.get_bool("b", false).unwrap());
    }

    #[test]
    fn test_overwrite() {
        let mut store = store();
        store.set("key", 1i32).unwrap();
        store.set("key", 2i32).unwrap();
        assert_eq!(store.get_i32("key", 0).unwrap(), 2);
    }

    #[test]
    fn test_get_opt_absent() {
        let store = store();
        assert_eq!(store.get_opt::<String>("missing_key", None).unwrap(), None);
        assert_eq!(
            store.get_opt("missing_key", Some(9i32)).unwrap(),
            Some(9)
        );
    }

    #[test]
    fn test_get_opt_present_ignores_default() {
        let mut store = store();
        store.set("key", 5i32).unwrap();
        assert_eq!(store.get_opt("key", Some(1i32)).unwrap(), Some(5));
        assert_eq!(store.get_opt::<i32>("key", None).unwrap(), Some(5));
    }

    #[test]
    fn test_kind_mismatch() {
        let mut store = store();
        store.set("name", "alice").unwrap();
        let err = store.get_i32("name", 0).unwrap_err();
        match err {
            StoreError::KindMismatch {
                key,
                stored,
                requested,
            } => {
                assert_eq!(key, "name");
                assert_eq!(stored, Kind::String);
                assert_eq!(requested, Kind::I32);
            }
            other => panic!("expected kind mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_set_commits_each_write() {
        let mut store = store();
        store.set("a", 1i32).unwrap();
        store.set("b", 2i32).unwrap();
        assert_eq!(store.backend().commits(), 2);
    }

    #[test]
    fn test_batched_writes_through_backend() {
        let mut store = store();
        let backend = store.backend_mut();
        backend.write_i32("a", 1).unwrap();
        backend.write_i32("b", 2).unwrap();
        backend.commit().unwrap();

        assert_eq!(store.backend().commits(), 1);
        assert_eq!(store.get_i32("a", 0).unwrap(), 1);
        assert_eq!(store.get_i32("b", 0).unwrap(), 2);
    }
}
