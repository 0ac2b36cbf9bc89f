//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use pref_kv::prelude::*;
//!
//! let mut store = TypedStore::new(MemoryBackend::new());
//! store.set("notifications", true)?;
//! let enabled = store.get_bool("notifications", false)?;
//! ```

// Store core
pub use crate::store::{
    Backend, BackendError, Kind, Primitive, Result, StoreError, TypedStore, Value,
};

// Bundled backends
#[cfg(feature = "fjall")]
pub use crate::backend::FjallBackend;
pub use crate::backend::MemoryBackend;
