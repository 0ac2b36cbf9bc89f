//! Typed key-value settings store with pluggable storage backends.
//!
//! Keys are strings; values are one of six primitive kinds: string,
//! string-set, `i32`, `i64`, `f32`, `bool`. Reads and writes are
//! type-directed, kind mismatches are reported as errors, and persistence
//! is delegated to a [`Backend`] injected at construction.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use pref_kv::prelude::*;
//!
//! // Open a persistent store
//! let backend = FjallBackend::open(Path::new(".pref-kv"))?;
//! let mut store = TypedStore::new(backend);
//!
//! // Store and retrieve typed values
//! store.set("volume", 7)?;
//! let volume = store.get("volume", 0)?;
//! let theme = store.get_string("theme", "dark")?;
//! ```
//!
//! # Modules
//!
//! - [`store`] - the typed store core: values, kinds, the backend
//!   capability, and [`TypedStore`] (always available)
//! - [`backend`] - bundled backends: in-memory, and fjall-backed persistence
//!   (requires the `fjall` feature)
//!
//! # Feature Flags
//!
//! - `fjall` - enable the persistent fjall-backed backend (enabled by
//!   default)
//! - `logging` - enable library-level tracing (consumers provide their own
//!   subscriber)
//! - `cli` - enable the command-line interface binary
//! - `full` - enable all features

pub mod backend;
mod logging;
pub mod prelude;
pub mod store;

// Re-export the core types at the crate root for convenience
pub use store::{Backend, BackendError, Kind, Primitive, Result, StoreError, TypedStore, Value};

#[cfg(feature = "fjall")]
pub use backend::FjallBackend;
pub use backend::MemoryBackend;
