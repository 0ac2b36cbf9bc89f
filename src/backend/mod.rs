//! Bundled storage backends.
//!
//! [`MemoryBackend`] is always available; [`FjallBackend`] requires the
//! `fjall` feature (enabled by default). Third-party backends implement
//! [`crate::store::Backend`] directly.

#[cfg(feature = "fjall")]
mod fjall;
#[cfg(feature = "fjall")]
pub mod format;
mod memory;

#[cfg(feature = "fjall")]
pub use self::fjall::FjallBackend;
pub use self::memory::MemoryBackend;
