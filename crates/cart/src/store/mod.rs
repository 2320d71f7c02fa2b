//! Durable key-value store adapters.
//!
//! The cart treats its durable mirror as an opaque async string store: get,
//! set, and remove over whole snapshot strings. The cart only ever uses the
//! single well-known [`CART_KEY`] - there is no per-user or per-session
//! namespacing, so exactly one cart snapshot exists store-wide.

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The single fixed key under which the whole cart snapshot is stored.
pub const CART_KEY: &str = "@basket:cart";

/// Errors produced by store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O operation against the backing medium failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend reported a failure of its own.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Durable key-value store used to mirror the cart snapshot.
///
/// All operations are asynchronous and fallible only via [`StoreError`].
/// Absent keys read as `None`, and removing an absent key is not an error.
/// Implementations are not required to handle overlapping writes to the
/// same key; the manager serializes its writes so no two ever overlap.
#[allow(async_fn_in_trait)]
pub trait CartStore {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete the value under `key`, if present.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
