//! Service layer holding the key-value store.
//! - `kv`: the store contract, search criteria and `Set` payload parsing.
//! - `storage`: the in-memory implementation shared by all request handlers.
//! - `errors`: value-based error taxonomy surfaced to the transport.

pub mod errors;
pub mod kv;
pub mod storage;

pub use errors::{StoreError, StoreResult};
pub use kv::{criterion::Criterion, pairs::Pairs, store::{Entries, KvStore}};
pub use storage::memory_store::MemoryStore;
