//! Storage implementations for the service layer
//!
//! Holds the process-wide in-memory map behind the `KvStore` contract.

pub mod memory_store;
