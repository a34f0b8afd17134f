//! Shared building blocks for the kv_store workspace.
//! - `types`: small wire types shared by handlers and tests.
//! - `utils::logging`: tracing subscriber initialization.

pub mod types;
pub mod utils;
