//! Store contract and the request-side value types it accepts.

pub mod criterion;
pub mod pairs;
pub mod store;
