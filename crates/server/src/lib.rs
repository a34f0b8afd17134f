pub mod errors;
pub mod observability;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{run_with_shutdown, serve, shutdown_signal};
pub use state::AppState;
