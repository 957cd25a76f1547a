//! StudyForge HTTP server: router, state, and route handlers.
//!
//! Exposed as a library so integration tests can build the real router
//! over a throwaway data directory.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
