// Rust guideline compliant 2026-10-19

//! HTTP variant for Folsync.

pub mod logging;
pub mod server;

pub use logging::{init_tracing, LogFormat};
pub use server::{router, run, serve, ApiError, ServerError, ServerOptions, ServerState};
