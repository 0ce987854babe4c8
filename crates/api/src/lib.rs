//! Kennel API server library.
//!
//! Exposes the building blocks (config, telemetry, state, error handling,
//! router) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
