//! Kennel domain layer.
//!
//! Holds the dog record model, the [`store::DogStore`] seam to the document
//! store, the record service, and the logging handle injected into it.
//! Nothing in here knows about HTTP or a concrete database driver.

pub mod dog;
pub mod error;
pub mod ids;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod types;
