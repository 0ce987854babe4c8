//! Request handlers.
//!
//! Handlers validate input, delegate to the record service in `kennel_core`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod dogs;
pub mod health;
