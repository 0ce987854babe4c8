//! Document id generation.
//!
//! Ids follow the hosted document store convention: 20 characters drawn from
//! `[A-Za-z0-9]`, roughly 119 bits of entropy, so collisions are not a
//! practical concern.

use rand::Rng;

/// Length of a generated document id.
pub const DOCUMENT_ID_LENGTH: usize = 20;

/// Generate a new random document id.
pub fn generate_document_id() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(DOCUMENT_ID_LENGTH)
        .map(char::from)
        .collect()
}
