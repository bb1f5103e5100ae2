//! Error types for the todo store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers map "the record does
//! not exist" to a different response than "the input was rejected". Both
//! are terminal: nothing is retried or recovered internally, since no
//! operation performs I/O.

use thiserror::Error;

/// Errors returned by [`TodoStore`](crate::TodoStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced todo does not exist in the collection.
    #[error("todo {id} not found")]
    NotFound { id: u64 },

    /// An input field violates its constraints. The collection is left
    /// unchanged.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}
