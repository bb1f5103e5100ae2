//! In-memory todo store core.
//!
//! # Overview
//! Owns the todo collection, its validation rules, and its invariants
//! without touching the network. The server crate binds these operations
//! to HTTP; the core stays synchronous and fully deterministic, so every
//! behavior is unit-testable without a running server.
//!
//! # Design
//! - `TodoStore` is the single owner of the collection; callers decide how
//!   to share it (the server wraps it in `Arc<RwLock<_>>`).
//! - Ids are store-assigned integers, never taken from the client.
//! - Inputs are typed DTOs (`CreateTodo`, `UpdateTodo`) validated before
//!   any mutation, so a rejected request leaves the collection untouched.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{TodoStore, NAME_MAX_CHARS, NAME_MIN_CHARS};
pub use types::{CreateTodo, Priority, Todo, UpdateTodo};
