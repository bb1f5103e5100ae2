//! Axum binding for the in-memory todo store.
//!
//! # Overview
//! Translates HTTP requests into [`TodoStore`] calls and store results into
//! HTTP responses. All decision-making lives in the core crate; this layer
//! only extracts typed inputs, takes the lock, and maps errors to statuses.
//!
//! # Concurrency
//! The store is shared as `Arc<RwLock<TodoStore>>`. Mutating handlers hold
//! the write lock for the whole compound operation (max-id scan + append,
//! scan + mutate, scan + remove), so concurrent requests cannot produce
//! duplicate ids or lost updates. Reads take the read lock.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::TodoStore;

/// Shared handle to the todo collection.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Build the router with a fresh, empty store.
pub fn app() -> Router {
    app_with_store(SharedStore::default())
}

/// Build the router over an existing store handle. Used by tests that need
/// to inspect or pre-seed the collection.
pub fn app_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(store)
}

/// Serve the app on the given listener until the connection loop ends.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
