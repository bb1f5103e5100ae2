//! The in-memory todo collection and its invariants.
//!
//! # Design
//! A plain `Vec` keeps insertion order, which defines the "first n" slice
//! semantics of [`TodoStore::list`]. Lookups are linear scans; uniqueness
//! of ids means the first match is the only match. Ids are assigned as
//! max(existing) + 1, so deleting the current maximum frees its id for the
//! next create. Validation runs before any mutation, so a rejected input
//! leaves the collection exactly as it was.

use crate::error::StoreError;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Minimum `name` length, in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum `name` length, in characters.
pub const NAME_MAX_CHARS: usize = 512;

/// Owner of the todo collection.
///
/// All operations are synchronous and touch only the in-memory list. The
/// store is not internally synchronized; share it behind a lock when
/// handling requests from multiple threads.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of todos currently held.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the collection in insertion order.
    ///
    /// With `first_n` absent or zero the whole collection is returned;
    /// otherwise the leading `first_n` elements (fewer if the collection
    /// is smaller).
    pub fn list(&self, first_n: Option<usize>) -> &[Todo] {
        match first_n {
            None | Some(0) => &self.todos,
            Some(n) => &self.todos[..n.min(self.todos.len())],
        }
    }

    /// Looks up a todo by id.
    pub fn get(&self, id: u64) -> Result<&Todo, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Validates the input, assigns the next id, and appends the new todo.
    ///
    /// The assigned id is max(existing ids, 0) + 1. Returns the stored
    /// record.
    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, StoreError> {
        validate_name(&input.name)?;
        let id = self.todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        let todo = Todo {
            id,
            name: input.name,
            description: input.description,
            priority: input.priority,
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Applies the supplied fields to an existing todo.
    ///
    /// Lookup happens first, so an unknown id reports `NotFound` even when
    /// the input is also invalid. Supplied fields are validated before any
    /// of them is assigned; omitted fields keep their prior value.
    pub fn update(&mut self, id: u64, input: UpdateTodo) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        if let Some(name) = &input.name {
            validate_name(name)?;
        }
        let todo = &mut self.todos[index];
        if let Some(name) = input.name {
            todo.name = name;
        }
        if let Some(description) = input.description {
            todo.description = description;
        }
        if let Some(priority) = input.priority {
            todo.priority = priority;
        }
        Ok(todo.clone())
    }

    /// Removes a todo by id, preserving the relative order of the rest,
    /// and returns the removed record.
    pub fn delete(&mut self, id: u64) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        Ok(self.todos.remove(index))
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })
    }
}

/// Length check counts characters, not bytes.
fn validate_name(name: &str) -> Result<(), StoreError> {
    let length = name.chars().count();
    if length < NAME_MIN_CHARS || length > NAME_MAX_CHARS {
        return Err(StoreError::Validation {
            field: "name",
            message: format!(
                "length must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters, got {length}"
            ),
        });
    }
    Ok(())
}
