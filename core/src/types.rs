//! Domain types for the todo collection.
//!
//! # Design
//! Request payloads are separate structs rather than loosely-typed maps, so
//! field presence is enforced at deserialization time and partial updates
//! are explicit `Option`s. `Todo` itself is the stored record and the wire
//! representation; there is no separate response DTO.

use serde::{Deserialize, Serialize};

/// Urgency level of a todo. Serialized as a lowercase string.
///
/// Ranks run HIGH=1 through LOW=3 and are descriptive only; no store
/// operation orders by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// Numeric rank: HIGH=1, MEDIUM=2, LOW=3.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub priority: Priority,
}

/// Request payload for creating a new todo.
///
/// `priority` defaults to [`Priority::Low`] when absent from the JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Request payload for updating an existing todo. Only the fields present
/// in the JSON are applied; omitted fields keep their prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}
