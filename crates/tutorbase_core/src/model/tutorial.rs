//! Tutorial domain model.
//!
//! # Responsibility
//! - Define the record stored in the `tutorials` table.
//! - Provide constructors for the pre-persistence and loaded-row states.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one and immutable afterwards.
//! - `title` and `description` carry no uniqueness or format constraints.
//! - `published` is a plain flag with no lifecycle state machine.

use serde::{Deserialize, Serialize};

/// Stable row identifier assigned by the database on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TutorialId = i64;

/// Canonical tutorial record.
///
/// The same shape is used for rows about to be inserted (`id == None`) and
/// rows projected back out of storage (`id == Some(..)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    /// Database identity. `None` for records that were never saved.
    pub id: Option<TutorialId>,
    /// Free-form display title.
    pub title: String,
    /// Free-form body text.
    pub description: String,
    /// Visibility flag toggled by callers through update.
    pub published: bool,
}

impl Tutorial {
    /// Creates a record that has not been persisted yet.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        published: bool,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            published,
        }
    }

    /// Creates a record carrying a known store identity.
    ///
    /// Used by row projection when loading from storage.
    pub fn with_id(
        id: TutorialId,
        title: impl Into<String>,
        description: impl Into<String>,
        published: bool,
    ) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            description: description.into(),
            published,
        }
    }

    /// Returns whether this record carries a store-assigned identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
