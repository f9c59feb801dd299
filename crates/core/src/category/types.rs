//! Category domain types.

use chrono::{DateTime, Utc};
use pocketbook_shared::types::CategoryId;
use serde::{Deserialize, Serialize};

/// A named bucket expenses are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier.
    pub id: CategoryId,
    /// Unique, non-empty display name.
    pub name: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or renaming a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    /// Requested name. Surrounding whitespace is dropped.
    pub name: String,
}
