//! Parent categories and per-user time categories.

use disciplineos_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the shared `parent_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParentCategory {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `time_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimeCategory {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub color: Option<String>,
    pub parent_category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimeCategory {
    pub name: String,
    /// `#RRGGBB`, optional.
    pub color: Option<String>,
    pub parent_category_id: Option<DbId>,
}

/// Full replacement of the editable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTimeCategory {
    pub name: String,
    pub color: Option<String>,
    pub parent_category_id: Option<DbId>,
}
