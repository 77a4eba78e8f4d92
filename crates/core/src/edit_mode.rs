//! View/edit toggle shared by every editable list item.
//!
//! An item is either shown read-only or being edited with a draft copy. The
//! draft only replaces the stored value when the edit is committed.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditMode<T> {
    View,
    Edit { draft: T },
}

impl<T> Default for EditMode<T> {
    fn default() -> Self {
        Self::View
    }
}

impl<T: Clone> EditMode<T> {
    /// Enter edit mode with a copy of `current`. Already editing keeps the
    /// existing draft.
    pub fn begin(&mut self, current: &T) {
        if matches!(self, Self::View) {
            *self = Self::Edit { draft: current.clone() };
        }
    }
}

impl<T> EditMode<T> {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Edit { draft } => Some(draft),
            Self::View => None,
        }
    }

    /// Drop the draft and return to view mode.
    pub fn cancel(&mut self) {
        *self = Self::View;
    }

    /// Return to view mode, handing back the draft if one existed.
    pub fn commit(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Edit { draft } => Some(draft),
            Self::View => None,
        }
    }
}
