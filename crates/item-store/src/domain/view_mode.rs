//! View Mode
//!
//! Which form the page shows: adding a new item or editing an existing one.

/// Add/edit form state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Add form is shown
    #[default]
    Adding,
    /// Edit form is shown for the item with this id
    Editing(u32),
}

impl ViewMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, ViewMode::Editing(_))
    }

    /// Id of the item being edited, if any
    pub fn target(&self) -> Option<u32> {
        match self {
            ViewMode::Adding => None,
            ViewMode::Editing(id) => Some(*id),
        }
    }
}
