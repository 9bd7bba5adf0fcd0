//! Item Form State
//!
//! Transient state of the add/edit dialog.

use crate::domain::ShoppingItem;

/// Whether confirming the form creates a new item or edits an existing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// Dialog visibility, input text and edit target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub visible: bool,
    pub name_input: String,
    pub quantity_input: String,
    pub mode: FormMode,
    /// Snapshot of the row the edit button was pressed on
    pub target: Option<ShoppingItem>,
}

impl ItemForm {
    pub fn is_editing(&self) -> bool {
        self.mode == FormMode::Edit
    }

    /// Hide and clear everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
