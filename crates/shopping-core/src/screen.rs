//! Shopping Screen State
//!
//! The list plus its dialog, mutated only through the user actions below.

use crate::domain::ShoppingItem;
use crate::form::{FormMode, ItemForm};
use crate::list::ShoppingList;
use crate::settings::FormSettings;

/// State owned by the shopping list screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingScreen {
    list: ShoppingList,
    form: ItemForm,
    settings: FormSettings,
}

impl ShoppingScreen {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn settings(&self) -> FormSettings {
        self.settings
    }

    /// "Add Item" button: show the dialog in create mode.
    ///
    /// Inputs are left as they are, so text kept by a cancel shows up again.
    pub fn open_create_form(&mut self) {
        self.form.mode = FormMode::Create;
        self.form.visible = true;
    }

    /// Row edit button: show the dialog targeting `item`.
    ///
    /// Inputs are only filled from the item when `prefill_on_edit` is set.
    pub fn open_edit_form(&mut self, item: &ShoppingItem) {
        log::debug!("[SCREEN] Editing item {}", item.id);
        if self.settings.prefill_on_edit {
            self.form.name_input = item.name.clone();
            self.form.quantity_input = item.quantity.to_string();
        }
        self.form.mode = FormMode::Edit;
        self.form.target = Some(item.clone());
        self.form.visible = true;
    }

    pub fn set_name_input(&mut self, text: impl Into<String>) {
        self.form.name_input = text.into();
    }

    pub fn set_quantity_input(&mut self, text: impl Into<String>) {
        self.form.quantity_input = text.into();
    }

    /// Confirm button: apply the form to the list, then reset the form.
    pub fn confirm_form(&mut self) {
        let form = std::mem::take(&mut self.form);
        match (form.mode, form.target) {
            (FormMode::Edit, Some(target)) => {
                self.list.edit(target.id, &form.name_input, &form.quantity_input);
            }
            (FormMode::Edit, None) => {
                log::trace!("[SCREEN] Confirm in edit mode without target");
            }
            (FormMode::Create, _) => {
                self.list.create(&form.name_input, &form.quantity_input);
            }
        }
    }

    /// Cancel button or dismissing the dialog. The list is never touched.
    pub fn cancel_form(&mut self) {
        if self.settings.clear_on_cancel {
            self.form.reset();
        } else {
            self.form.visible = false;
        }
    }

    /// Row delete button
    pub fn delete_item(&mut self, item: &ShoppingItem) {
        self.list.delete(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_with(items: &[(&str, &str)]) -> ShoppingScreen {
        let mut screen = ShoppingScreen::default();
        for (name, quantity) in items {
            screen.open_create_form();
            screen.set_name_input(*name);
            screen.set_quantity_input(*quantity);
            screen.confirm_form();
        }
        screen
    }

    #[test]
    fn test_open_create_form() {
        let mut screen = ShoppingScreen::default();
        screen.open_create_form();

        assert!(screen.form().visible);
        assert_eq!(screen.form().mode, FormMode::Create);
        assert_eq!(screen.form().target, None);
    }

    #[test]
    fn test_confirm_create_adds_item_and_resets_form() {
        let screen = screen_with(&[("Milk", "2")]);

        assert_eq!(screen.list().items(), &[ShoppingItem::new(1, "Milk", 2)]);
        assert_eq!(screen.form(), &ItemForm::default());
    }

    #[test]
    fn test_confirm_blank_name_still_resets_form() {
        let mut screen = ShoppingScreen::default();
        screen.open_create_form();
        screen.set_name_input("  ");
        screen.set_quantity_input("4");
        screen.confirm_form();

        assert!(screen.list().is_empty());
        assert_eq!(screen.form(), &ItemForm::default());
    }

    #[test]
    fn test_open_edit_form_does_not_prefill_by_default() {
        let mut screen = screen_with(&[("Milk", "2")]);
        let item = screen.list().items()[0].clone();

        screen.open_edit_form(&item);

        assert!(screen.form().visible);
        assert!(screen.form().is_editing());
        assert_eq!(screen.form().target, Some(item));
        assert_eq!(screen.form().name_input, "");
        assert_eq!(screen.form().quantity_input, "");
    }

    #[test]
    fn test_open_edit_form_prefills_when_enabled() {
        let mut screen = ShoppingScreen::new(FormSettings {
            prefill_on_edit: true,
            ..Default::default()
        });
        screen.open_create_form();
        screen.set_name_input("Milk");
        screen.set_quantity_input("2");
        screen.confirm_form();
        let item = screen.list().items()[0].clone();

        screen.open_edit_form(&item);

        assert_eq!(screen.form().name_input, "Milk");
        assert_eq!(screen.form().quantity_input, "2");
    }

    #[test]
    fn test_confirm_edit_updates_target() {
        let mut screen = screen_with(&[("Milk", "2"), ("Bread", "1")]);
        let item = screen.list().items()[0].clone();

        screen.open_edit_form(&item);
        screen.set_name_input("Eggs");
        screen.set_quantity_input("5");
        screen.confirm_form();

        assert_eq!(
            screen.list().items(),
            &[ShoppingItem::new(1, "Eggs", 5), ShoppingItem::new(2, "Bread", 1)]
        );
        assert_eq!(screen.form(), &ItemForm::default());
    }

    #[test]
    fn test_edit_without_typing_blanks_the_item() {
        let mut screen = screen_with(&[("Milk", "2")]);
        let item = screen.list().items()[0].clone();

        screen.open_edit_form(&item);
        screen.confirm_form();

        assert_eq!(screen.list().items(), &[ShoppingItem::new(1, "", 0)]);
    }

    #[test]
    fn test_cancel_only_hides_by_default() {
        let mut screen = screen_with(&[("Milk", "2")]);
        let item = screen.list().items()[0].clone();
        let list_before = screen.list().clone();

        screen.open_edit_form(&item);
        screen.set_name_input("Juice");
        screen.cancel_form();

        assert_eq!(screen.list(), &list_before);
        assert!(!screen.form().visible);
        assert_eq!(screen.form().name_input, "Juice");
        assert_eq!(screen.form().target, Some(item));
    }

    #[test]
    fn test_stale_input_reappears_after_cancel() {
        let mut screen = ShoppingScreen::default();
        screen.open_create_form();
        screen.set_name_input("Tea");
        screen.cancel_form();

        screen.open_create_form();
        assert_eq!(screen.form().name_input, "Tea");
        assert_eq!(screen.form().mode, FormMode::Create);
    }

    #[test]
    fn test_cancel_clears_when_enabled() {
        let mut screen = ShoppingScreen::new(FormSettings {
            clear_on_cancel: true,
            ..Default::default()
        });
        screen.open_create_form();
        screen.set_name_input("Tea");
        screen.set_quantity_input("3");
        screen.cancel_form();

        assert_eq!(screen.form(), &ItemForm::default());
        assert!(screen.list().is_empty());
    }

    #[test]
    fn test_reopening_create_after_cancelled_edit_creates() {
        let mut screen = screen_with(&[("Milk", "2")]);
        let item = screen.list().items()[0].clone();

        screen.open_edit_form(&item);
        screen.cancel_form();
        screen.open_create_form();
        screen.set_name_input("Bread");
        screen.set_quantity_input("1");
        screen.confirm_form();

        assert_eq!(screen.list().len(), 2);
        assert_eq!(screen.list().items()[0], item);
    }

    #[test]
    fn test_delete_item() {
        let mut screen = screen_with(&[("A", "1"), ("B", "2")]);
        let first = screen.list().items()[0].clone();

        screen.delete_item(&first);

        assert_eq!(screen.list().items(), &[ShoppingItem::new(2, "B", 2)]);
    }
}
