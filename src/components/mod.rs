//! UI Components
//!
//! Leptos components for the item forms and table.

mod add_item_form;
mod edit_item_form;
mod error_banner;
mod item_table;

pub use add_item_form::AddItemForm;
pub use edit_item_form::EditItemForm;
pub use error_banner::ErrorBanner;
pub use item_table::{ItemRow, ItemTable};
