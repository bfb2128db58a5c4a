//! Item List Frontend App
//!
//! Root component: add/edit form above the item table.

use leptos::prelude::*;

use item_store::{ItemController, ItemRepository, StoreConfig, ViewMode};

use crate::components::{AddItemForm, EditItemForm, ErrorBanner, ItemTable};
use crate::context::{describe_storage_error, AppContext};
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    // State
    let repository = ItemRepository::new(BrowserStorage, &StoreConfig::default());
    let controller = ItemController::open(repository);
    web_sys::console::log_1(&format!("[APP] Loaded {} items", controller.items().len()).into());
    let (error, set_error) = signal(controller.load_error().map(describe_storage_error));
    let controller = RwSignal::new(controller);

    // Provide context to all children
    let ctx = AppContext::new(controller, (error, set_error));
    provide_context(ctx);

    view! {
        <div class="App">
            <h1>"CRUD with Local Storage"</h1>
            <ErrorBanner />
            <div>
                {move || match ctx.mode.get() {
                    ViewMode::Editing(id) => match ctx.item_untracked(id) {
                        Some(item) => view! { <EditItemForm item=item /> }.into_any(),
                        None => view! { <AddItemForm /> }.into_any(),
                    },
                    ViewMode::Adding => view! { <AddItemForm /> }.into_any(),
                }}
            </div>
            <ItemTable />
        </div>
    }
}
