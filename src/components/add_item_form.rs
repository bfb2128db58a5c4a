//! Add Item Form Component
//!
//! Single-field form for creating new items.

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for creating new items
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank names are rejected by the store and the field keeps its text
        if ctx.add_item(&name.get_untracked()) {
            set_name.set(String::new());
        }
    };

    view! {
        <form class="item-form" on:submit=create_item>
            <label for="item-name">"Name"</label>
            <input
                id="item-name"
                type="text"
                name="name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit">"Add new item"</button>
        </form>
    }
}
