//! Edit Item Form Component

use leptos::prelude::*;

use item_store::Item;

use crate::context::AppContext;

/// Form for renaming `item`, pre-filled with its current name
#[component]
pub fn EditItemForm(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(item.name);

    let update_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_edit(&name.get_untracked());
    };

    view! {
        <form class="item-form editing" on:submit=update_item>
            <label for="item-name">"Name"</label>
            <input
                id="item-name"
                type="text"
                name="name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit">"Update item"</button>
            <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                "Cancel"
            </button>
        </form>
    }
}
