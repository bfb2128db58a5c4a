//! Item Table Component
//!
//! Two-column listing (name, actions) with per-row edit and delete.

use leptos::prelude::*;

use item_store::{Item, ViewMode};

use crate::context::AppContext;

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <table class="item-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !ctx.items.get().is_empty()
                    fallback=|| view! {
                        <tr>
                            <td colspan="2">"No items"</td>
                        </tr>
                    }
                >
                    <For
                        each=move || ctx.items.get()
                        key=|item| {
                            // Name is part of the key so a rename re-renders the row
                            (item.id, item.name.clone())
                        }
                        children=move |item| view! { <ItemRow item=item /> }
                    />
                </Show>
            </tbody>
        </table>
    }
}

/// A single row with its edit and delete buttons
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let is_editing = move || ctx.mode.get() == ViewMode::Editing(id);

    view! {
        <tr class=move || if is_editing() { "item-row editing" } else { "item-row" }>
            <td class="item-name">{item.name}</td>
            <td class="item-actions">
                <button class="edit-btn" on:click=move |_| ctx.begin_edit(id)>"Edit"</button>
                <button class="delete-btn" on:click=move |_| ctx.delete_item(id)>"Delete"</button>
            </td>
        </tr>
    }
}
