//! Error Banner Component
//!
//! Shows the last storage failure until dismissed.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.error.get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{message}</span>
                    <button type="button" class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
