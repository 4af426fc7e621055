//! Fallback for paths outside the current route table.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    view! {
        <div class="page page--not-found">
            <h2>"Page not found"</h2>
            <p>{move || format!("Nothing is available at {}.", location.pathname.get())}</p>
            <A href="/">"Back to start"</A>
        </div>
    }
}
