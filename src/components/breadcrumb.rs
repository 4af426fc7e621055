//! Page breadcrumb trail.

use leptos::prelude::*;
use leptos_router::components::A;

/// Trail of `(label, link)` pairs; the last one is the current page.
#[component]
pub fn Breadcrumb(trail: Vec<(&'static str, String)>) -> impl IntoView {
    let last = trail.len().saturating_sub(1);
    view! {
        <nav class="breadcrumb" aria-label="breadcrumb">
            {trail
                .into_iter()
                .enumerate()
                .map(|(index, (label, link))| {
                    if index == last {
                        view! { <span class="breadcrumb__current">{label}</span> }.into_any()
                    } else {
                        view! {
                            <A href=link>{label}</A>
                            <span class="breadcrumb__sep">"/"</span>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </nav>
    }
}
