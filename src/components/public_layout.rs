//! Bare shell for unauthenticated visitors.

use leptos::prelude::*;

use crate::components::alert_toast::AlertToast;

/// Centers the login card; no drawer, no top bar.
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <main class="public-layout">
            {children()}
            <AlertToast/>
        </main>
    }
}
