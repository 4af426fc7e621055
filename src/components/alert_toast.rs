//! Bottom-right toast for the current alert.

use leptos::prelude::*;

use crate::app::AppContext;

/// Renders `UiState::alert` and dismisses it after a timeout.
#[component]
pub fn AlertToast() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let alert = Memo::new(move |_| ctx.ui.with(|ui| ui.alert.clone()));
    let seq = Memo::new(move |_| ctx.ui.with(|ui| ui.alert_seq));

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let shown = seq.get();
        if alert.with_untracked(Option::is_none) {
            return;
        }
        gloo_timers::callback::Timeout::new(crate::config::ALERT_TIMEOUT_MS, move || {
            ctx.ui.update(|ui| ui.dismiss_alert(shown));
        })
        .forget();
    });
    #[cfg(not(feature = "csr"))]
    let _ = seq;

    move || {
        alert.get().map(|alert| {
            let class = format!("alert alert--{}", alert.kind.as_str());
            let title = alert.title();
            view! {
                <div class=class role="alert">
                    <strong class="alert__title">{title}</strong>
                    <span class="alert__message">{alert.message}</span>
                    <button
                        class="alert__close"
                        aria-label="dismiss"
                        on:click=move |_| ctx.ui.update(|ui| ui.alert = None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
