//! Modal asking the user to confirm a destructive action.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    message: Signal<String>,
    open: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal" class:modal--open=move || open.get()>
            <div class="modal__card" role="dialog">
                <p class="modal__message">{move || message.get()}</p>
                <div class="modal__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
