//! Username + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::APP_TITLE;
use crate::net::types::LoginRequest;

/// Validate the form before anything is sent. Passwords are not trimmed.
pub fn validate_login_input(user_name: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let user_name = user_name.trim();
    if user_name.is_empty() {
        return Err("Enter your username.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(LoginRequest {
        user_name: user_name.to_owned(),
        user_password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&user_name.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(token) => match ctx.sign_in(&token) {
                        Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                        Err(e) => {
                            log::warn!("login returned an unusable credential: {e}");
                            info.set("Sign in failed: the server returned an invalid session.".to_owned());
                            busy.set(false);
                        }
                    },
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(format!("Sign in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{APP_TITLE}</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="input"
                        type="text"
                        autocomplete="username"
                        placeholder="username"
                        prop:value=move || user_name.get()
                        on:input=move |ev| user_name.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
