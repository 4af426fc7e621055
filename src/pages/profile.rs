//! The signed-in user's own profile.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::nav::RouteKey;
use crate::net::api;
use crate::net::types::{ProfilePayload, UserAccount};
use crate::state::ui::Alert;
use crate::util::credential::Identity;
use crate::util::time::display_timestamp;

use super::{load_one, redirect_when, submit};

/// Only the credential holder may edit the profile at `user_id`.
pub fn may_edit_profile(identity: Option<&Identity>, user_id: &str) -> bool {
    identity.is_some_and(|identity| !identity.user_id.is_empty() && identity.user_id == user_id)
}

/// Build a profile body from form values. A blank password is left unchanged.
///
/// # Errors
///
/// Returns a user-facing message for a blank name.
pub fn profile_payload(user_name: &str, password: &str) -> Result<ProfilePayload, &'static str> {
    let user_name = user_name.trim();
    if user_name.is_empty() {
        return Err("Enter a name.");
    }
    Ok(ProfilePayload {
        user_name: user_name.to_owned(),
        user_password: (!password.is_empty()).then(|| password.to_owned()),
    })
}

fn profile_trail() -> (&'static str, String) {
    ("My Profile", RouteKey::Profile.path().to_owned())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let profile = load_one::<UserAccount>(ctx, RouteKey::Profile.path().to_owned(), "Loading profile");

    let edit_link = move || {
        ctx.auth.with(|auth| {
            auth.identity
                .as_ref()
                .map(|identity| RouteKey::ProfileEdit.link(&identity.user_id))
                .unwrap_or_default()
        })
    };
    let field = move |read: fn(&UserAccount) -> String| {
        move || profile.with(|profile| profile.as_ref().map(read).unwrap_or_else(|| "-".to_owned()))
    };

    view! {
        <div class="page">
            <Breadcrumb trail=vec![profile_trail()]/>
            <section class="card profile">
                <header class="profile__header">
                    <span class="avatar avatar--large">
                        {move || ctx.auth.with(|auth| auth.identity.as_ref().map(Identity::initial))}
                    </span>
                    <div>
                        <h2 class="profile__name">{field(|profile| profile.user_name.clone())}</h2>
                        <span class="badge">{field(|profile| profile.user_role.clone())}</span>
                    </div>
                    <A href=edit_link>"Edit Profile"</A>
                </header>
                <dl class="profile__details">
                    <dt>"Username"</dt>
                    <dd>{field(|profile| profile.user_name.clone())}</dd>
                    <dt>"Role"</dt>
                    <dd>{field(|profile| profile.user_role.clone())}</dd>
                    <dt>"Created At"</dt>
                    <dd>{field(|profile| display_timestamp(profile.created_at.as_deref()))}</dd>
                </dl>
            </section>
        </div>
    }
}

#[component]
pub fn ProfileEditPage(user_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let allowed = ctx.auth.with_untracked(|auth| may_edit_profile(auth.identity.as_ref(), &user_id));
    let saved = RwSignal::new(false);
    redirect_when(saved, RouteKey::Profile.path());

    let initial_name = ctx
        .auth
        .with_untracked(|auth| auth.identity.as_ref().map(|identity| identity.user_name.clone()))
        .unwrap_or_default();
    let name = RwSignal::new(initial_name);
    let password = RwSignal::new(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match profile_payload(&name.get_untracked(), &password.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                ctx.notify(Alert::error(message));
                return;
            }
        };
        submit(
            ctx,
            "Updating profile",
            "Profile updated",
            async move { api::patch(&ctx.session(), RouteKey::Profile.path(), &payload).await },
            move || saved.set(true),
        );
    };

    if !allowed {
        log::warn!("refusing to edit profile {user_id} for another identity");
        return view! {
            <div class="page">
                <Breadcrumb trail=vec![profile_trail()]/>
                <p class="page__message">"You can only edit your own profile."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="page">
            <Breadcrumb trail=vec![profile_trail(), ("Edit", RouteKey::ProfileEdit.link(&user_id))]/>
            <section class="card">
                <h2 class="card__title">"Edit Profile"</h2>
                <form class="form-grid" on:submit=on_save>
                    <label class="field">
                        "Name"
                        <input
                            class="input"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "New password"
                        <input
                            class="input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="leave blank to keep"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-actions">
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
    .into_any()
}
