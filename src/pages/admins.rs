//! Admin account list, create, and edit screens.

#[cfg(test)]
#[path = "admins_test.rs"]
mod admins_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::list_controls::{Pager, SearchBar};
use crate::nav::{RouteKey, Role};
use crate::net::api;
use crate::net::types::{AdminPayload, UserAccount};
use crate::state::list::ListState;
use crate::state::ui::Alert;
use crate::util::time::display_timestamp;

use super::{DeleteConfirm, EmptyRow, load_one, load_table, redirect_when, submit};

/// Build an admin body from form values.
///
/// A password is required when creating; on edit a blank password keeps the
/// current one.
///
/// # Errors
///
/// Returns a user-facing message for a blank name, an unrecognized role, or a
/// missing password on create.
pub fn admin_payload(
    user_id: Option<i64>,
    user_name: &str,
    user_role: &str,
    password: &str,
) -> Result<AdminPayload, &'static str> {
    let user_name = user_name.trim();
    if user_name.is_empty() {
        return Err("Enter a name.");
    }
    let Some(role) = Role::parse(user_role) else {
        return Err("Choose a role.");
    };
    let user_password = (!password.is_empty()).then(|| password.to_owned());
    if user_id.is_none() && user_password.is_none() {
        return Err("Enter a password.");
    }
    Ok(AdminPayload {
        user_id,
        user_name: user_name.to_owned(),
        user_role: role.as_str().to_owned(),
        user_password,
    })
}

fn admins_trail() -> (&'static str, String) {
    ("Admins", RouteKey::Admins.path().to_owned())
}

#[component]
pub fn AdminsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let list = RwSignal::new(ListState::default());
    let rows = RwSignal::new(Vec::<UserAccount>::new());
    let pending = RwSignal::new(None::<(i64, String)>);
    load_table(ctx, list, rows, "/admins", "Loading admins", Vec::new);

    view! {
        <div class="page">
            <Breadcrumb trail=vec![admins_trail()]/>
            <section class="card">
                <SearchBar list>
                    <A href=RouteKey::AdminCreate.path()>"+ Create"</A>
                </SearchBar>
                <table class="table" class:table--loading=move || list.with(|list| list.loading)>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Role"</th>
                            <th>"Created"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.with(Vec::is_empty)>
                            <EmptyRow columns=4/>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|admin| admin.user_id
                            children=move |admin| {
                                let target = (admin.user_id, admin.user_name.clone());
                                view! {
                                    <tr>
                                        <td>{admin.user_name.clone()}</td>
                                        <td>{admin.user_role.clone()}</td>
                                        <td>{display_timestamp(admin.created_at.as_deref())}</td>
                                        <td class="table__actions">
                                            <A href=RouteKey::AdminEdit.link(&admin.user_id.to_string())>"Edit"</A>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| pending.set(Some(target.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Pager list/>
            </section>
            <DeleteConfirm pending list base_path="/admins" what="Deleting admin"/>
        </div>
    }
}

#[component]
pub fn AdminCreatePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let saved = RwSignal::new(false);
    redirect_when(saved, RouteKey::Admins.path());

    let on_submit = Callback::new(move |payload: AdminPayload| {
        submit(
            ctx,
            "Creating admin",
            "Admin created",
            async move {
                api::post::<_, serde_json::Value>(&ctx.session(), "/admins", &payload)
                    .await
                    .map(|_| ())
            },
            move || saved.set(true),
        );
    });

    view! {
        <div class="page">
            <Breadcrumb trail=vec![admins_trail(), ("Create", RouteKey::AdminCreate.path().to_owned())]/>
            <AdminForm title="Create Admin" initial=None on_submit/>
        </div>
    }
}

#[component]
pub fn AdminEditPage(admin_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let saved = RwSignal::new(false);
    redirect_when(saved, RouteKey::Admins.path());
    let admin = load_one::<UserAccount>(ctx, format!("/admins/detail/{admin_id}"), "Loading admin");

    let on_submit = Callback::new(move |payload: AdminPayload| {
        submit(
            ctx,
            "Updating admin",
            "Admin updated",
            async move { api::patch(&ctx.session(), "/admins", &payload).await },
            move || saved.set(true),
        );
    });

    view! {
        <div class="page">
            <Breadcrumb trail=vec![admins_trail(), ("Edit", RouteKey::AdminEdit.link(&admin_id))]/>
            {move || {
                admin.get().map(|admin| view! { <AdminForm title="Edit Admin" initial=Some(admin) on_submit/> })
            }}
        </div>
    }
}

#[component]
fn AdminForm(
    title: &'static str,
    initial: Option<UserAccount>,
    on_submit: Callback<AdminPayload>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let user_id = initial.as_ref().map(|admin| admin.user_id);
    let name = RwSignal::new(initial.as_ref().map(|admin| admin.user_name.clone()).unwrap_or_default());
    let role = RwSignal::new(
        initial
            .as_ref()
            .and_then(|admin| Role::parse(&admin.user_role))
            .unwrap_or(Role::Admin)
            .as_str()
            .to_owned(),
    );
    let password = RwSignal::new(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match admin_payload(user_id, &name.get_untracked(), &role.get_untracked(), &password.get_untracked()) {
            Ok(payload) => on_submit.run(payload),
            Err(message) => ctx.notify(Alert::error(message)),
        }
    };

    let password_hint = if user_id.is_some() { "leave blank to keep" } else { "required" };

    view! {
        <section class="card">
            <h2 class="card__title">{title}</h2>
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
                    "Role"
                    <select
                        class="input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {[Role::Admin, Role::SuperAdmin]
                            .into_iter()
                            .map(|option| view! { <option value=option.as_str()>{option.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    "Password"
                    <input
                        class="input"
                        type="password"
                        autocomplete="new-password"
                        placeholder=password_hint
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button class="btn btn--primary" type="submit">
                        "Submit"
                    </button>
                </div>
            </form>
        </section>
    }
}
