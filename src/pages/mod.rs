//! Page components, one module per screen family.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are mounted by the shell after a route is granted, so they never
//! re-check roles for their own screen. Cross-links to other screens (e.g.
//! dashboard cards) are still gated through [`crate::nav::routes::is_granted`].

pub mod admins;
pub mod attendance;
pub mod dashboard;
pub mod location;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod stores;
pub mod users;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::app::AppContext;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::list::ListState;

/// Fetch one table page whenever the list query or the filters change.
///
/// Only the response to the latest fetch is applied; earlier ones are dropped.
pub(crate) fn load_table<T, F>(
    ctx: AppContext,
    list: RwSignal<ListState>,
    rows: RwSignal<Vec<T>>,
    path: &'static str,
    what: &'static str,
    filters: F,
) where
    T: DeserializeOwned + Send + Sync + 'static,
    F: Fn() -> Vec<(&'static str, String)> + 'static,
{
    let query = Memo::new(move |_| list.with(ListState::query));

    Effect::new(move |_| {
        let query = query.get();
        let filters = filters();
        let ticket = list.try_update(ListState::begin_fetch).unwrap_or_default();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let session = ctx.session();
            let result = crate::net::api::get_table::<T>(&session, path, &query, &filters).await;
            if !list.with_untracked(|list| list.is_current_fetch(ticket)) {
                return;
            }
            match result {
                Ok(page) => {
                    rows.set(page.items);
                    list.update(|list| list.record_total(page.total_items));
                }
                Err(e) => {
                    list.update(|list| list.loading = false);
                    ctx.fail(what, &e);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, rows, path, what, query, filters, ticket);
        }
    });
}

/// Fetch a single resource once and expose it as a signal.
pub(crate) fn load_one<T>(ctx: AppContext, path: String, what: &'static str) -> RwSignal<Option<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let value = RwSignal::new(None::<T>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let session = ctx.session();
        match crate::net::api::get::<T>(&session, &path).await {
            Ok(found) => value.set(Some(found)),
            Err(e) => ctx.fail(what, &e),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctx, path, what);
    }

    value
}

/// Row shown when a table page came back empty.
#[component]
pub(crate) fn EmptyRow(columns: u32) -> impl IntoView {
    view! {
        <tr class="table__empty">
            <td colspan=columns.to_string()>"No rows"</td>
        </tr>
    }
}

/// Navigate to `to` once `flag` turns true, e.g. after a successful save.
pub(crate) fn redirect_when(flag: RwSignal<bool>, to: &'static str) {
    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move |_| {
        if flag.get() {
            navigate(to, leptos_router::NavigateOptions::default());
        }
    });
}

/// Run a mutating call, report the outcome, then `on_done` on success.
pub(crate) fn submit<Fut, D>(ctx: AppContext, what: &'static str, success: &'static str, call: Fut, on_done: D)
where
    Fut: std::future::Future<Output = Result<(), crate::net::api::ApiError>> + 'static,
    D: FnOnce() + 'static,
{
    ctx.ui.update(|ui| ui.loading = true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = call.await;
        ctx.ui.update(|ui| ui.loading = false);
        match result {
            Ok(()) => {
                ctx.notify(crate::state::ui::Alert::success(success));
                on_done();
            }
            Err(e) => ctx.fail(what, &e),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        drop(call);
        ctx.ui.update(|ui| ui.loading = false);
        let _ = (what, success, on_done);
    }
}

/// Confirmation modal for deleting one row of `list`.
///
/// `pending` holds the row's id and display name while the dialog is open.
#[component]
pub(crate) fn DeleteConfirm(
    pending: RwSignal<Option<(i64, String)>>,
    list: RwSignal<ListState>,
    /// Collection path; the row id is appended.
    base_path: &'static str,
    what: &'static str,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let message = Signal::derive(move || {
        pending.with(|pending| pending.as_ref().map(|(_, name)| format!("Delete {name}?")).unwrap_or_default())
    });
    let open = Signal::derive(move || pending.with(Option::is_some));

    let on_cancel = Callback::new(move |()| pending.set(None));
    let on_confirm = Callback::new(move |()| {
        let Some((id, _)) = pending.get_untracked() else {
            return;
        };
        pending.set(None);
        let path = format!("{base_path}/{id}");
        submit(
            ctx,
            what,
            "Deleted",
            async move { crate::net::api::delete(&ctx.session(), &path).await },
            move || list.update(ListState::reload),
        );
    });

    view! { <ConfirmDialog message open on_confirm on_cancel/> }
}
