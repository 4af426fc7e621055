//! Store list, create, and edit screens.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::list_controls::{Pager, SearchBar};
use crate::components::store_form::StoreForm;
use crate::nav::RouteKey;
use crate::net::api;
use crate::net::types::{Store, StorePayload};
use crate::state::list::ListState;
use crate::util::time::display_timestamp;

use super::{DeleteConfirm, EmptyRow, load_one, load_table, redirect_when, submit};

fn stores_trail() -> (&'static str, String) {
    ("Stores", RouteKey::Stores.path().to_owned())
}

#[component]
pub fn StoresPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let list = RwSignal::new(ListState::default());
    let rows = RwSignal::new(Vec::<Store>::new());
    let pending = RwSignal::new(None::<(i64, String)>);
    load_table(ctx, list, rows, "/stores", "Loading stores", Vec::new);

    view! {
        <div class="page">
            <Breadcrumb trail=vec![stores_trail()]/>
            <section class="card">
                <SearchBar list>
                    <A href=RouteKey::StoreCreate.path()>"+ Create"</A>
                </SearchBar>
                <table class="table" class:table--loading=move || list.with(|list| list.loading)>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Address"</th>
                            <th>"Latitude"</th>
                            <th>"Longitude"</th>
                            <th>"Created"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.with(Vec::is_empty)>
                            <EmptyRow columns=6/>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|store| store.store_id
                            children=move |store| {
                                let target = (store.store_id, store.store_name.clone());
                                view! {
                                    <tr>
                                        <td>{store.store_name.clone()}</td>
                                        <td>{store.store_address.clone()}</td>
                                        <td>{store.store_latitude.clone()}</td>
                                        <td>{store.store_longitude.clone()}</td>
                                        <td>{display_timestamp(store.created_at.as_deref())}</td>
                                        <td class="table__actions">
                                            <A href=RouteKey::StoreEdit.link(&store.store_id.to_string())>
                                                "Edit"
                                            </A>
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
            <DeleteConfirm pending list base_path="/stores" what="Deleting store"/>
        </div>
    }
}

#[component]
pub fn StoreCreatePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let saved = RwSignal::new(false);
    redirect_when(saved, RouteKey::Stores.path());

    let on_submit = Callback::new(move |payload: StorePayload| {
        submit(
            ctx,
            "Creating store",
            "Store created",
            async move {
                api::post::<_, serde_json::Value>(&ctx.session(), "/stores", &payload)
                    .await
                    .map(|_| ())
            },
            move || saved.set(true),
        );
    });

    view! {
        <div class="page">
            <Breadcrumb trail=vec![stores_trail(), ("Create", RouteKey::StoreCreate.path().to_owned())]/>
            <StoreForm title="Create Store" initial=StorePayload::default() on_submit/>
        </div>
    }
}

#[component]
pub fn StoreEditPage(store_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let saved = RwSignal::new(false);
    redirect_when(saved, RouteKey::Stores.path());
    let store = load_one::<Store>(ctx, format!("/stores/detail/{store_id}"), "Loading store");

    let on_submit = Callback::new(move |payload: StorePayload| {
        submit(
            ctx,
            "Updating store",
            "Store updated",
            async move { api::patch(&ctx.session(), "/stores", &payload).await },
            move || saved.set(true),
        );
    });

    view! {
        <div class="page">
            <Breadcrumb trail=vec![stores_trail(), ("Edit", RouteKey::StoreEdit.link(&store_id))]/>
            {move || {
                store
                    .get()
                    .map(|store| {
                        view! {
                            <StoreForm title="Edit Store" initial=StorePayload::from_store(&store) on_submit/>
                        }
                    })
            }}
        </div>
    }
}
