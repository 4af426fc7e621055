//! Field user accounts (read-only list).

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::list_controls::{Pager, SearchBar};
use crate::nav::RouteKey;
use crate::net::types::UserAccount;
use crate::state::list::ListState;
use crate::util::time::display_timestamp;

use super::{EmptyRow, load_table};

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let list = RwSignal::new(ListState::default());
    let rows = RwSignal::new(Vec::<UserAccount>::new());
    load_table(ctx, list, rows, "/users", "Loading users", Vec::new);

    view! {
        <div class="page">
            <Breadcrumb trail=vec![("Users", RouteKey::Users.path().to_owned())]/>
            <section class="card">
                <SearchBar list/>
                <table class="table" class:table--loading=move || list.with(|list| list.loading)>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Device ID"</th>
                            <th>"Contact"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.with(Vec::is_empty)>
                            <EmptyRow columns=4/>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|user| user.user_id
                            children=|user| {
                                view! {
                                    <tr>
                                        <td>{user.user_name.clone()}</td>
                                        <td>{user.user_device_id.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                        <td>{user.user_contact.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                        <td>{display_timestamp(user.created_at.as_deref())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Pager list/>
            </section>
        </div>
    }
}
