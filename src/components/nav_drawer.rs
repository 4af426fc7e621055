//! Collapsible navigation drawer listing the role-scoped menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::AppContext;
use crate::nav::{NavEntry, resolve_menu};

/// Drawer whose entries come from [`resolve_menu`] for the current identity.
#[component]
pub fn NavDrawer() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let location = use_location();
    let current = location.pathname;

    let menu = Memo::new(move |_| ctx.auth.with(|auth| resolve_menu(auth.identity.as_ref())));
    let expanded = move || ctx.ui.with(|ui| ui.drawer_expanded);

    view! {
        <nav class="drawer" class:drawer--open=expanded>
            <div class="drawer__header">
                <button class="drawer__toggle" aria-label="toggle drawer" on:click=move |_| ctx.toggle_drawer()>
                    {move || if expanded() { "‹" } else { "›" }}
                </button>
            </div>
            <ul class="drawer__list">
                <For
                    each=move || menu.get()
                    key=|entry| entry.link
                    children=move |entry: NavEntry| view! { <DrawerItem entry current/> }
                />
            </ul>
        </nav>
    }
}

/// One drawer row, highlighted when its link equals the current path.
#[component]
fn DrawerItem(entry: NavEntry, current: Memo<String>) -> impl IntoView {
    let active = move || current.with(|path| entry.is_active(path));
    let icon_class = format!("icon {}", entry.icon.class());

    view! {
        <li class="drawer__item" class:drawer__item--active=active>
            <A href=entry.link>
                <span class=icon_class aria-hidden="true">{entry.icon.glyph()}</span>
                <span class="drawer__label">{entry.title}</span>
            </A>
        </li>
    }
}
