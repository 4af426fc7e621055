//! Authenticated shell: top bar, user menu, navigation drawer, content.
//!
//! ARCHITECTURE
//! ============
//! The drawer and menu read identity from [`AuthState`](crate::state::auth::AuthState)
//! through context, so a revision bump after logout re-renders them from
//! scratch rather than patching stale entries.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppContext;
use crate::components::alert_toast::AlertToast;
use crate::components::nav_drawer::NavDrawer;
use crate::config::APP_TITLE;
use crate::nav::RouteKey;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();

    let expanded = move || ctx.ui.with(|ui| ui.drawer_expanded);
    let menu_open = move || ctx.ui.with(|ui| ui.user_menu_open);
    let loading = move || ctx.ui.with(|ui| ui.loading);
    let close_menu = move || ctx.ui.update(|ui| ui.user_menu_open = false);

    let initial = move || {
        ctx.auth
            .with(|auth| auth.identity.as_ref().map(|identity| identity.initial()))
            .unwrap_or_default()
    };
    let user_name = move || {
        ctx.auth
            .with(|auth| auth.identity.as_ref().map(|identity| identity.user_name.clone()))
            .unwrap_or_default()
    };

    let on_profile = move |_| {
        close_menu();
        navigate(RouteKey::Profile.path(), NavigateOptions::default());
    };
    let on_logout = move |_| {
        close_menu();
        ctx.logout();
    };

    view! {
        <div class="app-layout" class:app-layout--expanded=expanded>
            <header class="app-bar">
                <button
                    class="app-bar__menu"
                    aria-label="open drawer"
                    class:app-bar__menu--hidden=expanded
                    on:click=move |_| ctx.toggle_drawer()
                >
                    "☰"
                </button>
                <span class="app-bar__title">{APP_TITLE}</span>
                <span class="app-bar__spacer"></span>
                <div class="app-bar__user">
                    <button
                        class="app-bar__avatar"
                        title=user_name
                        on:click=move |_| ctx.ui.update(|ui| ui.user_menu_open = !ui.user_menu_open)
                    >
                        {initial}
                    </button>
                    <ul class="user-menu" class:user-menu--open=menu_open>
                        <li>
                            <button class="user-menu__item" on:click=on_profile>
                                "Profile"
                            </button>
                        </li>
                        <li>
                            <button class="user-menu__item" on:click=on_logout>
                                "logout"
                            </button>
                        </li>
                    </ul>
                </div>
            </header>

            <NavDrawer/>

            <main class="app-layout__content" class:app-layout__content--busy=loading>
                <div class="backdrop" on:click=move |_| ctx.ui.update(|ui| ui.loading = false)>
                    <span class="spinner"></span>
                </div>
                {children()}
            </main>

            <AlertToast/>
        </div>
    }
}
