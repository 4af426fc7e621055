//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! The router only tracks the browser location. Which screens exist is decided
//! by [`crate::nav`]: the [`Shell`] resolves a [`ShellPlan`] from the current
//! identity, mounts the matching layout, and renders the page bound to the
//! current path.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::app_layout::AppLayout;
use crate::components::public_layout::PublicLayout;
use crate::nav::{Layout, RouteBinding, RouteKey, RouteMatch, ShellPlan, match_path, resolve_shell};
use crate::net::api::ApiError;
use crate::pages::admins::{AdminCreatePage, AdminEditPage, AdminsPage};
use crate::pages::attendance::{AttendanceHistoryPage, AttendancePage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::location::LocationPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::{ProfileEditPage, ProfilePage};
use crate::pages::stores::{StoreCreatePage, StoreEditPage, StoresPage};
use crate::pages::users::UsersPage;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::state::ui::{Alert, UiState};
use crate::util::credential::CredentialError;

/// Shared handles provided to every component through context.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: StoredValue<Session>,
    pub auth: RwSignal<AuthState>,
    pub ui: RwSignal<UiState>,
}

impl AppContext {
    pub fn new(session: Session) -> Self {
        let auth = RwSignal::new(AuthState::resolve(&session));
        let ui = RwSignal::new(UiState::restore(&session));
        Self {
            session: StoredValue::new(session),
            auth,
            ui,
        }
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    /// Re-read the credential and bump the auth revision.
    pub fn refresh_auth(&self) {
        let session = self.session();
        self.auth.update(|auth| *auth = auth.refreshed(&session));
    }

    /// Persist a freshly issued credential and switch to the app layout.
    ///
    /// # Errors
    ///
    /// Returns the decode failure for a credential that carries no identity;
    /// the session is left untouched.
    pub fn sign_in(&self, token: &str) -> Result<(), CredentialError> {
        self.session.with_value(|session| session.accept_credential(token))?;
        self.refresh_auth();
        log::info!("signed in");
        Ok(())
    }

    /// Remove the credential, then reload at the public root.
    pub fn logout(&self) {
        self.session.with_value(Session::remove_identity);
        self.refresh_auth();
        log::info!("signed out");
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    }

    pub fn toggle_drawer(&self) {
        let expanded = self.session.with_value(Session::toggle_drawer);
        self.ui.update(|ui| ui.drawer_expanded = expanded);
    }

    pub fn notify(&self, alert: Alert) {
        self.ui.update(|ui| {
            ui.show_alert(alert);
        });
    }

    /// Report a failed backend call; an expired session drops to login.
    pub fn fail(&self, what: &str, err: &ApiError) {
        log::warn!("{what}: {err}");
        if matches!(err, ApiError::Unauthorized) {
            self.refresh_auth();
        }
        self.notify(Alert::error(format!("{what}: {err}")));
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(Session::browser());
    provide_context(ctx);
    sync_credential_across_tabs(ctx);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-dashboard.css"/>
        <Title text="Dashboard"/>

        <Router>
            <Shell/>
        </Router>
    }
}

/// Re-resolve identity when another tab logs in or out.
fn sync_credential_across_tabs(ctx: AppContext) {
    #[cfg(feature = "csr")]
    {
        // Lives as long as the app; never removed.
        let _handle = window_event_listener(leptos::ev::storage, move |ev| {
            let key = ev.key();
            if key.is_none() || key.as_deref() == Some(crate::config::CREDENTIAL_KEY) {
                log::info!("session credential changed in another tab");
                ctx.refresh_auth();
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ctx;
    }
}

/// Mounts the layout for the current identity around the routed page.
#[component]
fn Shell() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let plan = Memo::new(move |_| ctx.auth.with(|auth| resolve_shell(auth.identity.as_ref())));

    move || match plan.with(|plan| plan.layout) {
        Layout::App => view! {
            <AppLayout>
                <RoutedPage plan/>
            </AppLayout>
        }
        .into_any(),
        Layout::Public => view! {
            <PublicLayout>
                <RoutedPage plan/>
            </PublicLayout>
        }
        .into_any(),
    }
}

/// Identity of the mounted page: the auth revision plus the matched route.
///
/// Carrying the revision remounts the page when the credential changes, even
/// if the new identity resolves to the same route table.
pub(crate) fn route_view_key(
    auth: &AuthState,
    table: &[RouteBinding],
    pathname: &str,
) -> (u64, Option<RouteMatch>) {
    (auth.revision, match_path(table, pathname))
}

#[component]
fn RoutedPage(plan: Memo<ShellPlan>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let location = use_location();
    let view_key = Memo::new(move |_| {
        let path = location.pathname.get();
        ctx.auth
            .with(|auth| plan.with(|plan| route_view_key(auth, &plan.routes, &path)))
    });

    move || page_view(view_key.get().1)
}

fn page_view(matched: Option<RouteMatch>) -> AnyView {
    let Some(matched) = matched else {
        return view! { <NotFoundPage/> }.into_any();
    };
    let param = |name: &str| matched.param(name).unwrap_or_default().to_owned();

    match matched.key {
        RouteKey::Login => view! { <LoginPage/> }.into_any(),
        RouteKey::Dashboard => view! { <DashboardPage/> }.into_any(),
        RouteKey::Location => view! { <LocationPage/> }.into_any(),
        RouteKey::Stores => view! { <StoresPage/> }.into_any(),
        RouteKey::StoreCreate => view! { <StoreCreatePage/> }.into_any(),
        RouteKey::StoreEdit => view! { <StoreEditPage store_id=param("storeId")/> }.into_any(),
        RouteKey::Attendance => view! { <AttendancePage/> }.into_any(),
        RouteKey::AttendanceHistory => {
            view! { <AttendanceHistoryPage user_id=param("attendanceHistoryUserId")/> }.into_any()
        }
        RouteKey::Users => view! { <UsersPage/> }.into_any(),
        RouteKey::Admins => view! { <AdminsPage/> }.into_any(),
        RouteKey::AdminCreate => view! { <AdminCreatePage/> }.into_any(),
        RouteKey::AdminEdit => view! { <AdminEditPage admin_id=param("adminId")/> }.into_any(),
        RouteKey::Profile => view! { <ProfilePage/> }.into_any(),
        RouteKey::ProfileEdit => view! { <ProfileEditPage user_id=param("userId")/> }.into_any(),
    }
}
