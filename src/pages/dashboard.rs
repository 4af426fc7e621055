//! Landing page: headline counts and store locations.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::nav::routes::is_granted;
use crate::nav::{Icon, RouteKey};
use crate::net::types::Statistic;
use crate::util::credential::Identity;

use super::location::{StoreMarkers, load_markers};

/// One statistic tile. `link` is set only when the identity may open it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub icon: Icon,
    pub link: Option<String>,
}

/// Tiles in display order, linked to the screens the identity is granted.
pub fn stat_cards(identity: Option<&Identity>, stats: &Statistic) -> Vec<StatCard> {
    let linked = |key: RouteKey| is_granted(identity, key).then(|| key.path().to_owned());
    vec![
        StatCard {
            label: "SPG",
            value: stats.total_spg,
            icon: Icon::User,
            link: linked(RouteKey::Users),
        },
        StatCard {
            label: "User",
            value: stats.total_users,
            icon: Icon::Admin,
            link: linked(RouteKey::Admins),
        },
        StatCard {
            label: "Stores",
            value: stats.total_stores,
            icon: Icon::Store,
            link: linked(RouteKey::Stores),
        },
        StatCard {
            label: "Supplier",
            value: stats.total_suppliers,
            icon: Icon::Admin,
            link: None,
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let stats = super::load_one::<Statistic>(ctx, "/statistic".to_owned(), "Loading statistics");
    let markers = load_markers(ctx);

    let cards = move || {
        let stats = stats.get().unwrap_or_default();
        ctx.auth.with(|auth| stat_cards(auth.identity.as_ref(), &stats))
    };

    view! {
        <div class="page">
            <Breadcrumb trail=vec![("Dashboard", RouteKey::Dashboard.path().to_owned())]/>
            <div class="stat-grid">
                {move || cards().into_iter().map(stat_tile).collect_view()}
            </div>
            <section class="card">
                <h2 class="card__title">"Store Locations"</h2>
                <StoreMarkers markers/>
            </section>
        </div>
    }
}

fn stat_tile(card: StatCard) -> AnyView {
    let body = view! {
        <span class=format!("icon {}", card.icon.class())>{card.icon.glyph()}</span>
        <span class="stat-card__label">{card.label}</span>
        <strong class="stat-card__value">{card.value}</strong>
    };
    match card.link {
        Some(link) => view! {
            <div class="stat-card stat-card--link">
                <A href=link>{body}</A>
            </div>
        }
        .into_any(),
        None => view! { <div class="stat-card">{body}</div> }.into_any(),
    }
}
