//! Store locations rendered as map links.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::nav::RouteKey;
use crate::net::types::{Paginated, Store};
use crate::util::coordinates::map_link;

/// A store with a usable position.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreMarker {
    pub store_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StoreMarker {
    pub fn link(&self) -> String {
        map_link(self.latitude, self.longitude)
    }
}

/// Stores whose coordinates validate; the rest are skipped with a log line.
pub fn store_markers(stores: &[Store]) -> Vec<StoreMarker> {
    stores
        .iter()
        .filter_map(|store| {
            let Some((latitude, longitude)) = store.coordinate() else {
                log::debug!("store {} has no valid coordinate", store.store_id);
                return None;
            };
            Some(StoreMarker {
                store_id: store.store_id,
                name: store.store_name.clone(),
                latitude,
                longitude,
            })
        })
        .collect()
}

/// Fetch every store once and expose the mappable ones.
pub(crate) fn load_markers(ctx: AppContext) -> Memo<Vec<StoreMarker>> {
    let stores = super::load_one::<Paginated<Store>>(ctx, "/stores".to_owned(), "Loading stores");
    Memo::new(move |_| {
        stores.with(|stores| stores.as_ref().map(|page| store_markers(&page.items)).unwrap_or_default())
    })
}

#[component]
pub(crate) fn StoreMarkers(markers: Memo<Vec<StoreMarker>>) -> impl IntoView {
    view! {
        <ul class="marker-list">
            <For
                each=move || markers.get()
                key=|marker| marker.store_id
                children=|marker| {
                    view! {
                        <li class="marker-list__item">
                            <a href=marker.link() target="_blank" rel="noopener">
                                {marker.name.clone()}
                            </a>
                            <small>{format!("Latitude: {}", marker.latitude)}</small>
                            <small>{format!("Longitude: {}", marker.longitude)}</small>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn LocationPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let markers = load_markers(ctx);

    view! {
        <div class="page">
            <Breadcrumb trail=vec![("Location", RouteKey::Location.path().to_owned())]/>
            <section class="card">
                <h2 class="card__title">"Store Locations"</h2>
                <StoreMarkers markers/>
            </section>
        </div>
    }
}
