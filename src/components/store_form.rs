//! Create/edit form for a store, with a coordinate preview.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::types::StorePayload;
use crate::state::ui::Alert;
use crate::util::coordinates::{INVALID_COORDINATE_MESSAGE, map_link, parse_coordinate};

/// Store form. Submitting with out-of-range coordinates is refused.
#[component]
pub fn StoreForm(
    title: &'static str,
    initial: StorePayload,
    on_submit: Callback<StorePayload>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store_id = initial.store_id;
    let name = RwSignal::new(initial.store_name);
    let address = RwSignal::new(initial.store_address);
    let latitude = RwSignal::new(initial.store_latitude);
    let longitude = RwSignal::new(initial.store_longitude);
    let preview = RwSignal::new(None::<(f64, f64)>);

    let checked_coordinate = move || {
        let parsed = parse_coordinate(&latitude.get_untracked(), &longitude.get_untracked());
        if parsed.is_none() {
            ctx.notify(Alert::error(INVALID_COORDINATE_MESSAGE));
        }
        parsed
    };

    let on_preview = move |_| preview.set(checked_coordinate());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if checked_coordinate().is_none() {
            return;
        }
        on_submit.run(StorePayload {
            store_id,
            store_name: name.get_untracked().trim().to_owned(),
            store_address: address.get_untracked().trim().to_owned(),
            store_latitude: latitude.get_untracked().trim().to_owned(),
            store_longitude: longitude.get_untracked().trim().to_owned(),
        });
    };

    let coordinate_missing =
        move || latitude.with(|lat| lat.trim().is_empty()) || longitude.with(|lng| lng.trim().is_empty());

    view! {
        <section class="card">
            <h2 class="card__title">{title}</h2>
            <form class="form-grid" on:submit=on_save>
                <label class="field">
                    "Store name"
                    <input
                        class="input"
                        placeholder="example: Toko A"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Store address"
                    <input
                        class="input"
                        placeholder="example: Jl. Raya"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Latitude"
                    <input
                        class="input"
                        placeholder="example: -6.1754"
                        prop:value=move || latitude.get()
                        on:input=move |ev| {
                            latitude.set(event_target_value(&ev));
                            preview.set(None);
                        }
                    />
                </label>
                <label class="field">
                    "Longitude"
                    <input
                        class="input"
                        placeholder="example: 106.8272"
                        prop:value=move || longitude.get()
                        on:input=move |ev| {
                            longitude.set(event_target_value(&ev));
                            preview.set(None);
                        }
                    />
                </label>
                <div class="field">
                    <button class="btn" type="button" disabled=coordinate_missing on:click=on_preview>
                        "View on map"
                    </button>
                    {move || {
                        preview
                            .get()
                            .map(|(lat, lng)| {
                                view! {
                                    <a class="map-link" href=map_link(lat, lng) target="_blank" rel="noopener">
                                        {format!("{lat}, {lng}")}
                                    </a>
                                }
                            })
                    }}
                </div>
                <div class="form-actions">
                    <button class="btn btn--primary" type="submit">
                        "Submit"
                    </button>
                </div>
            </form>
        </section>
    }
}
