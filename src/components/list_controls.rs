//! Search toolbar and pager shared by list pages.

use leptos::prelude::*;

use crate::config::PAGE_SIZE_OPTIONS;
use crate::state::list::ListState;

/// Search input plus optional leading actions (e.g. a Create button).
#[component]
pub fn SearchBar(
    list: RwSignal<ListState>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let term = RwSignal::new(String::new());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = term.get_untracked();
        list.update(|list| list.apply_search(&value));
    };

    view! {
        <form class="toolbar" on:submit=on_submit>
            <div class="toolbar__actions">{children.map(|children| children())}</div>
            <div class="toolbar__search">
                <input
                    class="input"
                    type="search"
                    placeholder="search..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">
                    "Search"
                </button>
            </div>
        </form>
    }
}

/// Page size selector and previous/next controls.
#[component]
pub fn Pager(list: RwSignal<ListState>) -> impl IntoView {
    let on_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u64>() {
            list.update(|list| {
                list.set_page_size(size);
            });
        }
    };

    view! {
        <div class="pager">
            <label class="pager__size">
                "Rows per page "
                <select
                    on:change=on_size
                    prop:value=move || list.with(|list| list.page_size.to_string())
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            let label = size.to_string();
                            view! { <option value=size.to_string()>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            <span class="pager__range">{move || list.with(ListState::range_label)}</span>
            <button
                class="btn"
                aria-label="previous page"
                disabled=move || !list.with(ListState::has_previous)
                on:click=move |_| list.update(|list| list.set_page(list.page.saturating_sub(1)))
            >
                "‹"
            </button>
            <button
                class="btn"
                aria-label="next page"
                disabled=move || !list.with(ListState::has_next)
                on:click=move |_| list.update(|list| list.set_page(list.page + 1))
            >
                "›"
            </button>
        </div>
    }
}
