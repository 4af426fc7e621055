//! Attendance schedules and per-user check-in history.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::list_controls::{Pager, SearchBar};
use crate::nav::RouteKey;
use crate::nav::routes::is_granted;
use crate::net::types::{AttendanceHistory, Schedule, ScheduleStatus};
use crate::state::list::ListState;
use crate::state::ui::Alert;
use crate::util::time::display_timestamp;

use super::{EmptyRow, load_table};

/// Query filters for a `YYYY-MM-DD` date range. Blank bounds are left open.
///
/// # Errors
///
/// Returns a user-facing message when the end date precedes the start date.
pub fn date_range_filters(start: &str, end: &str) -> Result<Vec<(&'static str, String)>, &'static str> {
    let (start, end) = (start.trim(), end.trim());
    if !start.is_empty() && !end.is_empty() && end < start {
        return Err("End date must not be before start date.");
    }
    Ok(vec![("startDate", start.to_owned()), ("endDate", end.to_owned())])
}

/// Badge text and CSS modifier for a schedule status.
pub fn status_badge(status: ScheduleStatus) -> (String, &'static str) {
    let label = status.label();
    let mut chars = label.chars();
    let title = chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default();
    let modifier = match status {
        ScheduleStatus::Checkin => "badge--warning",
        ScheduleStatus::Checkout => "badge--success",
        ScheduleStatus::Waiting | ScheduleStatus::Unknown => "badge--default",
    };
    (title, modifier)
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let list = RwSignal::new(ListState::default());
    let rows = RwSignal::new(Vec::<Schedule>::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let range = RwSignal::new(Vec::<(&'static str, String)>::new());

    load_table(ctx, list, rows, "/attendances", "Loading attendance", move || range.get());

    let apply_range = move || match date_range_filters(&start.get_untracked(), &end.get_untracked()) {
        Ok(filters) => {
            range.set(filters);
            list.update(|list| list.set_page(0));
        }
        Err(message) => ctx.notify(Alert::error(message)),
    };

    let can_view_history =
        move || ctx.auth.with(|auth| is_granted(auth.identity.as_ref(), RouteKey::AttendanceHistory));

    view! {
        <div class="page">
            <Breadcrumb trail=vec![("Attendance", RouteKey::Attendance.path().to_owned())]/>
            <section class="card">
                <SearchBar list>
                    <input
                        class="input"
                        type="date"
                        aria-label="start date"
                        prop:value=move || start.get()
                        on:change=move |ev| {
                            start.set(event_target_value(&ev));
                            apply_range();
                        }
                    />
                    <input
                        class="input"
                        type="date"
                        aria-label="end date"
                        prop:value=move || end.get()
                        on:change=move |ev| {
                            end.set(event_target_value(&ev));
                            apply_range();
                        }
                    />
                </SearchBar>
                <table class="table" class:table--loading=move || list.with(|list| list.loading)>
                    <thead>
                        <tr>
                            <th>"Employee"</th>
                            <th>"Store"</th>
                            <th>"Address"</th>
                            <th>"Status"</th>
                            <th>"Start"</th>
                            <th>"End"</th>
                            <th>"History"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.with(Vec::is_empty)>
                            <EmptyRow columns=7/>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|schedule| schedule.schedule_id
                            children=move |schedule| {
                                let (status, modifier) = status_badge(schedule.schedule_status);
                                let history = RouteKey::AttendanceHistory
                                    .link(&schedule.schedule_user_id.to_string());
                                view! {
                                    <tr>
                                        <td>{schedule.user_name().to_owned()}</td>
                                        <td>{schedule.store_name().to_owned()}</td>
                                        <td>{schedule.store_address().to_owned()}</td>
                                        <td>
                                            <span class=format!("badge {modifier}")>{status}</span>
                                        </td>
                                        <td>{display_timestamp(Some(schedule.schedule_start_date.as_str()))}</td>
                                        <td>{display_timestamp(Some(schedule.schedule_end_date.as_str()))}</td>
                                        <td>
                                            <Show when=can_view_history fallback=|| "-">
                                                <A href=history.clone()>"Detail"</A>
                                            </Show>
                                        </td>
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

#[component]
pub fn AttendanceHistoryPage(user_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let list = RwSignal::new(ListState::default());
    let rows = RwSignal::new(Vec::<AttendanceHistory>::new());
    let filter_user = user_id.clone();
    load_table(ctx, list, rows, "/attendances/histories", "Loading attendance history", move || {
        vec![("attendanceHistoryUserId", filter_user.clone())]
    });

    view! {
        <div class="page">
            <Breadcrumb trail=vec![
                ("Attendance", RouteKey::Attendance.path().to_owned()),
                ("History", RouteKey::AttendanceHistory.link(&user_id)),
            ]/>
            <section class="card">
                <SearchBar list/>
                <table class="table" class:table--loading=move || list.with(|list| list.loading)>
                    <thead>
                        <tr>
                            <th>"Time"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || rows.with(Vec::is_empty)>
                            <EmptyRow columns=2/>
                        </Show>
                        <For
                            each=move || rows.get()
                            key=|history| history.attendance_history_id
                            children=|history| {
                                let category = history.attendance_history_category.label();
                                view! {
                                    <tr>
                                        <td>{display_timestamp(Some(history.attendance_history_time.as_str()))}</td>
                                        <td>
                                            <span class=format!("badge badge--{category}")>{category}</span>
                                        </td>
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
