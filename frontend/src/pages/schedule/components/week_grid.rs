use leptos::*;

use crate::api::{AssignedShift, ScheduleDay, ScheduleWeek};
use crate::pages::schedule::utils::shift_time_range;

#[component]
pub fn WeekGrid(#[prop(into)] week: Signal<ScheduleWeek>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <For
                each=move || week.get().days
                key=|day| day.date.clone()
                children=|day| view! { <DayCard day=day/> }
            />
        </div>
    }
}

#[component]
fn DayCard(day: ScheduleDay) -> impl IntoView {
    let count_label = format!("{} shifts", day.shifts.len());
    let shifts = day.shifts;
    view! {
        <div class="rounded-lg bg-surface-elevated p-4 shadow-sm">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-semibold text-fg">{day.date}</h3>
                <span class="text-xs text-fg-muted">{count_label}</span>
            </div>
            <ul class="mt-3 space-y-2">
                <For
                    each=move || shifts.clone()
                    key=|shift| shift.render_key()
                    children=|shift| view! { <ShiftRow shift=shift/> }
                />
            </ul>
        </div>
    }
}

#[component]
fn ShiftRow(shift: AssignedShift) -> impl IntoView {
    let time_pill = shift_time_range(&shift.start_time, &shift.end_time);
    view! {
        <li class="flex items-center justify-between rounded-md bg-surface-muted px-3 py-2">
            <span class="text-sm text-fg">{shift.name}</span>
            <span class="rounded-full bg-surface-elevated px-2 py-0.5 text-xs font-medium text-fg-muted">
                {time_pill}
            </span>
        </li>
    }
}
