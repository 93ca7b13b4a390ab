use leptos::ev::MouseEvent;
use leptos::*;
use web_sys::Event;

use crate::api::WeekStatus;

#[component]
pub fn ScheduleToolbar(
    #[prop(into)] week_input: Signal<String>,
    #[prop(into)] week_status: Signal<WeekStatus>,
    #[prop(into)] total: Signal<usize>,
    on_week_change: Callback<Event>,
    on_reload: Callback<MouseEvent>,
) -> impl IntoView {
    let status_class = move || match week_status.get() {
        WeekStatus::Published => {
            "inline-flex items-center rounded-full px-3 py-1 text-xs font-medium bg-status-success-bg text-status-success-text"
        }
        WeekStatus::Draft => {
            "inline-flex items-center rounded-full px-3 py-1 text-xs font-medium bg-surface-muted text-fg-muted"
        }
    };

    view! {
        <div class="flex flex-wrap items-center gap-3 rounded-lg bg-surface-elevated p-4 shadow-sm">
            <span class="text-sm font-medium text-fg-muted">"Week of"</span>
            <input
                type="date"
                class="rounded-md border border-border px-3 py-2 text-sm text-fg"
                value=move || week_input.get()
                prop:value=move || week_input.get()
                on:change=move |ev| on_week_change.call(ev)
            />
            <button
                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm transition-colors duration-200"
                on:click=move |ev| on_reload.call(ev)
            >
                "Reload"
            </button>
            <span class="ml-auto inline-flex items-center rounded-full bg-surface-muted px-3 py-1 text-sm font-medium text-fg">
                {move || format!("{} shifts", total.get())}
            </span>
            <span class=status_class>{move || week_status.get().label()}</span>
        </div>
    }
}
