use leptos::*;
use leptos_meta::Title;

use super::components::{toolbar::ScheduleToolbar, week_grid::WeekGrid};
use super::utils::total_shifts;
use super::view_model::use_schedule_view_model;
use crate::components::{empty_state::EmptyState, error::ErrorBanner, layout::Layout};

#[component]
pub fn SchedulePage() -> impl IntoView {
    view! {
        <Title text="Shiftboard — my week"/>
        <SchedulePanel/>
    }
}

#[component]
pub fn SchedulePanel() -> impl IntoView {
    let vm = use_schedule_view_model();
    let (state, _) = vm.state;
    let week_query = vm.week_query;
    let on_week_change = Callback::new(vm.on_week_change());
    let on_reload = Callback::new(vm.on_reload());

    let loading = Signal::derive(move || state.with(|s| s.loading()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let week = Signal::derive(move || state.with(|s| s.week.clone()));
    let total = Signal::derive(move || state.with(|s| total_shifts(&s.week)));
    let week_status = Signal::derive(move || state.with(|s| s.week.week_status));
    let workspace_name = Signal::derive(move || {
        state.with(|s| {
            s.week
                .workspace
                .as_ref()
                .map(|workspace| workspace.name.clone())
                .unwrap_or_else(|| "—".to_string())
        })
    });
    let week_input = Signal::derive(move || week_query.with(|query| query.week_start_date.clone()));

    let show_empty =
        Signal::derive(move || !loading.get() && error.get().is_none() && total.get() == 0);
    let show_grid =
        Signal::derive(move || !loading.get() && error.get().is_none() && total.get() > 0);

    view! {
        <Layout>
            <div class="space-y-6">
                <header>
                    <h2 class="text-2xl font-semibold text-fg">{move || workspace_name.get()}</h2>
                </header>
                <ScheduleToolbar
                    week_input=week_input
                    week_status=week_status
                    total=total
                    on_week_change=on_week_change
                    on_reload=on_reload
                />
                <Show when=move || loading.get()>
                    <p class="text-sm text-fg-muted">"Loading schedule…"</p>
                </Show>
                <ErrorBanner error=error/>
                <Show when=move || show_empty.get()>
                    <EmptyState
                        title="No shifts this week"
                        description="Nothing has been published for the selected week."
                    />
                </Show>
                <Show when=move || show_grid.get()>
                    <WeekGrid week=week/>
                </Show>
            </div>
        </Layout>
    }
}
