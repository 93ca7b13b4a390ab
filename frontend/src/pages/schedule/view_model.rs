use leptos::ev::MouseEvent;
use leptos::*;
use web_sys::Event;

use crate::api::ApiClient;
use crate::state::schedule::{load_published_week, use_schedule, ScheduleState};

use super::utils::default_week_start;

/// Resource key: the requested week plus a token, so a manual reload re-runs
/// the same week and a stale date change never collides with a newer one.
#[derive(Clone, PartialEq, Eq)]
pub struct WeekQuery {
    pub week_start_date: String,
    pub token: u32,
}

impl WeekQuery {
    pub fn new(week_start_date: String) -> Self {
        Self {
            week_start_date,
            token: 0,
        }
    }

    pub fn with_date(self, week_start_date: String) -> Self {
        Self {
            week_start_date,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refresh(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
            ..self
        }
    }
}

#[derive(Clone)]
pub struct ScheduleViewModel {
    pub api: ApiClient,
    pub state: (ReadSignal<ScheduleState>, WriteSignal<ScheduleState>),
    pub week_query: RwSignal<WeekQuery>,
    pub week_resource: Resource<WeekQuery, Result<(), String>>,
}

impl ScheduleViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (state, set_state) = use_schedule();

        let week_query = create_rw_signal(WeekQuery::new(default_week_start()));
        let api_for_load = api.clone();
        let week_resource = create_resource(
            move || week_query.get(),
            move |query| {
                let api = api_for_load.clone();
                async move { load_published_week(&api, set_state, query.week_start_date).await }
            },
        );

        Self {
            api,
            state: (state, set_state),
            week_query,
            week_resource,
        }
    }

    pub fn on_week_change(&self) -> impl Fn(Event) {
        let week_query = self.week_query;
        move |ev| {
            let value = event_target_value(&ev);
            week_query.update(|query| *query = query.clone().with_date(value));
        }
    }

    pub fn on_reload(&self) -> impl Fn(MouseEvent) {
        let week_query = self.week_query;
        move |_ev| week_query.update(|query| *query = query.clone().refresh())
    }
}

pub fn use_schedule_view_model() -> ScheduleViewModel {
    match use_context::<ScheduleViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ScheduleViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
