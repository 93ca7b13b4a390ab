use leptos::*;
use log::warn;

use crate::api::{ApiClient, ApiError, ScheduleWeek};

/// Either idle holding the last complete snapshot, or loading the next one.
/// There is no third flag to fall out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    pub phase: LoadPhase,
    pub week: ScheduleWeek,
    /// Populated only while idle, after a failed load.
    pub error: Option<String>,
    generation: u32,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            week: ScheduleWeek::empty(""),
            error: None,
            generation: 0,
        }
    }
}

impl ScheduleState {
    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Replace everything with the empty week for `week_start_date` without
    /// a fetch. Invalidates any load still in flight.
    pub fn reset(&mut self, week_start_date: &str) {
        self.phase = LoadPhase::Idle;
        self.week = ScheduleWeek::empty(week_start_date);
        self.error = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Enter the loading phase and return the generation token the eventual
    /// `finish` call must present.
    pub fn begin_load(&mut self) -> u32 {
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Apply a load outcome. Outcomes from superseded loads are dropped, so
    /// a slow response can never overwrite a newer one.
    pub fn finish(
        &mut self,
        generation: u32,
        requested_start: &str,
        result: Result<ScheduleWeek, ApiError>,
    ) {
        if generation != self.generation {
            return;
        }
        self.phase = LoadPhase::Idle;
        match result {
            Ok(week) => {
                self.week = week;
                self.error = None;
            }
            Err(error) => {
                self.week = ScheduleWeek::empty(requested_start);
                self.error = Some(error.message);
            }
        }
    }
}

pub fn use_schedule() -> (ReadSignal<ScheduleState>, WriteSignal<ScheduleState>) {
    let (state, set_state) = create_signal(ScheduleState::default());
    (state, set_state)
}

/// Load the published week for `week_start_date` into `set_state`.
///
/// An empty date resets to the empty week without touching the network.
/// The phase always returns to idle, whatever the outcome.
pub async fn load_published_week(
    api: &ApiClient,
    set_state: WriteSignal<ScheduleState>,
    week_start_date: String,
) -> Result<(), String> {
    if week_start_date.is_empty() {
        set_state.update(|state| state.reset(""));
        return Ok(());
    }

    let Some(generation) = set_state.try_update(|state| state.begin_load()) else {
        return Ok(());
    };

    let outcome = api
        .get_published_week(&week_start_date)
        .await
        .map(|payload| ScheduleWeek::from_payload(&payload, &week_start_date));

    let failure = match &outcome {
        Ok(_) => None,
        Err(error) => {
            warn!("failed to load week {}: {}", week_start_date, error);
            Some(error.message.clone())
        }
    };

    set_state.update(|state| state.finish(generation, &week_start_date, outcome));

    match failure {
        Some(message) => Err(message),
        None => Ok(()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::WeekStatus;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn default_state_is_idle_with_the_empty_week() {
        let state = ScheduleState::default();
        assert!(!state.loading());
        assert_eq!(state.week, ScheduleWeek::empty(""));
        assert_eq!(state.error, None);
    }

    #[test]
    fn begin_load_clears_a_previous_error() {
        let mut state = ScheduleState::default();
        let generation = state.begin_load();
        state.finish(
            generation,
            "2024-01-07",
            Err(ApiError::transport("boom")),
        );
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.begin_load();
        assert!(state.loading());
        assert_eq!(state.error, None);
    }

    #[test]
    fn failed_load_resets_the_week_but_keeps_the_requested_date() {
        let mut state = ScheduleState::default();
        let generation = state.begin_load();
        state.finish(
            generation,
            "2024-01-07",
            Err(ApiError::http(404, "not found", json!({"message": "not found"}))),
        );
        assert!(!state.loading());
        assert_eq!(state.error.as_deref(), Some("not found"));
        assert_eq!(state.week, ScheduleWeek::empty("2024-01-07"));
    }

    #[test]
    fn stale_outcomes_are_dropped() {
        let mut state = ScheduleState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        let mut stale_week = ScheduleWeek::empty("2024-01-07");
        stale_week.week_status = WeekStatus::Published;
        state.finish(first, "2024-01-07", Ok(stale_week));
        assert!(state.loading(), "outcome of a superseded load must not land");

        state.finish(second, "2024-01-14", Ok(ScheduleWeek::empty("2024-01-14")));
        assert!(!state.loading());
        assert_eq!(state.week.week_start_date, "2024-01-14");
    }

    #[test]
    fn reset_invalidates_loads_in_flight() {
        let mut state = ScheduleState::default();
        let generation = state.begin_load();
        state.reset("");
        state.finish(
            generation,
            "2024-01-07",
            Err(ApiError::transport("late failure")),
        );
        assert_eq!(state.error, None);
        assert_eq!(state.week, ScheduleWeek::empty(""));
    }

    #[tokio::test]
    async fn empty_date_resets_without_touching_the_network() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/published-schedule/week");
            then.status(500);
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(ScheduleState::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        let result = load_published_week(&api, set_state, String::new()).await;

        assert_eq!(result, Ok(()));
        mock.assert_hits(0);
        let snapshot = state.get_untracked();
        assert!(!snapshot.loading());
        assert_eq!(snapshot.error, None);
        assert_eq!(snapshot.week, ScheduleWeek::empty(""));
        runtime.dispose();
    }

    #[tokio::test]
    async fn successful_load_replaces_the_whole_snapshot() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/published-schedule/week")
                .query_param("weekStartDate", "2024-01-07");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "workspace": {"id": 3, "name": "Bakery"},
                    "weekStartDate": "2024-01-07",
                    "weekStatus": "published",
                    "days": [{"date": "2024-01-07", "shifts": []}]
                }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(ScheduleState::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        let result = load_published_week(&api, set_state, "2024-01-07".into()).await;

        assert_eq!(result, Ok(()));
        let snapshot = state.get_untracked();
        assert!(!snapshot.loading());
        assert_eq!(snapshot.error, None);
        assert_eq!(
            snapshot.week.workspace.as_ref().map(|w| w.name.as_str()),
            Some("Bakery")
        );
        assert_eq!(snapshot.week.week_status, WeekStatus::Published);
        runtime.dispose();
    }

    #[tokio::test]
    async fn payload_without_days_normalizes_to_an_empty_list() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/published-schedule/week");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "weekStartDate": "2024-01-07",
                    "weekStatus": "published"
                }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(ScheduleState::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        load_published_week(&api, set_state, "2024-01-07".into())
            .await
            .unwrap();

        let snapshot = state.get_untracked();
        assert!(snapshot.week.days.is_empty());
        assert_eq!(snapshot.week.week_status, WeekStatus::Published);
        runtime.dispose();
    }

    #[tokio::test]
    async fn http_error_sets_the_message_and_resets_the_week() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/published-schedule/week");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(json!({"message": "not found"}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(ScheduleState::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        let result = load_published_week(&api, set_state, "2024-01-07".into()).await;

        assert_eq!(result, Err("not found".to_string()));
        let snapshot = state.get_untracked();
        assert!(!snapshot.loading());
        assert_eq!(snapshot.error.as_deref(), Some("not found"));
        assert_eq!(snapshot.week, ScheduleWeek::empty("2024-01-07"));
        runtime.dispose();
    }
}
