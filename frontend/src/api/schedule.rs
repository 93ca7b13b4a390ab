use serde_json::Value;

use super::client::ApiClient;
use super::types::ApiError;

impl ApiClient {
    /// GET the published schedule for the week starting at `week_start_date`
    /// (ISO date). Returns the raw payload; normalization happens at the
    /// loading layer.
    pub async fn get_published_week(&self, week_start_date: &str) -> Result<Value, ApiError> {
        self.get_json(
            "/published-schedule/week",
            &[("weekStartDate", week_start_date)],
        )
        .await
    }
}
