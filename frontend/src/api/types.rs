use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStatus {
    #[default]
    Draft,
    Published,
}

impl WeekStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WeekStatus::Draft => "draft",
            WeekStatus::Published => "published",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedShift {
    #[serde(default)]
    pub scheduled_shift_id: i64,
    #[serde(default)]
    pub shift_template_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

impl AssignedShift {
    /// Identity pair used as a rendering key; uniqueness is the server's
    /// concern, not this crate's.
    pub fn render_key(&self) -> String {
        format!("{}:{}", self.scheduled_shift_id, self.shift_template_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub shifts: Vec<AssignedShift>,
}

/// One fully-replaced snapshot of a published week. Loads never merge into
/// a previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWeek {
    #[serde(default)]
    pub workspace: Option<WorkspaceRef>,
    #[serde(default)]
    pub week_start_date: String,
    #[serde(default)]
    pub week_status: WeekStatus,
    #[serde(default)]
    pub days: Vec<ScheduleDay>,
}

impl Default for ScheduleWeek {
    fn default() -> Self {
        Self::empty("")
    }
}

impl ScheduleWeek {
    pub fn empty(week_start_date: impl Into<String>) -> Self {
        Self {
            workspace: None,
            week_start_date: week_start_date.into(),
            week_status: WeekStatus::Draft,
            days: Vec::new(),
        }
    }

    /// Normalize a raw payload field by field. A missing or malformed field
    /// falls back to its empty-week default; the week start falls back to
    /// the date that was requested.
    pub fn from_payload(payload: &Value, requested_start: &str) -> Self {
        Self {
            workspace: field(payload, "workspace"),
            week_start_date: field::<String>(payload, "weekStartDate")
                .unwrap_or_else(|| requested_start.to_string()),
            week_status: field(payload, "weekStatus").unwrap_or_default(),
            days: field(payload, "days").unwrap_or_default(),
        }
    }
}

fn field<T: DeserializeOwned>(payload: &Value, key: &str) -> Option<T> {
    payload
        .get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub data: Option<Value>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            data: None,
        }
    }

    pub fn http(status: u16, message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
            data: Some(data),
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}
