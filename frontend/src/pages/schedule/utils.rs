use crate::api::ScheduleWeek;
use crate::utils::time::{iso_date, today_in_app_tz, week_start_sunday};

/// Default selection: this week's Sunday in the app timezone, ISO formatted.
pub fn default_week_start() -> String {
    iso_date(week_start_sunday(today_in_app_tz()))
}

pub fn total_shifts(week: &ScheduleWeek) -> usize {
    week.days.iter().map(|day| day.shifts.len()).sum()
}

/// "HH:MM–HH:MM" from two "HH:MM:SS" strings. Inputs shorter than five
/// characters pass through unchanged.
pub fn shift_time_range(start: &str, end: &str) -> String {
    format!("{}–{}", minute_precision(start), minute_precision(end))
}

fn minute_precision(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}
