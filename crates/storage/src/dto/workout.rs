use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::ValidationErrors;

use super::validation::{PayloadFields, parse_calendar_date};
use crate::models::WorkoutTotals;

/// Request payload for logging a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl CreateWorkoutRequest {
    /// Validates a raw JSON body, reporting every invalid field.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = PayloadFields::new(payload);

        let name = fields.name("name");
        let sets = fields.count("sets");
        let reps = fields.count("reps");
        let date = fields.date("date");

        match (name, sets, reps, date) {
            (Some(name), Some(sets), Some(reps), Some(date)) if fields.is_clean() => Ok(Self {
                name,
                sets,
                reps,
                date,
            }),
            _ => Err(fields.into_errors()),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeeklySummaryQuery {
    /// First day of the 7-day window (`YYYY-MM-DD`)
    pub start_date: Option<String>,
}

/// Inclusive date range covered by a weekly summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SummaryWindow {
    pub const DAYS: u64 = 7;

    /// Dates are compared as `YYYY-MM-DD` strings, so the window must end
    /// within four-digit years.
    pub fn starting(start: NaiveDate) -> Option<Self> {
        let end = start.checked_add_days(Days::new(Self::DAYS - 1))?;
        if end.year() > 9999 {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl WeeklySummaryQuery {
    pub fn window(&self) -> Result<SummaryWindow, String> {
        let start_date = self
            .start_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "start_date is required".to_string())?;

        parse_calendar_date(start_date)
            .and_then(SummaryWindow::starting)
            .ok_or_else(|| "Invalid start_date format".to_string())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthlySummaryQuery {
    /// Month to aggregate (`YYYY-MM`), matched as a date prefix
    pub month: Option<String>,
}

impl MonthlySummaryQuery {
    pub fn month(&self) -> Result<&str, String> {
        self.month
            .as_deref()
            .filter(|m| !m.is_empty())
            .ok_or_else(|| "month is required".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeeklySummaryResponse {
    pub total_sets: i64,
    pub total_reps: i64,
    /// Number of distinct exercise names in the window
    pub unique_exercises: i64,
    pub start_date: String,
    pub end_date: String,
}

impl WeeklySummaryResponse {
    pub fn new(window: &SummaryWindow, totals: WorkoutTotals) -> Self {
        Self {
            total_sets: totals.total_sets,
            total_reps: totals.total_reps,
            unique_exercises: totals.unique_exercises,
            start_date: window.start_str(),
            end_date: window.end_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlySummaryResponse {
    pub total_sets: i64,
    pub total_reps: i64,
    pub unique_exercises: i64,
    pub month: String,
}

impl MonthlySummaryResponse {
    pub fn new(month: &str, totals: WorkoutTotals) -> Self {
        Self {
            total_sets: totals.total_sets,
            total_reps: totals.total_reps,
            unique_exercises: totals.unique_exercises,
            month: month.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_workout_payload() {
        let payload = json!({ "name": "Squat", "sets": 5, "reps": 5, "date": "2024-01-01", "id": 99 });
        let req = CreateWorkoutRequest::from_json(&payload).unwrap();

        assert_eq!(
            req,
            CreateWorkoutRequest {
                name: "Squat".to_string(),
                sets: 5,
                reps: 5,
                date: "2024-01-01".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_reps_is_named() {
        let payload = json!({ "name": "Squat", "sets": 5, "date": "2024-01-01" });
        let errors = CreateWorkoutRequest::from_json(&payload).unwrap_err();

        let fields = errors.field_errors();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("reps"));
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let payload = json!({ "name": "", "sets": -2, "reps": "ten", "date": "yesterday" });
        let errors = CreateWorkoutRequest::from_json(&payload).unwrap_err();

        assert_eq!(errors.field_errors().len(), 4);
    }

    #[test]
    fn test_weekly_window_spans_seven_days() {
        let query = WeeklySummaryQuery {
            start_date: Some("2024-01-01".to_string()),
        };
        let window = query.window().unwrap();

        assert_eq!(window.start_str(), "2024-01-01");
        assert_eq!(window.end_str(), "2024-01-07");
    }

    #[test]
    fn test_weekly_window_crosses_month_and_year() {
        let query = WeeklySummaryQuery {
            start_date: Some("2024-12-28".to_string()),
        };
        assert_eq!(query.window().unwrap().end_str(), "2025-01-03");
    }

    #[test]
    fn test_weekly_window_requires_start_date() {
        let missing = WeeklySummaryQuery { start_date: None };
        assert_eq!(missing.window().unwrap_err(), "start_date is required");

        let empty = WeeklySummaryQuery {
            start_date: Some(String::new()),
        };
        assert_eq!(empty.window().unwrap_err(), "start_date is required");
    }

    #[test]
    fn test_weekly_window_rejects_malformed_dates() {
        for start_date in ["2024-13-01", "01/01/2024", "2024-1-1"] {
            let query = WeeklySummaryQuery {
                start_date: Some(start_date.to_string()),
            };
            assert_eq!(query.window().unwrap_err(), "Invalid start_date format");
        }
    }

    #[test]
    fn test_weekly_window_must_end_before_year_10000() {
        let last = WeeklySummaryQuery {
            start_date: Some("9999-12-25".to_string()),
        };
        assert_eq!(last.window().unwrap().end_str(), "9999-12-31");

        let overflowing = WeeklySummaryQuery {
            start_date: Some("9999-12-30".to_string()),
        };
        assert_eq!(overflowing.window().unwrap_err(), "Invalid start_date format");
    }

    #[test]
    fn test_month_is_required_but_not_format_checked() {
        let missing = MonthlySummaryQuery { month: None };
        assert_eq!(missing.month().unwrap_err(), "month is required");

        let garbage = MonthlySummaryQuery {
            month: Some("soon".to_string()),
        };
        assert_eq!(garbage.month().unwrap(), "soon");
    }
}
