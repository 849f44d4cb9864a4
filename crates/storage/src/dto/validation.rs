use std::borrow::Cow;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

pub const NAME_MAX_LEN: usize = 100;

/// Largest accepted count. Summaries add counts up in 64-bit SQL integers, so
/// capping each one at the 32-bit range keeps any realistic total in bounds.
pub const COUNT_MAX: i64 = i32::MAX as i64;

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// chrono alone tolerates single-digit months and days, which would break the
/// lexicographic ordering the date columns rely on, so the shape is checked first.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let well_formed = text.len() == 10
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Reads typed fields out of a raw JSON payload.
///
/// Every problem is recorded against its field name and reading carries on, so
/// one pass reports all offending fields at once.
pub struct PayloadFields<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

impl<'a> PayloadFields<'a> {
    pub fn new(payload: &'a Value) -> Self {
        let mut errors = ValidationErrors::new();
        let object = payload.as_object();

        if object.is_none() {
            errors.add("_schema", field_error("invalid_type", "Invalid input type."));
        }

        Self { object, errors }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// Required, non-blank text of at most [`NAME_MAX_LEN`] characters.
    pub fn name(&mut self, field: &'static str) -> Option<String> {
        let value = self.required(field)?;

        let Some(text) = value.as_str() else {
            self.reject(field, "invalid_type", "Not a valid string.");
            return None;
        };

        if text.trim().is_empty() {
            self.reject(field, "length", "Must not be empty.");
            return None;
        }

        if text.chars().count() > NAME_MAX_LEN {
            self.reject(field, "length", "Must be at most 100 characters.");
            return None;
        }

        Some(text.to_string())
    }

    /// Required integer between 0 and [`COUNT_MAX`].
    pub fn count(&mut self, field: &'static str) -> Option<i64> {
        let value = self.required(field)?;

        let Some(count) = value.as_i64() else {
            self.reject(field, "invalid_type", "Not a valid integer.");
            return None;
        };

        if count < 0 {
            self.reject(field, "range", "Must be greater than or equal to 0.");
            return None;
        }

        if count > COUNT_MAX {
            self.reject(field, "range", "Must be less than or equal to 2147483647.");
            return None;
        }

        Some(count)
    }

    /// Required `YYYY-MM-DD` date, returned verbatim.
    pub fn date(&mut self, field: &'static str) -> Option<String> {
        let value = self.required(field)?;

        let Some(text) = value.as_str() else {
            self.reject(field, "invalid_type", "Not a valid string.");
            return None;
        };

        if parse_calendar_date(text).is_none() {
            self.reject(field, "date", "Not a valid date, expected YYYY-MM-DD.");
            return None;
        }

        Some(text.to_string())
    }

    /// Optional non-negative number. Absent and `null` both read as `None`.
    pub fn amount(&mut self, field: &'static str) -> Option<f64> {
        let value = self.optional(field)?;

        let Some(amount) = value.as_f64() else {
            self.reject(field, "invalid_type", "Not a valid number.");
            return None;
        };

        if amount < 0.0 {
            self.reject(field, "range", "Must be greater than or equal to 0.");
            return None;
        }

        Some(amount)
    }

    fn required(&mut self, field: &'static str) -> Option<&'a Value> {
        // A non-object payload was already reported under `_schema`
        let object = self.object?;

        match object.get(field) {
            None => {
                self.reject(field, "required", "Missing data for required field.");
                None
            }
            Some(Value::Null) => {
                self.reject(field, "null", "Field may not be null.");
                None
            }
            Some(value) => Some(value),
        }
    }

    fn optional(&self, field: &'static str) -> Option<&'a Value> {
        self.object?.get(field).filter(|value| !value.is_null())
    }

    fn reject(&mut self, field: &'static str, code: &'static str, message: &'static str) {
        self.errors.add(field, field_error(code, message));
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}
