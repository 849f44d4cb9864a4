use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Optional exact-date filter shared by the list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateFilter {
    /// Only return records logged on this date (`YYYY-MM-DD`)
    pub date: Option<String>,
}

impl DateFilter {
    /// The requested date, treating an empty value as no filter.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|date| !date.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_date_means_no_filter() {
        let filter = DateFilter {
            date: Some(String::new()),
        };
        assert_eq!(filter.date(), None);
    }

    #[test]
    fn test_date_filter_is_passed_through_verbatim() {
        let filter = DateFilter {
            date: Some("2024-01-01".to_string()),
        };
        assert_eq!(filter.date(), Some("2024-01-01"));
    }
}
