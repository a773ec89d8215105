use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::utils::validation::require_trimmed;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventPayload {
    #[validate(length(max = 255, message = "Must be at most 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub cover_image_url: String,
}

impl CreateEventPayload {
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        require_trimmed(&mut errors, "title", &self.title);
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEventPayload {
    #[validate(length(max = 255, message = "Must be at most 255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub cover_image_url: Option<String>,
}

impl UpdateEventPayload {
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        if let Some(title) = &self.title {
            require_trimmed(&mut errors, "title", title);
        }
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
