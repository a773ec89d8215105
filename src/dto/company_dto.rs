use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::utils::validation::require_trimmed;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompanyPayload {
    #[validate(length(max = 255, message = "Must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry: String,
    pub logo_url: Option<String>,
}

impl CreateCompanyPayload {
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        require_trimmed(&mut errors, "name", &self.name);
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCompanyPayload {
    #[validate(length(max = 255, message = "Must be at most 255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub logo_url: Option<String>,
}

impl UpdateCompanyPayload {
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        if let Some(name) = &self.name {
            require_trimmed(&mut errors, "name", name);
        }
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
