use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::utils::validation::require_trimmed;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFieldPayload {
    #[validate(length(max = 100, message = "Must be at most 100 characters"))]
    pub name: String,
}

impl CreateFieldPayload {
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
