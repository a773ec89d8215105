use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::enums::{EmploymentType, Experience, ResponseType, Schedule};
use crate::models::vacancy::VacancyListRow;
use crate::services::vacancy_service::VacancyList;
use crate::utils::validation::{check_choice, check_salary_bounds, require_trimmed};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    #[validate(length(max = 255, message = "Must be at most 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub company_id: i64,
    pub field_id: Option<i64>,
    pub is_active: Option<bool>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub city: String,
    #[serde(default)]
    pub address: String,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub response_type: Option<String>,
    #[serde(default)]
    pub response_destination: String,
    pub requirements: String,
    pub responsibilities: String,
    pub conditions: String,
}

impl CreateVacancyPayload {
    /// Collects every violation before reporting; nothing fails fast.
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        require_trimmed(&mut errors, "title", &self.title);
        require_trimmed(&mut errors, "city", &self.city);
        require_trimmed(&mut errors, "requirements", &self.requirements);
        require_trimmed(&mut errors, "responsibilities", &self.responsibilities);
        require_trimmed(&mut errors, "conditions", &self.conditions);

        check_choice(&mut errors, "employment_type", self.employment_type.as_deref(), |c| {
            EmploymentType::parse(c).is_some()
        });
        check_choice(&mut errors, "experience", self.experience.as_deref(), |c| {
            Experience::parse(c).is_some()
        });
        check_choice(&mut errors, "schedule", self.schedule.as_deref(), |c| {
            Schedule::parse(c).is_some()
        });
        check_choice(&mut errors, "response_type", self.response_type.as_deref(), |c| {
            ResponseType::parse(c).is_some()
        });

        check_salary_bounds(&mut errors, self.salary_min, self.salary_max);

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateVacancyPayload {
    #[validate(length(max = 255, message = "Must be at most 255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub field_id: Option<i64>,
    pub is_active: Option<bool>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub response_type: Option<String>,
    pub response_destination: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub conditions: Option<String>,
}

impl UpdateVacancyPayload {
    /// Rules apply to the fields present in the patch. Salary bounds are
    /// checked against the values the row will hold after the merge, so the
    /// caller passes the stored bounds.
    pub fn validate_payload(
        &self,
        current_salary_min: Option<i32>,
        current_salary_max: Option<i32>,
    ) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        if let Some(title) = &self.title {
            require_trimmed(&mut errors, "title", title);
        }
        if let Some(city) = &self.city {
            require_trimmed(&mut errors, "city", city);
        }
        if let Some(requirements) = &self.requirements {
            require_trimmed(&mut errors, "requirements", requirements);
        }
        if let Some(responsibilities) = &self.responsibilities {
            require_trimmed(&mut errors, "responsibilities", responsibilities);
        }
        if let Some(conditions) = &self.conditions {
            require_trimmed(&mut errors, "conditions", conditions);
        }

        check_choice(&mut errors, "employment_type", self.employment_type.as_deref(), |c| {
            EmploymentType::parse(c).is_some()
        });
        check_choice(&mut errors, "experience", self.experience.as_deref(), |c| {
            Experience::parse(c).is_some()
        });
        check_choice(&mut errors, "schedule", self.schedule.as_deref(), |c| {
            Schedule::parse(c).is_some()
        });
        check_choice(&mut errors, "response_type", self.response_type.as_deref(), |c| {
            ResponseType::parse(c).is_some()
        });

        let merged_min = self.salary_min.or(current_salary_min);
        let merged_max = self.salary_max.or(current_salary_max);
        check_salary_bounds(&mut errors, merged_min, merged_max);

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: i64,
    pub name: String,
    pub industry: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: CompanySummary,
    pub field: Option<FieldSummary>,
    pub is_active: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub city: String,
    pub address: String,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub response_type: Option<String>,
    pub response_destination: String,
    pub requirements: String,
    pub responsibilities: String,
    pub conditions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    pub items: Vec<VacancyResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl From<VacancyListRow> for VacancyResponse {
    fn from(row: VacancyListRow) -> Self {
        let field = row
            .field_id
            .zip(row.field_name)
            .map(|(id, name)| FieldSummary { id, name });

        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            company: CompanySummary {
                id: row.company_id,
                name: row.company_name,
                industry: row.company_industry,
            },
            field,
            is_active: row.is_active,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            city: row.city,
            address: row.address,
            employment_type: row.employment_type,
            experience: row.experience,
            schedule: row.schedule,
            response_type: row.response_type,
            response_destination: row.response_destination,
            requirements: row.requirements,
            responsibilities: row.responsibilities,
            conditions: row.conditions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<VacancyList> for VacancyListResponse {
    fn from(value: VacancyList) -> Self {
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateVacancyPayload {
        CreateVacancyPayload {
            title: "Инженер-стажёр".into(),
            description: "Описание".into(),
            company_id: 1,
            field_id: None,
            is_active: None,
            salary_min: Some(100_000),
            salary_max: Some(200_000),
            city: "Казань".into(),
            address: "ул. Кремлёвская, 35".into(),
            employment_type: Some("full".into()),
            experience: Some("no".into()),
            schedule: Some("hybrid".into()),
            response_type: Some("internal".into()),
            response_destination: String::new(),
            requirements: "Rust".into(),
            responsibilities: "Писать код".into(),
            conditions: "ДМС".into(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate_payload().is_ok());
    }

    #[test]
    fn inverted_salary_bounds_rejected_on_both_fields() {
        let mut p = payload();
        p.salary_min = Some(200_000);
        p.salary_max = Some(100_000);
        let errors = p.validate_payload().unwrap_err();
        assert!(errors.errors().contains_key("salary_min"));
        assert!(errors.errors().contains_key("salary_max"));
    }

    #[test]
    fn all_violations_are_collected_together() {
        let mut p = payload();
        p.title = "  ".into();
        p.city = String::new();
        p.employment_type = Some("gig".into());
        p.salary_min = Some(2);
        p.salary_max = Some(1);
        let errors = p.validate_payload().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("city"));
        assert!(fields.contains_key("employment_type"));
        assert!(fields.contains_key("salary_min"));
        assert!(fields.contains_key("salary_max"));
    }

    #[test]
    fn update_merges_salary_with_stored_row() {
        let patch = UpdateVacancyPayload {
            title: None,
            description: None,
            field_id: None,
            is_active: None,
            salary_min: Some(300_000),
            salary_max: None,
            city: None,
            address: None,
            employment_type: None,
            experience: None,
            schedule: None,
            response_type: None,
            response_destination: None,
            requirements: None,
            responsibilities: None,
            conditions: None,
        };
        // Stored max of 250k makes the patched min invalid.
        let errors = patch.validate_payload(Some(80_000), Some(250_000)).unwrap_err();
        assert!(errors.errors().contains_key("salary_min"));
        // Without a stored max the same patch is fine.
        assert!(patch.validate_payload(Some(80_000), None).is_ok());
    }
}
