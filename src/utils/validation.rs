//! Helpers for collecting validation: every rule appends to one
//! `ValidationErrors`, so a submission reports all of its violations
//! together, keyed by field.

use validator::{ValidationError, ValidationErrors};

pub fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// The field must contain something other than whitespace.
pub fn require_trimmed(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, field_error("blank", "This field cannot be blank"));
    }
}

/// Enum-coded field: if present, the code must belong to the vocabulary.
pub fn check_choice(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    is_member: fn(&str) -> bool,
) {
    if let Some(code) = value {
        if !code.is_empty() && !is_member(code) {
            errors.add(
                field,
                field_error("invalid_choice", "Value is not a valid choice"),
            );
        }
    }
}

/// Salary bounds: each non-negative, and min <= max when both are present.
/// A bounds violation is reported on both fields.
pub fn check_salary_bounds(
    errors: &mut ValidationErrors,
    salary_min: Option<i32>,
    salary_max: Option<i32>,
) {
    if let Some(min) = salary_min {
        if min < 0 {
            errors.add(
                "salary_min",
                field_error("min_value", "Must be non-negative"),
            );
        }
    }
    if let Some(max) = salary_max {
        if max < 0 {
            errors.add(
                "salary_max",
                field_error("min_value", "Must be non-negative"),
            );
        }
    }
    if let (Some(min), Some(max)) = (salary_min, salary_max) {
        if min >= 0 && max >= 0 && min > max {
            errors.add(
                "salary_min",
                field_error("salary_bounds", "salary_min must not exceed salary_max"),
            );
            errors.add(
                "salary_max",
                field_error("salary_bounds", "salary_min must not exceed salary_max"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_reported() {
        let mut errors = ValidationErrors::new();
        require_trimmed(&mut errors, "title", "   ");
        require_trimmed(&mut errors, "city", "Казань");
        assert!(errors.errors().contains_key("title"));
        assert!(!errors.errors().contains_key("city"));
    }

    #[test]
    fn inverted_salary_bounds_tag_both_fields() {
        let mut errors = ValidationErrors::new();
        check_salary_bounds(&mut errors, Some(200_000), Some(100_000));
        assert!(errors.errors().contains_key("salary_min"));
        assert!(errors.errors().contains_key("salary_max"));
    }

    #[test]
    fn valid_salary_bounds_pass() {
        let mut errors = ValidationErrors::new();
        check_salary_bounds(&mut errors, Some(100_000), Some(200_000));
        check_salary_bounds(&mut errors, Some(50_000), None);
        check_salary_bounds(&mut errors, None, None);
        assert!(errors.errors().is_empty());
    }

    #[test]
    fn negative_salary_is_reported() {
        let mut errors = ValidationErrors::new();
        check_salary_bounds(&mut errors, Some(-1), None);
        assert!(errors.errors().contains_key("salary_min"));
    }
}
