pub mod application;
pub mod company;
pub mod event;
pub mod export;
pub mod field;
pub mod health;
pub mod vacancy;

use crate::error::{Error, Result};
use crate::middleware::identity::CurrentUser;
use crate::models::enums::Role;

/// Path ids arrive as raw segments; anything non-numeric is a client error,
/// not a server fault.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| Error::BadRequest(format!("Invalid {} ID", entity)))
}

/// Partners may only manage their own company's listings. Admin identities
/// and gateway-level callers without identity pass through.
pub(crate) fn ensure_can_manage(user: Option<&CurrentUser>, company_id: i64) -> Result<()> {
    if let Some(CurrentUser(user)) = user {
        if user.role == Role::Partner.code() && user.company_id != Some(company_id) {
            return Err(Error::Forbidden(
                "Vacancy belongs to another company".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42", "vacancy").unwrap(), 42);
    }

    #[test]
    fn non_numeric_ids_are_client_errors() {
        let err = parse_id("new", "vacancy").unwrap_err();
        assert!(err.to_string().contains("Invalid vacancy ID"));
        assert!(parse_id("12abc", "company").is_err());
    }
}
