pub mod application_service;
pub mod company_service;
pub mod event_service;
pub mod export_service;
pub mod field_service;
pub mod history_service;
pub mod vacancy_service;
