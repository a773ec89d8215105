pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, company_service::CompanyService,
    event_service::EventService, field_service::FieldService, history_service::HistoryService,
    vacancy_service::VacancyService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub vacancy_service: VacancyService,
    pub company_service: CompanyService,
    pub application_service: ApplicationService,
    pub event_service: EventService,
    pub field_service: FieldService,
    pub history_service: HistoryService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let vacancy_service = VacancyService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let event_service = EventService::new(pool.clone());
        let field_service = FieldService::new(pool.clone());
        let history_service = HistoryService::new(pool.clone());

        Self {
            pool,
            vacancy_service,
            company_service,
            application_service,
            event_service,
            field_service,
            history_service,
        }
    }
}
