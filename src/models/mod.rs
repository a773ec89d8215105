pub mod application;
pub mod company;
pub mod enums;
pub mod event;
pub mod field_of_study;
pub mod revision;
pub mod user;
pub mod vacancy;
