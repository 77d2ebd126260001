pub mod cache;
pub mod config;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

/// Company used when neither the caller nor `COMPANY_ID` names one.
pub const DEFAULT_COMPANY_ID: &str = "alfe";
