pub mod auth;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod onboarding;
pub mod templates_structs;
