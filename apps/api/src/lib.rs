pub mod config;
pub mod contact;
pub mod errors;
pub mod models;
pub mod resume;
pub mod routes;
pub mod state;
pub mod telemetry;
