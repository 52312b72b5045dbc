pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod telemetry;

/// Campaign tag stamped on every signup and reported by the health check.
pub const SERVICE_NAME: &str = "tifekt-comingsoon";
