pub mod backend;
pub mod config;
pub mod domain;
pub mod routes;
pub mod run;
pub mod startup;
pub mod telemetry;
pub mod utils;
