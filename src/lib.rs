pub mod api;
pub mod app;
pub mod config;
pub mod dataset;
pub mod ml;
pub mod telemetry;
pub mod weather;
