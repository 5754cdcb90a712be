pub mod api;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod simulation;
pub mod telemetry;
