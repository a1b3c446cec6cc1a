//! Application logic for the fanout batch compute service.

pub mod app;
pub mod config;
pub mod errors;
