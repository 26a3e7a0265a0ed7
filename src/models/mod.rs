pub mod config;
pub mod case_models;
pub mod uptime_models;
pub mod bot_models;
