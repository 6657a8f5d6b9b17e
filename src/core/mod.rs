pub mod auth;
pub mod clock;
pub mod config;
pub mod log;
pub mod report;
pub mod service;
