pub mod ai;
pub mod config;
pub mod core;
pub mod error;
pub mod logger;
pub mod services;
pub mod ui;
