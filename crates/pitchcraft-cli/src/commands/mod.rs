//! CLI command handlers

pub mod build_db;
pub mod config;
pub mod resolve;
pub mod sample;

pub use build_db::run_build_db;
pub use config::run_show_config;
pub use resolve::run_resolve;
pub use sample::run_sample;
