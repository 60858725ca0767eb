pub mod app_config;

pub use app_config::{AppConfig, ConfigError, DEFAULT_LAB_PATTERN_ID};
