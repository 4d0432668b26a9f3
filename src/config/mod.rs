//! Application and provider configuration

mod app_config;
mod provider_config;

pub use app_config::{AppConfig, LogFormat, LoggingConfig, ServerConfig, UiConfig};
pub use provider_config::{PROVIDER_ENV_VARS, ProviderConfig};
