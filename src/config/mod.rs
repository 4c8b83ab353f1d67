pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{AppConfig, AuthConfig, GeneralConfig, LoggingConfig, StoreConfig};
pub use envconfig::EnvConfig;
