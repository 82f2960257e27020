pub mod manager;
pub mod security;
pub mod types;

pub use manager::{ConfigError, ConfigManager};
pub use security::{validate_executable, validate_settings, validate_timeout, SecurityError};
pub use types::{DepsinfoConfig, OutputFormat, Settings};
