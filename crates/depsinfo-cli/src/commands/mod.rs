pub mod analyze;
pub mod config;

pub use analyze::{run_analysis, AnalysisRunOptions};
pub use config::{handle_config_command, ConfigCommand};
