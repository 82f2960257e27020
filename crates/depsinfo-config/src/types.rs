use serde::{Deserialize, Serialize};
use std::fmt;

/// Main configuration structure for depsinfo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepsinfoConfig {
    /// Schema version for migrations
    pub version: String,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl Default for DepsinfoConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            settings: Settings::default(),
        }
    }
}

/// Settings applied to every analysis run unless overridden on the command line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Executable used to produce the report (`<deno_path> info --json <target>`)
    #[serde(default = "default_deno_path")]
    pub deno_path: String,

    /// Seconds to wait for the report command before giving up
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Colorize human output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Fail the run when a root can't be resolved instead of skipping it
    #[serde(default)]
    pub strict_roots: bool,

    /// Print the "Unique libraries used" section
    #[serde(default = "default_true")]
    pub show_libraries: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deno_path: default_deno_path(),
            timeout_secs: default_timeout_secs(),
            output: OutputFormat::default(),
            color: default_true(),
            strict_roots: false,
            show_libraries: default_true(),
        }
    }
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Default value functions
fn default_deno_path() -> String {
    "deno".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = DepsinfoConfig {
            version: "1.0".to_string(),
            settings: Settings {
                deno_path: "/opt/deno/bin/deno".to_string(),
                output: OutputFormat::Json,
                strict_roots: true,
                ..Default::default()
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("output = \"json\""));

        let parsed: DepsinfoConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_default_config() {
        let config = DepsinfoConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.settings.deno_path, "deno");
        assert_eq!(config.settings.timeout_secs, 120);
        assert_eq!(config.settings.output, OutputFormat::Human);
        assert!(config.settings.color);
        assert!(!config.settings.strict_roots);
        assert!(config.settings.show_libraries);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let parsed: DepsinfoConfig = toml::from_str(
            r#"
version = "1.0"

[settings]
color = false
"#,
        )
        .unwrap();

        assert!(!parsed.settings.color);
        assert_eq!(parsed.settings.deno_path, "deno");
        assert_eq!(parsed.settings.timeout_secs, 120);
    }

    #[test]
    fn test_missing_settings_table() {
        let parsed: DepsinfoConfig = toml::from_str("version = \"1.0\"\n").unwrap();
        assert_eq!(parsed.settings, Settings::default());
    }
}
