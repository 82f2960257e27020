use anyhow::{Context, Result};
use clap::Subcommand;
use depsinfo_config::{ConfigManager, DepsinfoConfig};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Initialize config file at ~/.depsinfo/config.toml
    Init,

    /// Show config file path
    Path,

    /// Print the effective settings (defaults when no file exists)
    Show,

    /// Validate config file
    Validate,
}

/// Runs a `config` subcommand against `path`, or the default location.
pub fn handle_config_command(cmd: ConfigCommand, path: Option<PathBuf>) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let config_path = match path {
        Some(path) => path,
        None => ConfigManager::config_path()?,
    };

    runtime.block_on(async {
        match cmd {
            ConfigCommand::Init => init_config(&config_path).await,
            ConfigCommand::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
            ConfigCommand::Show => show_config(&config_path).await,
            ConfigCommand::Validate => validate_config(&config_path).await,
        }
    })
}

async fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Config already exists at: {}", config_path.display());
        println!("To reinitialize, please delete the existing config first.");
        return Ok(());
    }

    let manager = ConfigManager::init_at(config_path).await?;
    println!("✓ Initialized config at: {}", manager.path().display());
    Ok(())
}

async fn show_config(config_path: &Path) -> Result<()> {
    let manager = ConfigManager::load_or_default(config_path)
        .await
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    print!("{}", render_config(manager.config())?);
    Ok(())
}

fn render_config(config: &DepsinfoConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

async fn validate_config(config_path: &Path) -> Result<()> {
    let manager = ConfigManager::load_from(config_path)
        .await
        .context("Config not found or invalid. Run 'depsinfo config init' first.")?;

    let settings = &manager.config().settings;

    println!("✓ Config is valid");
    println!("  Version: {}", manager.config().version);
    println!("  Deno: {}", settings.deno_path);
    println!("  Timeout: {}s", settings.timeout_secs);
    println!("  Output: {}", settings.output);
    Ok(())
}
