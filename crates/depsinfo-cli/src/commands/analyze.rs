//! Analysis run: load settings, acquire the report, analyze, print.

use crate::formatters::{Formatter, HumanFormatter, JsonFormatter};
use crate::source::ReportSource;
use anyhow::{bail, Context, Result};
use depsinfo_config::{validate_settings, ConfigManager, OutputFormat, Settings};
use depsinfo_core::Analysis;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::info;

/// Options for running analysis, as given on the command line.
///
/// `None` / `false` means "use the config file value".
#[derive(Debug, Default)]
pub struct AnalysisRunOptions {
    pub target: Option<String>,
    pub report: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub deno: Option<String>,
    pub timeout_secs: Option<u64>,
    pub strict: bool,
    pub no_color: bool,
    pub no_libraries: bool,
}

impl AnalysisRunOptions {
    /// Applies command-line overrides on top of configured settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(format) = self.format {
            settings.output = format;
        }
        if let Some(deno) = &self.deno {
            settings.deno_path = deno.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.timeout_secs = timeout;
        }
        settings.strict_roots |= self.strict;
        settings.color &= !self.no_color;
        settings.show_libraries &= !self.no_libraries;
        settings
    }
}

/// Runs the analysis with the given options.
pub fn run_analysis(options: &AnalysisRunOptions) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;

    let (settings, report) = runtime.block_on(async {
        let settings = load_settings(options).await?;
        let source = ReportSource::from_args(
            options.target.as_deref(),
            options.report.clone(),
            &settings.deno_path,
            Duration::from_secs(settings.timeout_secs),
        )?;
        let report = source.read().await?;
        Ok::<_, anyhow::Error>((settings, report))
    })?;

    if !settings.color {
        colored::control::set_override(false);
    }

    let analysis = Analysis::run(&report).context("Failed to analyze module report")?;
    info!(
        roots = analysis.roots.len(),
        skipped = analysis.skipped.len(),
        modules = analysis.stats.modules,
        "analysis complete"
    );

    match settings.output {
        OutputFormat::Human => HumanFormatter {
            show_libraries: settings.show_libraries,
        }
        .format(&analysis),
        OutputFormat::Json => JsonFormatter.format(&analysis),
    }

    // Skipped roots were already logged during analysis
    if settings.strict_roots && !analysis.skipped.is_empty() {
        bail!(
            "{} root(s) could not be analyzed (strict mode)",
            analysis.skipped.len()
        );
    }

    Ok(())
}

async fn load_settings(options: &AnalysisRunOptions) -> Result<Settings> {
    let path = match &options.config {
        Some(path) => path.clone(),
        None => ConfigManager::config_path()?,
    };

    let manager = if options.config.is_some() {
        // An explicitly named config file must exist
        ConfigManager::load_from(&path).await
    } else {
        ConfigManager::load_or_default(&path).await
    }
    .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let settings = options.apply(manager.config().settings.clone());
    validate_settings(&settings).context("Invalid settings")?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let options = AnalysisRunOptions {
            format: Some(OutputFormat::Json),
            deno: Some("/opt/deno".to_string()),
            timeout_secs: Some(30),
            strict: true,
            no_color: true,
            no_libraries: true,
            ..Default::default()
        };

        let settings = options.apply(Settings::default());
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.deno_path, "/opt/deno");
        assert_eq!(settings.timeout_secs, 30);
        assert!(settings.strict_roots);
        assert!(!settings.color);
        assert!(!settings.show_libraries);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let configured = Settings {
            strict_roots: true,
            color: false,
            ..Default::default()
        };

        let settings = AnalysisRunOptions::default().apply(configured.clone());
        assert_eq!(settings, configured);
    }
}
