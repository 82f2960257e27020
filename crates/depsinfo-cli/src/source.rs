//! Acquisition of the module-dependency report.
//!
//! The report comes from stdin, from a saved file, or from running
//! `<deno> info --json <target>`. Every source is read to completion inside
//! one scope; a spawned command is killed if we stop waiting for it.

use anyhow::{bail, Context, Result};
use depsinfo_core::Report;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Where the report is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    /// Report JSON piped on standard input.
    Stdin,
    /// Report JSON saved to a file.
    File(PathBuf),
    /// Run the analysis command against a script path or URL.
    Command {
        program: String,
        target: String,
        timeout: Duration,
    },
}

impl ReportSource {
    /// Chooses the source from command-line input.
    ///
    /// `--report` wins; a target of `-` means stdin; anything else is
    /// analyzed by running `program`.
    pub fn from_args(
        target: Option<&str>,
        report: Option<PathBuf>,
        program: &str,
        timeout: Duration,
    ) -> Result<Self> {
        if let Some(path) = report {
            return Ok(ReportSource::File(path));
        }
        match target {
            Some("-") => Ok(ReportSource::Stdin),
            Some(target) => Ok(ReportSource::Command {
                program: program.to_string(),
                target: target.to_string(),
                timeout,
            }),
            None => bail!("No script given. Pass a file or URL, '-' for stdin, or --report <PATH>"),
        }
    }

    /// Reads and parses the report.
    pub async fn read(&self) -> Result<Report> {
        let text = match self {
            ReportSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read report from stdin")?;
                text
            }
            ReportSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read report file {}", path.display()))?,
            ReportSource::Command {
                program,
                target,
                timeout,
            } => run_info_command(program, target, *timeout).await?,
        };

        debug!(bytes = text.len(), "read report");
        Report::from_json(&text).context("Failed to parse module report")
    }
}

async fn run_info_command(program: &str, target: &str, timeout: Duration) -> Result<String> {
    info!(program, target, "running {} info --json", program);

    let child = Command::new(program)
        .args(["info", "--json", target])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("Failed to run '{}'. Is it installed and on PATH?", program))?;

    // Dropping the wait future on timeout drops the child, which kills it
    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .with_context(|| {
            format!(
                "'{} info --json {}' did not finish within {}s",
                program,
                target,
                timeout.as_secs()
            )
        })?
        .with_context(|| format!("Failed to wait for '{}'", program))?;

    if !output.status.success() {
        bail!(
            "'{} info --json {}' failed with {}",
            program,
            target,
            output.status
        );
    }

    String::from_utf8(output.stdout).context("Report output is not valid UTF-8")
}
