//! depsinfo - size and library breakdown for a module dependency graph.

use anyhow::Result;
use clap::Parser;
use depsinfo_cli::commands::{self, AnalysisRunOptions};
use depsinfo_cli::logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "depsinfo", version)]
#[command(
    about = "Show how much each dependency adds to a module graph, and where each library comes from",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Script path or URL to analyze, or `-` to read a report from stdin
    ///
    /// Examples:
    ///   depsinfo main.ts
    ///   depsinfo https://deno.land/x/cliffy@v0.25.0/mod.ts
    ///   deno info --json main.ts | depsinfo -
    #[arg(value_name = "FILE-OR-URL")]
    target: Option<String>,

    /// Read a saved report instead of running the analysis command
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum)]
    format: Option<OutputFormat>,

    /// Output JSON format (alias for --output json)
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Executable used to produce the report
    #[arg(long, value_name = "PATH")]
    deno: Option<String>,

    /// Seconds to wait for the report command
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Exit with an error if any root can't be analyzed
    #[arg(long)]
    strict: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the "Unique libraries used" section
    #[arg(long)]
    no_libraries: bool,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Manage depsinfo configuration
    Config {
        /// Configuration file path
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: commands::ConfigCommand,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

impl From<OutputFormat> for depsinfo_config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => depsinfo_config::OutputFormat::Human,
            OutputFormat::Json => depsinfo_config::OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Some(Command::Config { config, command }) => {
            commands::handle_config_command(command, config)
        }
        None => {
            let format = if cli.json {
                Some(depsinfo_config::OutputFormat::Json)
            } else {
                cli.format.map(Into::into)
            };

            commands::run_analysis(&AnalysisRunOptions {
                target: cli.target,
                report: cli.report,
                config: cli.config,
                format,
                deno: cli.deno,
                timeout_secs: cli.timeout,
                strict: cli.strict,
                no_color: cli.no_color,
                no_libraries: cli.no_libraries,
            })
        }
    }
}
