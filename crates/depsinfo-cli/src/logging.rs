//! Log setup for the CLI.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact stderr logger.
///
/// `RUST_LOG` takes precedence; otherwise `-v` raises depsinfo's level to
/// info and `-vv` to debug. Logs go to stderr so JSON on stdout stays clean.
pub fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "depsinfo_cli=warn,depsinfo_core=warn",
        1 => "depsinfo_cli=info,depsinfo_core=info",
        _ => "depsinfo_cli=debug,depsinfo_core=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
