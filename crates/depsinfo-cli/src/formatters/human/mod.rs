//! Human-readable formatter for analysis results.

mod libraries;
mod sizes;

#[cfg(test)]
mod tests;

use colored::*;
use depsinfo_core::{Analysis, RootAnalysis};
use std::fmt::Write;

pub struct HumanFormatter {
    pub show_libraries: bool,
}

pub fn print_results(analysis: &Analysis, show_libraries: bool) {
    print!("{}", render_results(analysis, show_libraries));
}

/// Renders every analyzed root, in report order.
pub fn render_results(analysis: &Analysis, show_libraries: bool) -> String {
    let mut out = String::new();
    for (idx, root) in analysis.roots.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        render_root(&mut out, root, show_libraries);
    }
    out
}

fn render_root(out: &mut String, root: &RootAnalysis, show_libraries: bool) {
    let _ = writeln!(out, "{}", root.specifier.bold().underline());

    if root.has_dependencies {
        let _ = writeln!(out, "{}", "\n  Dependencies:".bold());
        sizes::render_size_table(out, &root.size);
    }

    if show_libraries {
        let _ = writeln!(out, "{}", "\n  Unique libraries used:".bold());
        libraries::render_libraries(out, &root.libraries);
    }
}

/// Formats a byte count with decimal units, keeping three significant digits.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let exponent = ((bytes as f64).log10() / 3.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1000f64.powi(exponent as i32);

    // 3 significant digits, then drop trailing zeros
    let decimals = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    let mut text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    format!("{} {}", text, UNITS[exponent])
}
