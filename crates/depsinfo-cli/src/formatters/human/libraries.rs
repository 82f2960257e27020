//! Unique libraries section.

use colored::*;
use depsinfo_core::libraries::split_identity;
use depsinfo_core::LibraryProvenance;
use std::fmt::Write;

/// Lists each library with the chain that first included it, deepest module first.
pub fn render_libraries(out: &mut String, libraries: &LibraryProvenance) {
    for (identity, chain) in libraries.iter() {
        let _ = writeln!(
            out,
            "    {}, first included from:",
            pretty_identity(identity)
        );
        for (level, specifier) in chain.iter().rev().enumerate() {
            let line = format!("      {}↳ {}", "  ".repeat(level), specifier);
            let _ = writeln!(out, "{}", line.bright_black());
        }
    }
}

/// `name@version` with the version highlighted.
pub fn pretty_identity(identity: &str) -> String {
    let (name, version) = split_identity(identity);
    format!("{}@{}", name, version.yellow())
}
