//! Dependency size table.

use super::format_bytes;
use colored::*;
use depsinfo_core::SizeAttribution;
use std::fmt::Write;

const INDENT: usize = 4;
const PADDING: usize = 2;
const HEADER: [&str; 4] = ["contributed", "isolated", "shared", "specifier"];

/// Renders one row per direct dependency plus a TOTAL row.
pub fn render_size_table(out: &mut String, size: &SizeAttribution) {
    let mut rows: Vec<[String; 4]> = size
        .dependencies
        .iter()
        .map(|dep| {
            [
                format_bytes(dep.contributed),
                format_bytes(dep.isolated),
                format_bytes(dep.shared),
                dep.specifier.clone(),
            ]
        })
        .collect();
    rows.push([
        format_bytes(size.total.contributed),
        format_bytes(size.total.isolated),
        format_bytes(size.total.shared),
        "TOTAL".to_string(),
    ]);

    // Widths come from the plain text so ANSI codes don't skew alignment
    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADER
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, width).bold().to_string())
        .collect();
    write_line(out, &header);

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width))
            .collect();
        write_line(out, &cells);
    }
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}

fn write_line(out: &mut String, cells: &[String]) {
    let line = cells.join(&" ".repeat(PADDING));
    let _ = writeln!(out, "{}{}", " ".repeat(INDENT), line.trim_end());
}
