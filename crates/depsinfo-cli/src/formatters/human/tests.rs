//! Tests for human formatter output.

use super::*;
use depsinfo_core::Report;

fn analysis(json: &str) -> Analysis {
    Analysis::run(&Report::from_json(json).unwrap()).unwrap()
}

fn plain() {
    colored::control::set_override(false);
}

const REPORT: &str = r#"{
    "roots": ["file:///app/main.ts"],
    "modules": [
        {"specifier": "file:///app/main.ts", "size": 100, "dependencies": [
            {"specifier": "./util.ts", "code": {"specifier": "file:///app/util.ts",
                "span": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 1}}}},
            {"specifier": "https://deno.land/std@0.160.0/fmt/colors.ts",
                "code": {"specifier": "https://deno.land/std@0.160.0/fmt/colors.ts",
                "span": {"start": {"line": 1, "character": 0}, "end": {"line": 1, "character": 1}}}}
        ]},
        {"specifier": "file:///app/util.ts", "size": 1500, "dependencies": [
            {"specifier": "https://deno.land/std@0.160.0/fmt/colors.ts",
                "code": {"specifier": "https://deno.land/std@0.160.0/fmt/colors.ts"}}
        ]},
        {"specifier": "https://deno.land/std@0.160.0/fmt/colors.ts", "size": 2048}
    ]
}"#;

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(999), "999 B");
    assert_eq!(format_bytes(1000), "1 kB");
    assert_eq!(format_bytes(1500), "1.5 kB");
    assert_eq!(format_bytes(2048), "2.05 kB");
    assert_eq!(format_bytes(12_345), "12.3 kB");
    assert_eq!(format_bytes(123_456), "123 kB");
    assert_eq!(format_bytes(2_350_000), "2.35 MB");
    assert_eq!(format_bytes(7_000_000_000), "7 GB");
}

#[test]
fn test_render_size_table() {
    plain();
    let output = render_results(&analysis(REPORT), false);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "file:///app/main.ts");
    assert!(output.contains("  Dependencies:"));
    assert!(lines
        .iter()
        .any(|l| l.trim_start().starts_with("contributed  isolated  shared")));

    let util = lines.iter().find(|l| l.ends_with("./util.ts")).unwrap();
    assert!(util.starts_with("    3.55 kB"));

    let colors = lines
        .iter()
        .find(|l| l.ends_with("https://deno.land/std@0.160.0/fmt/colors.ts"))
        .unwrap();
    let cells: Vec<&str> = colors.split("  ").filter(|c| !c.trim().is_empty()).collect();
    assert_eq!(cells[0].trim(), "0 B");
    assert_eq!(cells[1].trim(), "2.05 kB");
    assert_eq!(cells[2].trim(), "2.05 kB");

    let total = lines.last().unwrap();
    assert!(total.ends_with("TOTAL"));
    assert!(total.starts_with("    3.55 kB"));

    assert!(!output.contains("Unique libraries used"));
}

#[test]
fn test_columns_aligned() {
    plain();
    let output = render_results(&analysis(REPORT), false);
    let rows: Vec<&str> = output
        .lines()
        .skip_while(|l| !l.contains("contributed"))
        .collect();

    let specifier_col = rows[0].find("specifier").unwrap();
    for row in &rows[1..] {
        assert_eq!(
            row.char_indices().nth(specifier_col).map(|(_, c)| c != ' '),
            Some(true),
            "misaligned row: {row:?}"
        );
    }
}

#[test]
fn test_render_libraries() {
    plain();
    let output = render_results(&analysis(REPORT), true);

    assert!(output.contains("  Unique libraries used:"));
    assert!(output.contains("    https://deno.land/std@0.160.0, first included from:"));

    let chain: Vec<&str> = output
        .lines()
        .skip_while(|l| !l.contains("first included from"))
        .skip(1)
        .collect();
    // colors.ts is first reached through util.ts, printed deepest first
    assert_eq!(
        chain,
        vec![
            "      ↳ https://deno.land/std@0.160.0/fmt/colors.ts",
            "        ↳ file:///app/util.ts",
            "          ↳ file:///app/main.ts",
        ]
    );
}

#[test]
fn test_root_without_dependencies() {
    plain();
    let output = render_results(
        &analysis(r#"{"roots": ["a"], "modules": [{"specifier": "a", "size": 1}]}"#),
        true,
    );

    assert!(!output.contains("Dependencies:"));
    assert!(output.contains("Unique libraries used:"));
}

#[test]
fn test_multiple_roots_separated() {
    plain();
    let output = render_results(
        &analysis(
            r#"{"roots": ["a", "b"], "modules": [
                {"specifier": "a", "size": 1},
                {"specifier": "b", "size": 1}
            ]}"#,
        ),
        false,
    );

    assert_eq!(output, "a\n\nb\n");
}

#[test]
fn test_pretty_identity() {
    plain();
    assert_eq!(
        libraries::pretty_identity("https://deno.land/x/cliffy@v0.25.0"),
        "https://deno.land/x/cliffy@v0.25.0"
    );
}
