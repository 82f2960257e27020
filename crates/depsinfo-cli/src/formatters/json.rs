//! JSON formatter for analysis results.

use depsinfo_core::Analysis;

pub struct JsonFormatter;

pub fn print_json(analysis: &Analysis) {
    match serde_json::to_string_pretty(analysis) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}
