//! Output formatters for analysis results.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use depsinfo_core::Analysis;

/// Trait for formatting analysis results
pub trait Formatter {
    /// Format and print the analysis results
    fn format(&self, analysis: &Analysis);
}

impl Formatter for HumanFormatter {
    fn format(&self, analysis: &Analysis) {
        human::print_results(analysis, self.show_libraries);
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, analysis: &Analysis) {
        json::print_json(analysis);
    }
}
