//! Raw module-dependency report, as emitted by `deno info --json`.
//!
//! These types mirror the JSON document one-to-one and are only validated
//! when turned into a [`Graph`](crate::graph::Graph). Fields the analysis
//! doesn't use are ignored on deserialization.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// The full report document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Every module known to the analysis.
    #[serde(default)]
    pub modules: Vec<ModuleRecord>,

    /// Entry point specifiers, in the order they were requested.
    #[serde(default)]
    pub roots: Vec<String>,

    /// Alias specifier -> specifier it redirects to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirects: Option<HashMap<String, String>>,
}

/// One module entry of the report.
///
/// `specifier` and `size` are optional here so that a missing field is
/// reported as [`Error::MalformedReport`] naming the module, rather than as
/// a bare deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<DependencyRecord>>,
}

/// A dependency as written in the importing module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// The specifier text as written in the import statement.
    pub specifier: String,

    /// The resolved code target, if resolution succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeRecord>,
}

/// Resolved code target of a dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeRecord {
    pub specifier: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Source range of an import statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: LineCol,
    pub end: LineCol,
}

/// Zero-based line and character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineCol {
    pub line: i64,
    pub character: i64,
}

impl Report {
    /// Parses a report from JSON text.
    ///
    /// # Errors
    /// Returns `Error::MalformedReport` if the text isn't a valid report document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a report from a reader, consuming it to the end.
    ///
    /// # Errors
    /// Returns `Error::Io` if reading fails and `Error::MalformedReport` if the
    /// content isn't a valid report document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Returns the redirect map, or an empty one when the report has none.
    pub fn redirects(&self) -> HashMap<String, String> {
        self.redirects.clone().unwrap_or_default()
    }
}

impl ModuleRecord {
    /// Returns the specifier and size, or why the record is unusable.
    pub(crate) fn validate(&self, index: usize) -> Result<(&str, u64)> {
        let specifier = self
            .specifier
            .as_deref()
            .ok_or_else(|| Error::malformed(format!("module #{} has no specifier", index)))?;

        let size = match self.size {
            None => {
                return Err(Error::malformed(format!(
                    "module '{}' has no size",
                    specifier
                )))
            }
            Some(size) if size < 0 => {
                return Err(Error::malformed(format!(
                    "module '{}' has negative size {}",
                    specifier, size
                )))
            }
            Some(size) => size as u64,
        };

        Ok((specifier, size))
    }
}
