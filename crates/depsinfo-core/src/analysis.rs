//! Per-root analysis over a whole report.

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphStats};
use crate::libraries::{LibraryCollector, LibraryProvenance};
use crate::redirect;
use crate::report::Report;
use crate::size::{SizeAnalyzer, SizeAttribution};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

/// Results for every root of a report.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub roots: Vec<RootAnalysis>,
    /// Roots that produced no output, with the reason.
    pub skipped: Vec<SkippedRoot>,
    pub stats: GraphStats,
}

/// Size attribution and library provenance for one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootAnalysis {
    /// Root specifier as listed in the report.
    pub requested: String,
    /// Root specifier after following redirects.
    pub specifier: String,
    /// Whether the root module declares any dependency edges.
    pub has_dependencies: bool,
    pub size: SizeAttribution,
    pub libraries: LibraryProvenance,
}

/// A root that could not be analyzed.
#[derive(Debug, Serialize)]
pub struct SkippedRoot {
    pub requested: String,
    #[serde(serialize_with = "serialize_error")]
    pub reason: Error,
}

fn serialize_error<S: Serializer>(error: &Error, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl Analysis {
    /// Builds the graph and analyzes every root in report order.
    ///
    /// Roots that fail to resolve are recorded in [`Analysis::skipped`] and
    /// don't stop the remaining roots.
    ///
    /// # Errors
    /// Returns `Error::MalformedReport` if the graph can't be built.
    pub fn run(report: &Report) -> Result<Self> {
        let graph = Graph::build(report)?;
        let stats = graph.stats();
        debug!(
            modules = stats.modules,
            edges = stats.edges,
            unresolved = stats.unresolved_edges,
            "built module graph"
        );

        let redirects = report.redirects();
        let mut roots = Vec::with_capacity(report.roots.len());
        let mut skipped = Vec::new();

        for requested in &report.roots {
            let analyzed = redirect::resolve(&redirects, requested)
                .and_then(|specifier| analyze_root(&graph, requested, specifier));

            match analyzed {
                Ok(root) => roots.push(root),
                Err(reason) => {
                    warn!(root = %requested, "skipping root: {}", reason);
                    skipped.push(SkippedRoot {
                        requested: requested.clone(),
                        reason,
                    });
                }
            }
        }

        Ok(Self {
            roots,
            skipped,
            stats,
        })
    }
}

/// Analyzes a single, already redirect-resolved root.
///
/// # Errors
/// Returns `Error::RootNotFound` if `specifier` isn't a module of `graph`.
pub fn analyze_root(graph: &Graph, requested: &str, specifier: String) -> Result<RootAnalysis> {
    let id = graph
        .id_of(&specifier)
        .ok_or_else(|| Error::RootNotFound {
            specifier: specifier.clone(),
        })?;
    let module = graph.module(id);

    let size = SizeAnalyzer::attribute(graph, module);
    let libraries = LibraryCollector::collect(graph, id);
    debug!(
        root = %specifier,
        dependencies = size.dependencies.len(),
        libraries = libraries.len(),
        "analyzed root"
    );

    Ok(RootAnalysis {
        requested: requested.to_string(),
        has_dependencies: !module.dependencies.is_empty(),
        specifier,
        size,
        libraries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirected_root() {
        let report = Report::from_json(
            r#"{
                "roots": ["https://x.land/mod.ts"],
                "redirects": {"https://x.land/mod.ts": "https://x.land/lib@2.0.0/mod.ts"},
                "modules": [{"specifier": "https://x.land/lib@2.0.0/mod.ts", "size": 4}]
            }"#,
        )
        .unwrap();

        let analysis = Analysis::run(&report).unwrap();
        assert_eq!(analysis.roots.len(), 1);
        let root = &analysis.roots[0];
        assert_eq!(root.requested, "https://x.land/mod.ts");
        assert_eq!(root.specifier, "https://x.land/lib@2.0.0/mod.ts");
        assert!(!root.has_dependencies);
        assert!(root.size.dependencies.is_empty());
    }

    #[test]
    fn test_per_root_failures_do_not_abort() {
        let report = Report::from_json(
            r#"{
                "roots": ["loop", "missing", "ok"],
                "redirects": {"loop": "loop2", "loop2": "loop"},
                "modules": [{"specifier": "ok", "size": 1}]
            }"#,
        )
        .unwrap();

        let analysis = Analysis::run(&report).unwrap();
        assert_eq!(analysis.roots.len(), 1);
        assert_eq!(analysis.roots[0].specifier, "ok");

        assert_eq!(analysis.skipped.len(), 2);
        assert!(matches!(analysis.skipped[0].reason, Error::RedirectCycle { .. }));
        assert!(matches!(analysis.skipped[1].reason, Error::RootNotFound { .. }));
        assert!(analysis.skipped.iter().all(|s| s.reason.is_per_root()));
    }

    #[test]
    fn test_malformed_report_is_fatal() {
        let report = Report::from_json(
            r#"{"roots": ["a"], "modules": [{"specifier": "a"}]}"#,
        )
        .unwrap();

        assert!(matches!(
            Analysis::run(&report),
            Err(Error::MalformedReport { .. })
        ));
    }
}
