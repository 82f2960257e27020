//! In-memory module graph.
//!
//! Modules live in an arena indexed by [`ModuleId`]; a map from specifier to
//! id gives lookup by name. Edges are plain values holding the id of their
//! resolved target, so the graph has no pointer cycles and is never mutated
//! once [`Graph::build`] returns.

use crate::error::Result;
use crate::report::{LineCol, Report};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Index of a module inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ModuleId(pub(crate) usize);

/// A single module: its specifier, byte size, and ordered outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub specifier: String,
    pub size: u64,
    pub dependencies: Vec<DependencyEdge>,
}

/// A dependency edge from a module to another specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyEdge {
    /// Specifier text as written at the import site.
    pub specifier: String,
    /// Resolved code target specifier, if the import was resolved.
    pub code: Option<String>,
    /// Start position of the import statement.
    pub position: Option<LineCol>,
    /// Arena id of `code`, when that specifier is a module of the graph.
    pub target: Option<ModuleId>,
}

impl DependencyEdge {
    /// Ordering key: positioned edges by (line, character), then unpositioned ones.
    fn sort_key(&self) -> (bool, LineCol) {
        match self.position {
            Some(pos) => (false, pos),
            None => (
                true,
                LineCol {
                    line: 0,
                    character: 0,
                },
            ),
        }
    }
}

/// Summary counts over a built graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub modules: usize,
    pub edges: usize,
    /// Edges with no code target, or whose target isn't in the graph.
    pub unresolved_edges: usize,
    pub total_size: u64,
}

/// Read-only mapping from specifier to module.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    modules: Vec<Module>,
    index: HashMap<String, ModuleId>,
}

impl Graph {
    /// Builds the graph from a parsed report.
    ///
    /// Each module's edges are stably sorted by ascending source position,
    /// with edges lacking a position placed after all positioned ones.
    /// A module record that repeats an earlier specifier replaces it.
    ///
    /// # Errors
    /// Returns `Error::MalformedReport` if any record lacks a specifier or has
    /// a missing or negative size. No partial graph is returned.
    pub fn build(report: &Report) -> Result<Self> {
        let mut modules: Vec<Module> = Vec::with_capacity(report.modules.len());
        let mut index: HashMap<String, ModuleId> = HashMap::with_capacity(report.modules.len());

        for (i, record) in report.modules.iter().enumerate() {
            let (specifier, size) = record.validate(i)?;

            let mut dependencies: Vec<DependencyEdge> = record
                .dependencies
                .iter()
                .flatten()
                .map(|dep| DependencyEdge {
                    specifier: dep.specifier.clone(),
                    code: dep.code.as_ref().map(|code| code.specifier.clone()),
                    position: dep
                        .code
                        .as_ref()
                        .and_then(|code| code.span)
                        .map(|span| span.start),
                    target: None,
                })
                .collect();
            // sort_by_key is stable, keeping report order among equal keys
            dependencies.sort_by_key(DependencyEdge::sort_key);

            let module = Module {
                specifier: specifier.to_string(),
                size,
                dependencies,
            };

            match index.get(specifier) {
                Some(&id) => {
                    debug!(specifier, "duplicate module record replaces earlier one");
                    modules[id.0] = module;
                }
                None => {
                    index.insert(specifier.to_string(), ModuleId(modules.len()));
                    modules.push(module);
                }
            }
        }

        for module in &mut modules {
            for edge in &mut module.dependencies {
                edge.target = edge.code.as_ref().and_then(|code| index.get(code).copied());
            }
        }

        Ok(Self { modules, index })
    }

    /// Looks up a module id by exact specifier.
    pub fn id_of(&self, specifier: &str) -> Option<ModuleId> {
        self.index.get(specifier).copied()
    }

    /// Looks up a module by exact specifier.
    pub fn get(&self, specifier: &str) -> Option<&Module> {
        self.id_of(specifier).map(|id| self.module(id))
    }

    /// Returns the module with the given id.
    ///
    /// Ids are only handed out by this graph, so the lookup always succeeds.
    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.0]
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            modules: self.modules.len(),
            ..Default::default()
        };
        for module in &self.modules {
            stats.total_size = stats.total_size.saturating_add(module.size);
            stats.edges += module.dependencies.len();
            stats.unresolved_edges += module
                .dependencies
                .iter()
                .filter(|edge| edge.target.is_none())
                .count();
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::report::{CodeRecord, DependencyRecord, ModuleRecord, Span};

    fn dep(specifier: &str, pos: Option<(i64, i64)>) -> DependencyRecord {
        DependencyRecord {
            specifier: specifier.to_string(),
            code: Some(CodeRecord {
                specifier: specifier.to_string(),
                span: pos.map(|(line, character)| Span {
                    start: LineCol { line, character },
                    end: LineCol {
                        line,
                        character: character + 1,
                    },
                }),
            }),
        }
    }

    fn module(specifier: &str, size: i64, deps: Vec<DependencyRecord>) -> ModuleRecord {
        ModuleRecord {
            specifier: Some(specifier.to_string()),
            size: Some(size),
            dependencies: Some(deps),
        }
    }

    fn edge_order(graph: &Graph, specifier: &str) -> Vec<String> {
        graph
            .get(specifier)
            .unwrap()
            .dependencies
            .iter()
            .map(|e| e.specifier.clone())
            .collect()
    }

    #[test]
    fn test_edges_sorted_by_position() {
        let report = Report {
            modules: vec![module(
                "root",
                1,
                vec![
                    dep("c", Some((3, 0))),
                    dep("a", Some((1, 5))),
                    dep("b", Some((1, 9))),
                    dep("z", Some((0, 40))),
                    dep("n", Some((-1, 7))),
                ],
            )],
            roots: vec!["root".to_string()],
            redirects: None,
        };

        let graph = Graph::build(&report).unwrap();
        assert_eq!(edge_order(&graph, "root"), vec!["n", "z", "a", "b", "c"]);
    }

    #[test]
    fn test_unpositioned_edges_last_in_original_order() {
        let unresolved = DependencyRecord {
            specifier: "npm:missing".to_string(),
            code: None,
        };
        let report = Report {
            modules: vec![module(
                "root",
                1,
                vec![
                    dep("late", None),
                    unresolved,
                    dep("second", Some((2, 0))),
                    dep("early", None),
                    dep("first", Some((1, 0))),
                ],
            )],
            ..Default::default()
        };

        let graph = Graph::build(&report).unwrap();
        assert_eq!(
            edge_order(&graph, "root"),
            vec!["first", "second", "late", "npm:missing", "early"]
        );
    }

    #[test]
    fn test_targets_resolved_to_ids() {
        let report = Report {
            modules: vec![
                module("root", 1, vec![dep("a", Some((0, 0))), dep("gone", Some((1, 0)))]),
                module("a", 2, vec![]),
            ],
            ..Default::default()
        };

        let graph = Graph::build(&report).unwrap();
        let root = graph.get("root").unwrap();
        assert_eq!(root.dependencies[0].target, graph.id_of("a"));
        assert_eq!(root.dependencies[1].target, None);
        assert_eq!(root.dependencies[1].code.as_deref(), Some("gone"));

        let stats = graph.stats();
        assert_eq!(stats.modules, 2);
        assert_eq!(stats.edges, 2);
        assert_eq!(stats.unresolved_edges, 1);
        assert_eq!(stats.total_size, 3);
    }

    #[test]
    fn test_missing_size_is_fatal() {
        let report = Report {
            modules: vec![
                module("ok", 1, vec![]),
                ModuleRecord {
                    specifier: Some("broken".to_string()),
                    size: None,
                    dependencies: None,
                },
            ],
            ..Default::default()
        };

        let result = Graph::build(&report);
        assert!(matches!(result, Err(Error::MalformedReport { .. })));
    }

    #[test]
    fn test_negative_size_is_fatal() {
        let report = Report {
            modules: vec![module("neg", -5, vec![])],
            ..Default::default()
        };
        assert!(matches!(
            Graph::build(&report),
            Err(Error::MalformedReport { .. })
        ));
    }

    #[test]
    fn test_duplicate_specifier_replaced() {
        let report = Report {
            modules: vec![module("a", 1, vec![]), module("a", 9, vec![])],
            ..Default::default()
        };

        let graph = Graph::build(&report).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get("a").unwrap().size, 9);
    }
}
