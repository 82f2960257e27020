//! Size attribution across a root's direct dependencies.
//!
//! For each direct dependency `d` of a root:
//! - contributed(d): bytes reachable from `d` that no earlier sibling already pulled in
//! - isolated(d): bytes reachable from `d` counted on its own
//! - shared(d): isolated(d) - contributed(d)
//!
//! Both modes sum module sizes over a depth-first walk of resolved edges; they
//! only differ in who owns the visited set. Contributed mode takes a
//! [`SeenModules`] from the caller and keeps accumulating into it, isolated
//! mode always starts from an empty one.

use crate::graph::{Graph, Module, ModuleId};
use serde::Serialize;
use std::collections::HashSet;

/// Visited set threaded through sibling traversals in contributed mode.
#[derive(Debug, Clone, Default)]
pub struct SeenModules(HashSet<ModuleId>);

impl SeenModules {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, id: ModuleId) -> bool {
        self.0.insert(id)
    }
}

/// One row of the attribution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencySize {
    pub contributed: u64,
    pub isolated: u64,
    pub shared: u64,
    /// Specifier as written at the import site.
    pub specifier: String,
}

/// Per-field sums over all rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeTotals {
    pub contributed: u64,
    pub isolated: u64,
    pub shared: u64,
}

/// Attribution result for one root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SizeAttribution {
    pub dependencies: Vec<DependencySize>,
    pub total: SizeTotals,
}

/// Computes contributed / isolated / shared sizes.
pub struct SizeAnalyzer;

impl SizeAnalyzer {
    /// Sums sizes reachable from `start` that aren't in `seen`, marking them seen.
    ///
    /// A module already in `seen` contributes nothing and isn't descended into.
    pub fn contributed(graph: &Graph, start: ModuleId, seen: &mut SeenModules) -> u64 {
        let mut total: u64 = 0;
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let module = graph.module(id);
            total = total.saturating_add(module.size);
            // Reverse so edges are entered in stored order
            stack.extend(module.dependencies.iter().rev().filter_map(|edge| edge.target));
        }

        total
    }

    /// Sums sizes reachable from `start`, counted as if nothing else was loaded.
    pub fn isolated(graph: &Graph, start: ModuleId) -> u64 {
        Self::contributed(graph, start, &mut SeenModules::new())
    }

    /// Attributes size across the direct dependencies of `root`, in stored order.
    ///
    /// Dependencies without a resolved target, or whose target isn't in the
    /// graph, produce an all-zero row.
    pub fn attribute(graph: &Graph, root: &Module) -> SizeAttribution {
        let mut seen = SeenModules::new();
        let mut result = SizeAttribution::default();

        for edge in &root.dependencies {
            let (contributed, isolated) = match edge.target {
                Some(target) => (
                    Self::contributed(graph, target, &mut seen),
                    Self::isolated(graph, target),
                ),
                None => (0, 0),
            };
            debug_assert!(isolated >= contributed);
            let shared = isolated.saturating_sub(contributed);

            // Sizes near u64::MAX pin at the maximum rather than wrap
            let total = &mut result.total;
            total.contributed = total.contributed.saturating_add(contributed);
            total.isolated = total.isolated.saturating_add(isolated);
            total.shared = total.shared.saturating_add(shared);
            result.dependencies.push(DependencySize {
                contributed,
                isolated,
                shared,
                specifier: edge.specifier.clone(),
            });
        }

        result
    }
}
