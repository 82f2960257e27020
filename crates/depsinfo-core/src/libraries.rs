//! Unique versioned libraries reachable from a root, with the import path
//! that first pulled each one in.

use crate::graph::{Graph, ModuleId};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Derives the `name@version` identity embedded in a specifier.
///
/// The name is everything before the first `@`; the version runs from there
/// up to (not including) the next `/`, or to the end of the specifier.
///
/// ```
/// use depsinfo_core::libraries::extract_library_identity;
///
/// assert_eq!(
///     extract_library_identity("https://deno.land/std@0.140.0/fmt/colors.ts").as_deref(),
///     Some("https://deno.land/std@0.140.0"),
/// );
/// assert_eq!(extract_library_identity("file:///src/main.ts"), None);
/// ```
pub fn extract_library_identity(specifier: &str) -> Option<String> {
    let (name, rest) = specifier.split_once('@')?;
    let version = rest.split_once('/').map_or(rest, |(version, _)| version);
    Some(format!("{}@{}", name, version))
}

/// Splits an identity back into its name and version parts.
pub fn split_identity(identity: &str) -> (&str, &str) {
    identity.split_once('@').unwrap_or((identity, ""))
}

/// Library identity -> inclusion chain (root first), ordered by identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LibraryProvenance(BTreeMap<String, Vec<String>>);

impl LibraryProvenance {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.0.contains_key(identity)
    }

    /// Chain of specifiers from the root to the module that first imported `identity`.
    pub fn chain(&self, identity: &str) -> Option<&[String]> {
        self.0.get(identity).map(Vec::as_slice)
    }

    /// Iterates identities in ascending order with their chains.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(identity, chain)| (identity.as_str(), chain.as_slice()))
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Pending work for one module on the walk: which edge to look at next.
struct Frame {
    id: ModuleId,
    next_edge: usize,
}

/// Walks a root's subtree once, recording the first inclusion chain per library.
///
/// Unlike size attribution there is exactly one visited set, shared by the
/// whole walk. The frames on the explicit stack are the current chain, so a
/// recorded chain is the stack's specifiers plus the edge target.
pub struct LibraryCollector<'g> {
    graph: &'g Graph,
    visited: HashSet<ModuleId>,
    found: BTreeMap<String, Vec<String>>,
}

impl<'g> LibraryCollector<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            found: BTreeMap::new(),
        }
    }

    /// Collects libraries reachable from `root`, excluding the root's own identity.
    pub fn collect(graph: &Graph, root: ModuleId) -> LibraryProvenance {
        LibraryCollector::new(graph).walk(root)
    }

    fn walk(mut self, root: ModuleId) -> LibraryProvenance {
        self.visited.insert(root);
        let mut stack = vec![Frame {
            id: root,
            next_edge: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let module = self.graph.module(frame.id);
            let Some(edge) = module.dependencies.get(frame.next_edge) else {
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            // Edges whose target isn't a module of the graph are skipped entirely
            let Some(target) = edge.target else {
                continue;
            };
            let target_specifier = &self.graph.module(target).specifier;

            if let Some(identity) = extract_library_identity(target_specifier) {
                if !self.found.contains_key(&identity) {
                    let chain = stack
                        .iter()
                        .map(|f| self.graph.module(f.id).specifier.clone())
                        .chain(std::iter::once(target_specifier.clone()))
                        .collect();
                    self.found.insert(identity, chain);
                }
            }

            if self.visited.insert(target) {
                stack.push(Frame {
                    id: target,
                    next_edge: 0,
                });
            }
        }

        let root_specifier = &self.graph.module(root).specifier;
        if let Some(own) = extract_library_identity(root_specifier) {
            self.found.remove(&own);
        }

        LibraryProvenance(self.found)
    }
}
