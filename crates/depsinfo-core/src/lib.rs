//! depsinfo core - size attribution and library provenance for module graphs.
//!
//! This crate takes an already-produced module-dependency report (the
//! document `deno info --json` prints) and answers two questions per root:
//!
//! - [`SizeAnalyzer`]: how many bytes each direct dependency adds, on its own
//!   and on top of its earlier siblings
//! - [`LibraryCollector`]: which distinct `name@version` libraries are
//!   reachable, and which import path first pulled each one in
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  depsinfo-cli   │  (report acquisition, formatting)
//! └────────┬────────┘
//!          │ Report
//!          ▼
//! ┌─────────────────┐
//! │  depsinfo-core  │  Graph::build ─► redirect::resolve ─┬─► SizeAnalyzer
//! └─────────────────┘                                     └─► LibraryCollector
//! ```
//!
//! The graph is built once and never mutated; every traversal keeps its own
//! visited state.
//!
//! # Example
//!
//! ```
//! use depsinfo_core::{Analysis, Report};
//!
//! let report = Report::from_json(r#"{
//!     "roots": ["file:///main.ts"],
//!     "modules": [
//!         {"specifier": "file:///main.ts", "size": 10, "dependencies": [
//!             {"specifier": "https://deno.land/std@0.140.0/fmt/colors.ts",
//!              "code": {"specifier": "https://deno.land/std@0.140.0/fmt/colors.ts"}}
//!         ]},
//!         {"specifier": "https://deno.land/std@0.140.0/fmt/colors.ts", "size": 20}
//!     ]
//! }"#)?;
//!
//! let analysis = Analysis::run(&report)?;
//! let root = &analysis.roots[0];
//! assert_eq!(root.size.total.contributed, 20);
//! assert!(root.libraries.contains("https://deno.land/std@0.140.0"));
//! # Ok::<(), depsinfo_core::Error>(())
//! ```

pub mod analysis;
pub mod error;
pub mod graph;
pub mod libraries;
pub mod redirect;
pub mod report;
pub mod size;

pub use analysis::{Analysis, RootAnalysis, SkippedRoot};
pub use error::{Error, Result};
pub use graph::{DependencyEdge, Graph, GraphStats, Module, ModuleId};
pub use libraries::{extract_library_identity, LibraryCollector, LibraryProvenance};
pub use report::Report;
pub use size::{DependencySize, SeenModules, SizeAnalyzer, SizeAttribution, SizeTotals};
