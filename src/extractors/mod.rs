//! Command extraction over tree-sitter Java trees
//!
//! # Architecture
//!
//! - `base` - SourceNode abstraction, traversal helpers, result and report types
//! - `commands` - the Command extractor (language-agnostic heuristics)
//! - `java` - tree-sitter Java adapter, Command type discovery, binder sites
//! - `manager` - ExtractorManager public API (files, batches, workspaces)

pub mod base;
pub mod commands;
pub mod java;
pub mod manager;

// Re-export the public API
pub use base::{
    CommandMatch, CommandReport, ContextConfig, ExtractionResult, FileReport, MatchKind,
    NodeKind, NodeRole, NotFoundReason, ScanSummary, SiteKind, SourceNode,
};
pub use commands::{CommandExtractor, CommandTypeSet};
pub use java::{BinderSite, JavaNode};
pub use manager::{ExtractorManager, ScanConfig, WorkspaceScan};
