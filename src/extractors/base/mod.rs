// Base types and traits shared by every extractor
//
// - node.rs: SourceNode trait, NodeKind, NodeRole
// - tree_methods.rs: predicate-driven traversal over SourceNode trees
// - types.rs: ExtractionResult, reasons and serializable reports
// - extractor.rs: BaseExtractor (per-file report building)

pub mod extractor;
pub mod node;
pub mod tree_methods;
pub mod types;

pub use extractor::BaseExtractor;
pub use node::{NodeKind, NodeRole, SourceNode};
pub use types::{
    CommandMatch, CommandReport, ContextConfig, ExtractionResult, FileReport, MatchKind,
    NotFoundReason, ScanSummary, SiteKind,
};
