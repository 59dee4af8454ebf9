//! Command extraction from binder call sites
//!
//! Recovers the Command a binder invocation supplies by recognising a handful
//! of tree shapes. This is a heuristic: every unrecognised shape is logged at
//! `warn` and reported as `ExtractionResult::NotFound`, nothing here returns an
//! error or panics.
//!
//! # Flow
//!
//! ```text
//! invocation ─ unwind ─┬─ innermost is anonCmdBinder ─> anonymous block
//!                      └─ select supplier ─┬─ lambda ─────────────> lambda scan
//!                                          ├─ variable ─ resolve ─> lambda scan
//!                                          └─ method reference ──> type check
//! class declaration ─ constructor lambdas ─ exactly one ─> lambda scan
//! ```
//!
//! The extractor works on any [`SourceNode`] tree. Parsed Java goes through
//! [`crate::extractors::java::JavaNode`].

mod anonymous;
mod constructor_scope;
mod invocation;
mod lambda;
mod method_reference;
mod type_set;
mod variable;

#[cfg(test)]
mod mock;

pub use invocation::{select_supplier, unwind, UnwoundChain};
pub use type_set::CommandTypeSet;

use crate::extractors::base::SourceNode;

/// Callee name of the binder whose payload is a raw code block
pub const ANON_BINDER_NAME: &str = "anonCmdBinder";

/// Most nested invocations followed while unwinding a fluent chain
pub const MAX_CHAIN_DEPTH: usize = 256;

/// Stateless extractor over a shared Command type set
#[derive(Debug, Clone, Copy)]
pub struct CommandExtractor<'t> {
    types: &'t CommandTypeSet,
}

impl<'t> CommandExtractor<'t> {
    pub fn new(types: &'t CommandTypeSet) -> Self {
        Self { types }
    }

    pub fn command_types(&self) -> &'t CommandTypeSet {
        self.types
    }
}

/// Short single-line rendering of a node for log lines
pub(crate) fn snippet<N: SourceNode>(node: &N) -> String {
    let text = node.text();
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > 80 {
        flat.chars().take(80).collect::<String>() + "..."
    } else {
        flat
    }
}
