use tracing::warn;

use super::{snippet, CommandExtractor};
use crate::extractors::base::tree_methods::{find_first, kind_is};
use crate::extractors::base::{ExtractionResult, NodeKind, NotFoundReason, SourceNode};

impl<'t> CommandExtractor<'t> {
    /// Report the block body of the first lambda passed to an anonymous binder.
    ///
    /// No type filtering: the block itself is the command.
    pub fn extract_from_anonymous_binder<N: SourceNode>(&self, invocation: N) -> ExtractionResult<N> {
        let block = find_first(invocation, kind_is::<N>(NodeKind::Lambda)).and_then(|lambda| {
            lambda
                .children()
                .into_iter()
                .find(|child| child.kind() == NodeKind::Block)
        });

        match block {
            Some(block) => ExtractionResult::BlockMatch(block),
            None => {
                warn!(
                    "Anonymous binder without a lambda block: {}",
                    snippet(&invocation)
                );
                ExtractionResult::NotFound(NotFoundReason::NoBlockInAnonymousBinder)
            }
        }
    }
}
