use tracing::warn;

use super::{snippet, CommandExtractor};
use crate::extractors::base::tree_methods::{both, find_first, kind_is, references_any};
use crate::extractors::base::{ExtractionResult, NodeKind, NotFoundReason, SourceNode};

impl<'t> CommandExtractor<'t> {
    /// First constructor call in the lambda that instantiates a Command type.
    ///
    /// Later matches in the same lambda are ignored.
    pub fn extract_from_lambda<N: SourceNode>(&self, lambda: N) -> ExtractionResult<N> {
        let is_command_constructor = both::<N, _, _>(
            kind_is::<N>(NodeKind::ConstructorCall),
            references_any::<N>(self.types),
        );

        match find_first(lambda, is_command_constructor) {
            Some(call) => ExtractionResult::ConstructorCallMatch(call),
            None => {
                warn!("Cannot find command in lambda: {}", snippet(&lambda));
                ExtractionResult::NotFound(NotFoundReason::NoCommandConstructor)
            }
        }
    }
}
