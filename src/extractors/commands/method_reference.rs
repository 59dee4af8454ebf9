use tracing::warn;

use super::{snippet, CommandExtractor};
use crate::extractors::base::{ExtractionResult, NotFoundReason, SourceNode};

impl<'t> CommandExtractor<'t> {
    /// Accept a method reference (`SaveCommand::new`) when it names a Command type
    pub fn extract_from_method_reference<N: SourceNode>(&self, reference: N) -> ExtractionResult<N> {
        if self.types.contains_any(reference.referenced_types()) {
            ExtractionResult::MethodReferenceMatch(reference)
        } else {
            warn!("Can't find command in expression: {}", snippet(&reference));
            ExtractionResult::NotFound(NotFoundReason::MethodReferenceNotCommand)
        }
    }
}
