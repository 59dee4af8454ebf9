use tracing::warn;

use super::CommandExtractor;
use crate::extractors::base::tree_methods::{
    both, collect_all, in_constructor_of, kind_is, references_any,
};
use crate::extractors::base::{ExtractionResult, NodeKind, NotFoundReason, SourceNode};

impl<'t> CommandExtractor<'t> {
    /// Class-level fallback when no binder invocation is known.
    ///
    /// Looks for lambdas declared inside the class's own constructors that
    /// reference a Command type; only a single such lambda is trusted.
    /// Constructors of nested classes belong to those classes.
    pub fn extract_from_class<N: SourceNode>(&self, class: N) -> ExtractionResult<N> {
        let candidates = collect_all(
            class,
            both::<N, _, _>(
                both::<N, _, _>(
                    kind_is::<N>(NodeKind::Lambda),
                    in_constructor_of::<N>(class),
                ),
                references_any::<N>(self.types),
            ),
        );

        let class_name = class.name().unwrap_or_else(|| "<anonymous>".to_string());
        match candidates.as_slice() {
            [lambda] => self.extract_from_lambda(*lambda),
            [] => {
                warn!("Unable to identify command in constructors of {}", class_name);
                ExtractionResult::NotFound(NotFoundReason::NoConstructorLambda)
            }
            many => {
                warn!(
                    "Unable to identify command in constructors of {}: {} candidate lambdas",
                    class_name,
                    many.len()
                );
                ExtractionResult::NotFound(NotFoundReason::AmbiguousConstructorLambda(many.len()))
            }
        }
    }
}
