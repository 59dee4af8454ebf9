use tracing::warn;

use super::{snippet, CommandExtractor};
use crate::extractors::base::tree_methods::{find_first, find_parent_of_kind};
use crate::extractors::base::{ExtractionResult, NodeKind, NotFoundReason, SourceNode};

impl<'t> CommandExtractor<'t> {
    /// Resolve a variable supplier to the lambda initialising it, then scan that lambda.
    ///
    /// Resolution is textual: the first lambda in the enclosing method whose
    /// owning local variable has the same name wins. Shadowed names in nested
    /// scopes are not told apart.
    pub fn extract_from_variable<N: SourceNode>(&self, variable: N) -> ExtractionResult<N> {
        let method = match find_parent_of_kind(variable, NodeKind::MethodDeclaration) {
            Some(method) => method,
            None => {
                warn!(
                    "Impossible to identify command: '{}' is not inside a method",
                    snippet(&variable)
                );
                return ExtractionResult::NotFound(NotFoundReason::NoEnclosingMethod);
            }
        };

        let name = variable.text();
        let initializer = find_first(method, |node: &N| {
            node.kind() == NodeKind::Lambda
                && find_parent_of_kind(*node, NodeKind::LocalVariable)
                    .and_then(|declaration| declaration.name())
                    .is_some_and(|declared| declared == name)
        });

        match initializer {
            Some(lambda) => self.extract_from_lambda(lambda),
            None => {
                warn!(
                    "Impossible to identify command: no local lambda assigned to '{}'",
                    name
                );
                ExtractionResult::NotFound(NotFoundReason::VariableNotResolved)
            }
        }
    }
}
