// Invocation unwinding, supplier selection and dispatch

use tracing::warn;

use super::{snippet, CommandExtractor, ANON_BINDER_NAME, MAX_CHAIN_DEPTH};
use crate::extractors::base::{ExtractionResult, NodeKind, NodeRole, NotFoundReason, SourceNode};

/// Innermost invocation of a chain together with its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct UnwoundChain<N> {
    pub innermost: N,
    pub arguments: Vec<N>,
    /// Number of descents taken from the starting invocation
    pub depth: usize,
}

/// Descend through first children while they are invocations.
///
/// Returns None when the chain is deeper than `MAX_CHAIN_DEPTH`, which also
/// covers cyclic trees.
pub fn unwind<N: SourceNode>(invocation: N) -> Option<UnwoundChain<N>> {
    let mut current = invocation;
    let mut depth = 0;

    while let Some(child) = current.first_child() {
        if child.kind() != NodeKind::Invocation {
            break;
        }
        if depth >= MAX_CHAIN_DEPTH {
            return None;
        }
        current = child;
        depth += 1;
    }

    let arguments = current
        .children()
        .into_iter()
        .filter(|child| child.role() == NodeRole::Argument)
        .collect();

    Some(UnwoundChain {
        innermost: current,
        arguments,
        depth,
    })
}

/// (widget, supplier) binders take the second argument, all others the first
pub fn select_supplier<N: Copy>(arguments: &[N]) -> Option<N> {
    if arguments.len() == 2 {
        Some(arguments[1])
    } else {
        arguments.first().copied()
    }
}

impl<'t> CommandExtractor<'t> {
    /// Recover the Command supplied at a binder invocation
    pub fn extract_from_invocation<N: SourceNode>(&self, invocation: N) -> ExtractionResult<N> {
        let chain = match unwind(invocation) {
            Some(chain) => chain,
            None => {
                warn!(
                    "Invocation chain deeper than {} calls: {}",
                    MAX_CHAIN_DEPTH,
                    snippet(&invocation)
                );
                return ExtractionResult::NotFound(NotFoundReason::MalformedChain);
            }
        };

        // The anonymous binder packages its command as a block, not a typed expression
        if chain.innermost.name().as_deref() == Some(ANON_BINDER_NAME) {
            return self.extract_from_anonymous_binder(invocation);
        }

        match select_supplier(&chain.arguments) {
            Some(supplier) => self.dispatch_supplier(supplier),
            None => {
                warn!("Binder has no supplier argument: {}", snippet(&chain.innermost));
                ExtractionResult::NotFound(NotFoundReason::NoSupplierArgument)
            }
        }
    }

    fn dispatch_supplier<N: SourceNode>(&self, supplier: N) -> ExtractionResult<N> {
        match supplier.kind() {
            NodeKind::Lambda => self.extract_from_lambda(supplier),
            NodeKind::VariableReference => self.extract_from_variable(supplier),
            NodeKind::MethodReference => self.extract_from_method_reference(supplier),
            other => {
                warn!(
                    "Not able to identify command: unsupported supplier kind {} ({})",
                    other,
                    snippet(&supplier)
                );
                ExtractionResult::NotFound(NotFoundReason::UnrecognizedSupplierKind)
            }
        }
    }
}
