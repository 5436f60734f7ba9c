//! Execution outputs.

use basalt_primitives::Buf32;

use crate::receipt::Receipt;

/// Describes the output of executing a block: the receipts produced and the
/// state root computed from the post-execution working state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockExecutionOutput {
    /// State root as computed by the processor.
    computed_state_root: Buf32,

    /// Receipts for the executed transactions, in order.
    receipts: Vec<Receipt>,
}

impl BlockExecutionOutput {
    pub fn new(computed_state_root: Buf32, receipts: Vec<Receipt>) -> Self {
        Self {
            computed_state_root,
            receipts,
        }
    }

    pub fn computed_state_root(&self) -> &Buf32 {
        &self.computed_state_root
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }
}
