use arbitrary::Arbitrary;
use basalt_primitives::{hash, Buf32};
use borsh::{BorshDeserialize, BorshSerialize};

/// Receipt for a single executed transaction.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct Receipt {
    success: bool,
    gas_used: u64,
    output: Vec<u8>,
}

impl Receipt {
    pub fn new(success: bool, gas_used: u64, output: Vec<u8>) -> Self {
        Self {
            success,
            gas_used,
            output,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }
}

/// Computes the receipts root over a receipt list.
pub fn compute_receipts_root(receipts: &[Receipt]) -> Buf32 {
    let buf = borsh::to_vec(receipts).expect("chain: enc receipts");
    hash::raw(&buf)
}
