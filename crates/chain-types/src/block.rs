use arbitrary::Arbitrary;
use basalt_primitives::{hash, Buf32};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::header::BlockHeader;

/// An opaque transaction payload.
///
/// Transaction semantics belong to the execution layer; at this level a
/// transaction is only bytes that contribute to the transactions root.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct Transaction {
    payload: Vec<u8>,
}

impl Transaction {
    pub fn new(payload: Vec<u8>) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl<T: AsRef<[u8]>> From<T> for Transaction {
    fn from(value: T) -> Self {
        Self {
            payload: value.as_ref().to_vec(),
        }
    }
}

/// A block body: transactions plus ommer headers.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct BlockBody {
    transactions: Vec<Transaction>,
    ommers: Vec<BlockHeader>,
}

impl BlockBody {
    pub fn new(transactions: Vec<Transaction>, ommers: Vec<BlockHeader>) -> Self {
        Self {
            transactions,
            ommers,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn ommers(&self) -> &[BlockHeader] {
        &self.ommers
    }
}

/// A full block.
#[derive(Clone, Debug, Eq, PartialEq, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct Block {
    header: BlockHeader,
    body: BlockBody,
}

impl Block {
    pub fn new(header: BlockHeader, body: BlockBody) -> Self {
        Self { header, body }
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn body(&self) -> &BlockBody {
        &self.body
    }
}

/// Computes the transactions root over a transaction list.
pub fn compute_txs_root(transactions: &[Transaction]) -> Buf32 {
    let buf = borsh::to_vec(transactions).expect("chain: enc transactions");
    hash::raw(&buf)
}

/// Computes the ommers root over a list of ommer headers.
pub fn compute_ommers_root(ommers: &[BlockHeader]) -> Buf32 {
    let buf = borsh::to_vec(ommers).expect("chain: enc ommers");
    hash::raw(&buf)
}

#[cfg(test)]
mod tests {
    use basalt_test_utils::ArbitraryGenerator;

    use super::*;

    #[test]
    fn test_txs_root_changes_with_contents() {
        let empty = compute_txs_root(&[]);
        let one = compute_txs_root(&[Transaction::from(b"tx")]);
        assert_ne!(empty, one);
    }

    #[test]
    fn test_ommers_root_deterministic() {
        let ommer: BlockHeader = ArbitraryGenerator::new().generate();
        let ommers = vec![ommer];
        assert_eq!(compute_ommers_root(&ommers), compute_ommers_root(&ommers));
        assert_ne!(compute_ommers_root(&ommers), compute_ommers_root(&[]));
    }
}
