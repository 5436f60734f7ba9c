//! In-memory collaborator implementations.
//!
//! These back tests and light-weight tooling; real nodes plug persistent
//! implementations into the same traits.

use std::collections::{BTreeMap, HashMap};

use basalt_chain_types::{Block, BlockHeader, BlockId, Receipt, WorldState};
use basalt_primitives::prelude::*;
use parking_lot::Mutex;

use crate::{
    errors::StoreError,
    traits::{ChainStore, MutableChainStore, StateArchive},
};

/// In-memory world state: account balances with a content-derived root.
#[derive(Clone, Debug)]
pub struct MemWorldState {
    balances: BTreeMap<Address, u128>,
    root: Buf32,
}

impl MemWorldState {
    pub fn new() -> Self {
        let balances = BTreeMap::new();
        let root = Self::compute_root(&balances);
        Self { balances, root }
    }

    pub fn balance(&self, addr: &Address) -> u128 {
        self.balances.get(addr).copied().unwrap_or(0)
    }

    fn compute_root(balances: &BTreeMap<Address, u128>) -> Buf32 {
        let buf = borsh::to_vec(balances).expect("chainexec: enc balances");
        hash::raw(&buf)
    }
}

impl Default for MemWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for MemWorldState {
    fn state_root(&self) -> Buf32 {
        self.root
    }

    fn credit(&mut self, beneficiary: &Address, amount: u128) {
        *self.balances.entry(*beneficiary).or_insert(0) += amount;
    }

    fn commit(&mut self) -> Buf32 {
        self.root = Self::compute_root(&self.balances);
        self.root
    }
}

/// In-memory chain store.
#[derive(Debug, Default)]
pub struct MemChainStore {
    headers: Mutex<HashMap<BlockId, BlockHeader>>,
    appended: Mutex<Vec<(BlockId, Block, Vec<Receipt>)>>,
}

impl MemChainStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_header(&self, blkid: BlockId, header: BlockHeader) {
        let mut tbl = self.headers.lock();
        tbl.insert(blkid, header);
    }

    pub fn remove_header(&self, blkid: &BlockId) {
        let mut tbl = self.headers.lock();
        tbl.remove(blkid);
    }

    /// IDs of blocks appended through the import pipeline, in order.
    pub fn appended_blocks(&self) -> Vec<BlockId> {
        let tbl = self.appended.lock();
        tbl.iter().map(|(blkid, _, _)| *blkid).collect()
    }
}

impl ChainStore for MemChainStore {
    fn get_header(&self, blkid: &BlockId) -> Option<BlockHeader> {
        let tbl = self.headers.lock();
        tbl.get(blkid).cloned()
    }
}

impl MutableChainStore for MemChainStore {
    fn append_block(
        &self,
        blkid: BlockId,
        block: Block,
        receipts: Vec<Receipt>,
    ) -> Result<(), StoreError> {
        self.put_header(blkid, block.header().clone());
        let mut tbl = self.appended.lock();
        tbl.push((blkid, block, receipts));
        Ok(())
    }
}

/// In-memory state archive keyed by state root.
#[derive(Debug, Default)]
pub struct MemStateArchive {
    states: Mutex<HashMap<Buf32, MemWorldState>>,
}

impl MemStateArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archives a state under its current root.
    pub fn put_state(&self, state: MemWorldState) {
        let mut tbl = self.states.lock();
        tbl.insert(state.state_root(), state);
    }

    pub fn clear(&self) {
        let mut tbl = self.states.lock();
        tbl.clear();
    }
}

impl StateArchive for MemStateArchive {
    fn get_mutable(&self, header: &BlockHeader) -> Option<Box<dyn WorldState>> {
        let tbl = self.states.lock();
        tbl.get(header.state_root())
            .cloned()
            .map(|s| Box::new(s) as Box<dyn WorldState>)
    }

    fn get_mutable_at(&self, state_root: &Buf32, _blkid: &BlockId) -> Option<Box<dyn WorldState>> {
        let tbl = self.states.lock();
        tbl.get(state_root)
            .cloned()
            .map(|s| Box::new(s) as Box<dyn WorldState>)
    }

    fn get_fresh(&self) -> Box<dyn WorldState> {
        Box::new(MemWorldState::new())
    }
}
