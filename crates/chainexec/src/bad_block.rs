//! Cache of blocks proven invalid.

use std::collections::HashMap;

use basalt_chain_types::{Block, BlockId};
use parking_lot::Mutex;

use crate::errors::ValidationError;

/// A cached invalid block, with the rejection that put it here.
#[derive(Clone, Debug)]
pub struct BadBlockRecord {
    block: Block,
    cause: ValidationError,
}

impl BadBlockRecord {
    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn cause(&self) -> &ValidationError {
        &self.cause
    }
}

/// Remembers blocks that failed validation so identical candidates are not
/// reprocessed.
///
/// Keyed by canonical block hash; re-recording a hash silently overwrites
/// the prior entry. Safe for concurrent recording from multiple validation
/// invocations. The cache is unbounded — bounding and eviction are the
/// caller's policy, and [`BadBlockCache::retain_structural`] purges
/// entries that were rejected only because a dependency had not arrived.
#[derive(Debug, Default)]
pub struct BadBlockCache {
    records: Mutex<HashMap<BlockId, BadBlockRecord>>,
}

impl BadBlockCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a bad block, overwriting any prior entry for the hash.
    pub fn record(&self, blkid: BlockId, block: Block, cause: ValidationError) {
        let mut tbl = self.records.lock();
        tbl.insert(blkid, BadBlockRecord { block, cause });
    }

    /// Fetches a cached bad block by hash.
    pub fn get(&self, blkid: &BlockId) -> Option<Block> {
        let tbl = self.records.lock();
        tbl.get(blkid).map(|r| r.block.clone())
    }

    /// Fetches the full record, including the rejection cause.
    pub fn get_record(&self, blkid: &BlockId) -> Option<BadBlockRecord> {
        let tbl = self.records.lock();
        tbl.get(blkid).cloned()
    }

    /// Returns the cached bad blocks, in no particular order.
    pub fn list(&self) -> Vec<Block> {
        let tbl = self.records.lock();
        tbl.values().map(|r| r.block.clone()).collect()
    }

    /// Drops the entry for a hash, returning whether one was present.
    pub fn remove(&self, blkid: &BlockId) -> bool {
        let mut tbl = self.records.lock();
        tbl.remove(blkid).is_some()
    }

    /// Drops every entry whose cause was a missing dependency rather than
    /// the block itself being invalid.
    pub fn retain_structural(&self) {
        let mut tbl = self.records.lock();
        tbl.retain(|_, r| r.cause.is_structural());
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}
