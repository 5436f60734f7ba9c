//! Canonical BFT header hashing.

use basalt_chain_types::{BlockHeader, BlockId, HeaderCodec};
use basalt_primitives::hash;

use crate::extra_data::BftExtraData;

/// Header codec for on-chain BFT blocks.
///
/// Committed seals accrete onto a header after proposal and the round can
/// differ between otherwise-identical proposals, so the canonical block
/// hash is computed over the header with its extra data re-encoded in the
/// stripped form.
#[derive(Copy, Clone, Debug, Default)]
pub struct BftHeaderCodec;

impl BftHeaderCodec {
    pub fn new() -> Self {
        Self
    }
}

impl HeaderCodec for BftHeaderCodec {
    fn encode(&self, header: &BlockHeader) -> Vec<u8> {
        match BftExtraData::decode(header.extra_data()) {
            Ok(extra) => {
                let stripped = header.clone_with_extra_data(extra.for_onchain_hashing().encode());
                borsh::to_vec(&stripped).expect("bft: enc header")
            }
            // A header with malformed extra data never validates, but it
            // still needs a stable hash to be recorded against.
            Err(_) => borsh::to_vec(header).expect("bft: enc header"),
        }
    }

    fn block_hash(&self, header: &BlockHeader) -> BlockId {
        BlockId::from(hash::raw(&self.encode(header)))
    }
}

#[cfg(test)]
mod tests {
    use basalt_primitives::{Address, Buf32, Buf64};
    use basalt_test_utils::ArbitraryGenerator;

    use super::*;

    fn header_with_extra(extra: &BftExtraData) -> BlockHeader {
        let base: BlockHeader = ArbitraryGenerator::new().generate();
        base.clone_with_extra_data(extra.encode())
    }

    #[test]
    fn test_hash_ignores_seal_accretion() {
        let proposed = BftExtraData::new(vec![Address::from([1; 20])], 0, Vec::new());
        let sealed = BftExtraData::new(
            proposed.validators().to_vec(),
            2,
            vec![Buf64::from([7; 64]), Buf64::from([8; 64])],
        );

        let codec = BftHeaderCodec::new();
        let hdr = header_with_extra(&proposed);
        let sealed_hdr = hdr.clone_with_extra_data(sealed.encode());

        assert_eq!(codec.block_hash(&hdr), codec.block_hash(&sealed_hdr));
    }

    #[test]
    fn test_hash_sensitive_to_validator_set() {
        let a = BftExtraData::new(vec![Address::from([1; 20])], 0, Vec::new());
        let b = BftExtraData::new(vec![Address::from([2; 20])], 0, Vec::new());

        let codec = BftHeaderCodec::new();
        let hdr = header_with_extra(&a);
        let other = hdr.clone_with_extra_data(b.encode());

        assert_ne!(codec.block_hash(&hdr), codec.block_hash(&other));
    }

    #[test]
    fn test_malformed_extra_still_hashes() {
        let base: BlockHeader = ArbitraryGenerator::new().generate();
        let hdr = base.clone_with_extra_data(b"not extra data".to_vec());
        let codec = BftHeaderCodec::new();
        assert_ne!(codec.block_hash(&hdr), BlockId::from(Buf32::zero()));
        assert_eq!(codec.block_hash(&hdr), hdr.compute_blkid());
    }
}
