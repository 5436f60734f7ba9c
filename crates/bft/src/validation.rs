//! BFT header validation ruleset.

use basalt_chain_types::{BlockHeader, HeaderValidationMode, HeaderValidator};
use tracing::warn;

use crate::extra_data::BftExtraData;

/// Expected difficulty on a BFT chain.
const BFT_DIFFICULTY: u128 = 1;

/// Header validation ruleset for BFT chains, parameterized by the target
/// block period.
///
/// Detached rules: the extra data decodes, the validator set is nonempty,
/// and the difficulty is exactly 1. Parent-context rules: height
/// succession and a strictly newer timestamp. The full ruleset also
/// requires the timestamp to be at least one block period past the parent.
#[derive(Copy, Clone, Debug)]
pub struct BftHeaderValidator {
    block_period_secs: u64,
}

impl BftHeaderValidator {
    pub fn new(block_period_secs: u64) -> Self {
        Self { block_period_secs }
    }

    pub fn block_period_secs(&self) -> u64 {
        self.block_period_secs
    }

    fn check_detached(&self, header: &BlockHeader) -> bool {
        let extra = match BftExtraData::decode(header.extra_data()) {
            Ok(extra) => extra,
            Err(e) => {
                warn!(height = header.height(), %e, "header extra data rejected");
                return false;
            }
        };

        if extra.validators().is_empty() {
            warn!(height = header.height(), "header carries empty validator set");
            return false;
        }

        if header.difficulty() != BFT_DIFFICULTY {
            warn!(
                height = header.height(),
                difficulty = header.difficulty(),
                "header difficulty is not 1"
            );
            return false;
        }

        true
    }

    fn check_ancestry(&self, header: &BlockHeader, parent: &BlockHeader) -> bool {
        if header.height() != parent.height() + 1 {
            warn!(
                height = header.height(),
                parent_height = parent.height(),
                "header height does not follow parent"
            );
            return false;
        }

        if header.timestamp() <= parent.timestamp() {
            warn!(height = header.height(), "header timestamp not newer than parent");
            return false;
        }

        true
    }

    fn check_block_period(&self, header: &BlockHeader, parent: &BlockHeader) -> bool {
        let earliest = parent.timestamp() + self.block_period_secs;
        if header.timestamp() < earliest {
            warn!(
                height = header.height(),
                timestamp = header.timestamp(),
                earliest,
                "header timestamp earlier than one block period past parent"
            );
            return false;
        }

        true
    }
}

impl HeaderValidator for BftHeaderValidator {
    fn validate_header(
        &self,
        header: &BlockHeader,
        parent: &BlockHeader,
        mode: HeaderValidationMode,
    ) -> bool {
        if mode == HeaderValidationMode::None {
            return true;
        }

        if !self.check_detached(header) {
            return false;
        }

        if mode == HeaderValidationMode::DetachedOnly {
            return true;
        }

        if !self.check_ancestry(header, parent) {
            return false;
        }

        if mode == HeaderValidationMode::Light {
            return true;
        }

        self.check_block_period(header, parent)
    }

    fn validate_header_detached(&self, header: &BlockHeader, mode: HeaderValidationMode) -> bool {
        mode == HeaderValidationMode::None || self.check_detached(header)
    }
}

#[cfg(test)]
mod tests {
    use basalt_chain_types::BlockId;
    use basalt_primitives::{Address, Buf32};

    use super::*;

    const PERIOD: u64 = 5;

    fn valid_extra() -> Vec<u8> {
        BftExtraData::new(vec![Address::from([1; 20])], 0, Vec::new()).encode()
    }

    fn header_at(parent: Option<&BlockHeader>, timestamp: u64) -> BlockHeader {
        let (parent_blkid, height) = match parent {
            Some(p) => (p.compute_blkid(), p.height() + 1),
            None => (BlockId::null(), 4),
        };
        BlockHeader::new(
            parent_blkid,
            height,
            timestamp,
            Address::zero(),
            Buf32::zero(),
            Buf32::zero(),
            Buf32::zero(),
            Buf32::zero(),
            BFT_DIFFICULTY,
            valid_extra(),
        )
    }

    #[test]
    fn test_none_mode_accepts_anything() {
        let v = BftHeaderValidator::new(PERIOD);
        let parent = header_at(None, 100);
        let garbage = parent.clone_with_extra_data(b"junk".to_vec());
        assert!(v.validate_header(&garbage, &parent, HeaderValidationMode::None));
    }

    #[test]
    fn test_detached_rejects_malformed_extra() {
        let v = BftHeaderValidator::new(PERIOD);
        let hdr = header_at(None, 100).clone_with_extra_data(b"junk".to_vec());
        assert!(!v.validate_header_detached(&hdr, HeaderValidationMode::DetachedOnly));
    }

    #[test]
    fn test_detached_rejects_empty_validator_set() {
        let v = BftHeaderValidator::new(PERIOD);
        let empty = BftExtraData::new(Vec::new(), 0, Vec::new()).encode();
        let hdr = header_at(None, 100).clone_with_extra_data(empty);
        assert!(!v.validate_header_detached(&hdr, HeaderValidationMode::DetachedOnly));
    }

    #[test]
    fn test_detached_rejects_wrong_difficulty() {
        let v = BftHeaderValidator::new(PERIOD);
        let parent = header_at(None, 100);
        let hdr = BlockHeader::new(
            parent.compute_blkid(),
            parent.height() + 1,
            parent.timestamp() + PERIOD,
            Address::zero(),
            Buf32::zero(),
            Buf32::zero(),
            Buf32::zero(),
            Buf32::zero(),
            2,
            valid_extra(),
        );
        assert!(!v.validate_header(&hdr, &parent, HeaderValidationMode::Full));
    }

    #[test]
    fn test_light_rejects_bad_height() {
        let v = BftHeaderValidator::new(PERIOD);
        let parent = header_at(None, 100);
        let template = header_at(Some(&parent), parent.timestamp() + PERIOD);
        // Skip a height.
        let hdr = BlockHeader::new(
            *template.parent_blkid(),
            parent.height() + 2,
            template.timestamp(),
            Address::zero(),
            Buf32::zero(),
            Buf32::zero(),
            Buf32::zero(),
            Buf32::zero(),
            BFT_DIFFICULTY,
            valid_extra(),
        );
        assert!(!v.validate_header(&hdr, &parent, HeaderValidationMode::Light));
    }

    #[test]
    fn test_light_skips_block_period() {
        let v = BftHeaderValidator::new(PERIOD);
        let parent = header_at(None, 100);
        // One second after the parent: too early for the full ruleset but
        // fine for the light one.
        let hdr = header_at(Some(&parent), parent.timestamp() + 1);
        assert!(v.validate_header(&hdr, &parent, HeaderValidationMode::Light));
        assert!(!v.validate_header(&hdr, &parent, HeaderValidationMode::Full));
    }

    #[test]
    fn test_full_accepts_well_formed() {
        let v = BftHeaderValidator::new(PERIOD);
        let parent = header_at(None, 100);
        let hdr = header_at(Some(&parent), parent.timestamp() + PERIOD);
        assert!(v.validate_header(&hdr, &parent, HeaderValidationMode::Full));
    }
}
