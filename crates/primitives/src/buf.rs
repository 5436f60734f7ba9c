//! Fixed-size byte buffers used for hashes and signatures.

use std::{fmt, str};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use const_hex as hex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ParseError;

/// A 32-byte buffer, used for hashes and state roots.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct Buf32(pub [u8; 32]);

impl Buf32 {
    /// Returns the all-zeroes buffer.
    pub fn zero() -> Self {
        Self([0; 32])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Parses from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        let bytes = hex::decode(s).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            ParseError::InvalidLength {
                expected: 32,
                got: bytes.len(),
            }
        })?;
        Ok(Self(arr))
    }
}

impl From<[u8; 32]> for Buf32 {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8; 32]> for Buf32 {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Buf32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Buf32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buf32({})", hex::encode(self.0))
    }
}

impl str::FromStr for Buf32 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Buf32 {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Buf32 {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(d)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// A 64-byte buffer, used for seals and signatures.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, BorshSerialize, BorshDeserialize)]
pub struct Buf64(pub [u8; 64]);

impl Buf64 {
    pub fn zero() -> Self {
        Self([0; 64])
    }
}

impl Default for Buf64 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[u8; 64]> for Buf64 {
    fn from(value: [u8; 64]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8; 64]> for Buf64 {
    fn as_ref(&self) -> &[u8; 64] {
        &self.0
    }
}

impl fmt::Display for Buf64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Buf64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buf64({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buf32_hex_roundtrip() {
        let buf = Buf32::from([0xab; 32]);
        let s = buf.to_string();
        assert_eq!(s, "ab".repeat(32));
        assert_eq!(Buf32::from_hex(&s).unwrap(), buf);
    }

    #[test]
    fn test_buf32_prefixed_hex() {
        let s = format!("0x{}", "11".repeat(32));
        assert_eq!(Buf32::from_hex(&s).unwrap(), Buf32::from([0x11; 32]));
    }

    #[test]
    fn test_buf32_bad_length() {
        let err = Buf32::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidLength {
                expected: 32,
                got: 2
            }
        );
    }

    #[test]
    fn test_buf32_bad_hex() {
        assert!(matches!(
            Buf32::from_hex(&"zz".repeat(32)).unwrap_err(),
            ParseError::InvalidHex(_)
        ));
    }

    #[test]
    fn test_buf32_serde_roundtrip() {
        let buf = Buf32::from([0x42; 32]);
        let json = serde_json::to_string(&buf).unwrap();
        assert_eq!(json, format!("\"{}\"", "42".repeat(32)));
        let back: Buf32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn test_buf32_zero() {
        assert!(Buf32::zero().is_zero());
        assert!(!Buf32::from([1; 32]).is_zero());
    }
}
