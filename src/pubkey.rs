//! Public key value type and well-known addresses
//!
//! This module provides a 32-byte public key with base-58 parsing and
//! rendering, plus the fixed sysvar addresses the Stake program references.

use crate::error::{IxforgeError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of a public key in bytes
pub const PUBKEY_BYTES: usize = 32;

/// A 32-byte public key identifying an account or program
///
/// Two keys compare equal iff their byte contents are equal. The canonical
/// human-readable form is base-58.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey([u8; PUBKEY_BYTES]);

impl PublicKey {
    pub const fn new(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice, failing unless it is exactly 32 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; PUBKEY_BYTES] = bytes.try_into().map_err(|_| {
            IxforgeError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBKEY_BYTES,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }

    pub fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }

    /// Render as a base-58 string
    pub fn to_base58(self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Convert from solana_sdk::Pubkey
    pub fn from_sdk(pubkey: &solana_sdk::pubkey::Pubkey) -> Self {
        Self(pubkey.to_bytes())
    }

    /// Convert to solana_sdk::Pubkey
    pub fn to_sdk(self) -> solana_sdk::pubkey::Pubkey {
        solana_sdk::pubkey::Pubkey::new_from_array(self.0)
    }
}

impl FromStr for PublicKey {
    type Err = IxforgeError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s).into_vec()?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl From<[u8; PUBKEY_BYTES]> for PublicKey {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<solana_sdk::pubkey::Pubkey> for PublicKey {
    fn from(pubkey: solana_sdk::pubkey::Pubkey) -> Self {
        Self::from_sdk(&pubkey)
    }
}

impl From<PublicKey> for solana_sdk::pubkey::Pubkey {
    fn from(pubkey: PublicKey) -> Self {
        pubkey.to_sdk()
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Well-known fixed addresses exposed by the runtime
pub mod sysvar {
    use super::PublicKey;

    /// SysvarC1ock11111111111111111111111111111111
    pub const CLOCK: PublicKey = PublicKey::new([
        6, 167, 213, 23, 24, 199, 116, 201, 40, 86, 99, 152, 105, 29, 94, 182, 139, 94, 184, 163,
        155, 75, 109, 92, 115, 85, 91, 33, 0, 0, 0, 0,
    ]);

    /// SysvarRent111111111111111111111111111111111
    pub const RENT: PublicKey = PublicKey::new([
        6, 167, 213, 23, 25, 44, 92, 81, 33, 140, 201, 76, 61, 74, 241, 127, 88, 218, 238, 8, 155,
        161, 253, 68, 227, 219, 217, 138, 0, 0, 0, 0,
    ]);

    /// SysvarStakeHistory1111111111111111111111111
    pub const STAKE_HISTORY: PublicKey = PublicKey::new([
        6, 167, 213, 23, 25, 53, 132, 208, 254, 237, 155, 179, 67, 29, 19, 32, 107, 229, 68, 40,
        27, 87, 184, 86, 108, 197, 55, 95, 244, 0, 0, 0,
    ]);

    /// StakeConfig11111111111111111111111111111111
    pub const STAKE_CONFIG: PublicKey = PublicKey::new([
        6, 161, 216, 23, 165, 2, 5, 11, 104, 7, 145, 230, 206, 109, 184, 142, 30, 91, 113, 80,
        246, 31, 198, 121, 10, 78, 180, 209, 0, 0, 0, 0,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_round_trip() {
        let key = PublicKey::new([7u8; 32]);
        let rendered = key.to_base58();
        let parsed: PublicKey = rendered.parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_sysvar_addresses() {
        assert_eq!(
            sysvar::CLOCK.to_base58(),
            "SysvarC1ock11111111111111111111111111111111"
        );
        assert_eq!(
            sysvar::RENT.to_base58(),
            "SysvarRent111111111111111111111111111111111"
        );
        assert_eq!(
            sysvar::STAKE_HISTORY.to_base58(),
            "SysvarStakeHistory1111111111111111111111111"
        );
        assert_eq!(
            sysvar::STAKE_CONFIG.to_base58(),
            "StakeConfig11111111111111111111111111111111"
        );
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        let err = PublicKey::from_bytes(&[1u8; 31]).unwrap_err();
        assert!(matches!(err, IxforgeError::InvalidPublicKey(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        // Valid base58, but decodes to fewer than 32 bytes
        assert!("abc".parse::<PublicKey>().is_err());
    }

    #[test]
    fn test_sdk_conversion() {
        let key = PublicKey::new([9u8; 32]);
        let sdk: solana_sdk::pubkey::Pubkey = key.into();
        assert_eq!(PublicKey::from(sdk), key);
    }

    #[test]
    fn test_json_representation() {
        let key = PublicKey::new([1u8; 32]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key.to_base58()));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
