//! Typed payload records for the Stake program
//!
//! Each record declares its wire layout once; the keyed (JSON) form and the
//! binary form are both driven by that declaration, field by field, in
//! declaration order.

use crate::error::{IxforgeError, Result};
use crate::pubkey::PublicKey;
use crate::record::{FieldCodec, FieldSpec, RecordSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which authority of a stake account an authorize operation replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StakeAuthorize {
    Staker = 0,
    Withdrawer = 1,
}

impl StakeAuthorize {
    /// Wire ordinal; must match the on-chain dispatch table
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Staker),
            1 => Ok(Self::Withdrawer),
            other => Err(IxforgeError::Format(format!(
                "invalid authority type: {other}"
            ))),
        }
    }
}

impl Serialize for StakeAuthorize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for StakeAuthorize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let byte = u8::deserialize(deserializer)?;
        Self::from_ordinal(byte).map_err(serde::de::Error::custom)
    }
}

/// The staker and withdrawer authorities of a stake account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorized {
    pub staker: PublicKey,
    pub withdrawer: PublicKey,
}

impl RecordSerialize for Authorized {
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("staker", &FieldCodec::PublicKey),
        FieldSpec::new("withdrawer", &FieldCodec::PublicKey),
    ];
}

/// A withdrawal restriction gated on time, epoch, and a custodian key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lockup {
    pub unix_timestamp: i64,
    pub epoch: u64,
    pub custodian: PublicKey,
}

impl RecordSerialize for Lockup {
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("unixTimestamp", &FieldCodec::I64),
        FieldSpec::new("epoch", &FieldCodec::U64),
        FieldSpec::new("custodian", &FieldCodec::PublicKey),
    ];
}

/// Partial lockup update; absent fields leave the on-chain value unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockupArgs {
    pub unix_timestamp: Option<i64>,
    pub epoch: Option<u64>,
    pub custodian: Option<PublicKey>,
}

impl RecordSerialize for LockupArgs {
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("unixTimestamp", &FieldCodec::Option(&FieldCodec::I64)),
        FieldSpec::new("epoch", &FieldCodec::Option(&FieldCodec::U64)),
        FieldSpec::new("custodian", &FieldCodec::Option(&FieldCodec::PublicKey)),
    ];
}

/// Partial lockup update for the checked variant; the new custodian is
/// passed as a signing account rather than payload data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockupCheckedArgs {
    pub unix_timestamp: Option<i64>,
    pub epoch: Option<u64>,
}

impl RecordSerialize for LockupCheckedArgs {
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("unixTimestamp", &FieldCodec::Option(&FieldCodec::I64)),
        FieldSpec::new("epoch", &FieldCodec::Option(&FieldCodec::U64)),
    ];
}

/// Payload for authorizing with a seed-derived authority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeWithSeedArgs {
    pub new_authorized: PublicKey,
    pub stake_authorize: StakeAuthorize,
    pub authority_seed: String,
    pub authority_owner: PublicKey,
}

impl RecordSerialize for AuthorizeWithSeedArgs {
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("newAuthorized", &FieldCodec::PublicKey),
        FieldSpec::new("stakeAuthorize", &FieldCodec::U8),
        FieldSpec::new("authoritySeed", &FieldCodec::Str),
        FieldSpec::new("authorityOwner", &FieldCodec::PublicKey),
    ];
}

/// Payload for the checked variant; the new authority signs instead of
/// appearing in the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeCheckedWithSeedArgs {
    pub stake_authorize: StakeAuthorize,
    pub authority_seed: String,
    pub authority_owner: PublicKey,
}

impl RecordSerialize for AuthorizeCheckedWithSeedArgs {
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::new("stakeAuthorize", &FieldCodec::U8),
        FieldSpec::new("authoritySeed", &FieldCodec::Str),
        FieldSpec::new("authorityOwner", &FieldCodec::PublicKey),
    ];
}
