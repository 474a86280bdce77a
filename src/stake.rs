//! Instruction constructors for the on-chain Stake program
//!
//! Stateless, one free function per operation. Each function assembles the
//! account list in the exact order the program's dispatch expects, encodes
//! payload fields in documented order after the discriminant byte, and
//! returns an instruction for downstream transaction assembly. Optional
//! custodian accounts occupy a fixed trailing slot: omitting one shortens
//! the list there and never shifts an earlier account.

use crate::error::Result;
use crate::instruction::{InstructionBuilder, TransactionInstruction};
use crate::pubkey::{sysvar, PublicKey};
use crate::state::{
    Authorized, AuthorizeCheckedWithSeedArgs, AuthorizeWithSeedArgs, Lockup, LockupArgs,
    LockupCheckedArgs, StakeAuthorize,
};

/// Stake11111111111111111111111111111111111111
pub const STAKE_PROGRAM_ID: PublicKey = PublicKey::new([
    6, 161, 216, 23, 145, 55, 84, 42, 152, 52, 55, 189, 254, 42, 122, 178, 85, 127, 83, 92, 138,
    120, 114, 43, 104, 164, 157, 192, 0, 0, 0, 0,
]);

/// Operation codes of the Stake program
///
/// Ordinals must match the program's compiled dispatch table exactly; a
/// mismatch is not detectable locally and misdispatches remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StakeInstructionKind {
    Initialize = 0,
    Authorize = 1,
    DelegateStake = 2,
    Split = 3,
    Withdraw = 4,
    Deactivate = 5,
    SetLockup = 6,
    Merge = 7,
    AuthorizeWithSeed = 8,
    InitializeChecked = 9,
    AuthorizeChecked = 10,
    AuthorizeCheckedWithSeed = 11,
    SetLockupChecked = 12,
}

impl StakeInstructionKind {
    /// Leading payload byte selecting this operation
    pub const fn discriminant(self) -> u8 {
        self as u8
    }
}

fn builder(kind: StakeInstructionKind) -> InstructionBuilder {
    InstructionBuilder::new(STAKE_PROGRAM_ID).discriminant(kind.discriminant())
}

/// Initialize a stake account with authorities and a lockup
pub fn initialize(
    stake: &PublicKey,
    authorized: &Authorized,
    lockup: &Lockup,
) -> Result<TransactionInstruction> {
    Ok(builder(StakeInstructionKind::Initialize)
        .writable(*stake)
        .readonly(sysvar::RENT)
        .append_record(authorized)?
        .append_record(lockup)?
        .build())
}

/// Replace the staker or withdrawer authority
pub fn authorize(
    stake: &PublicKey,
    authority: &PublicKey,
    new_authorized: &PublicKey,
    stake_authorize: StakeAuthorize,
    custodian: Option<&PublicKey>,
) -> TransactionInstruction {
    builder(StakeInstructionKind::Authorize)
        .writable(*stake)
        .readonly(sysvar::CLOCK)
        .signer(*authority)
        .optional_signer(custodian)
        .append_pubkey(new_authorized)
        .append_u8(stake_authorize.ordinal())
        .build()
}

/// Delegate a stake account to a validator vote account
pub fn delegate_stake(
    stake: &PublicKey,
    authority: &PublicKey,
    vote: &PublicKey,
) -> TransactionInstruction {
    builder(StakeInstructionKind::DelegateStake)
        .writable(*stake)
        .readonly(*vote)
        .readonly(sysvar::CLOCK)
        .readonly(sysvar::STAKE_HISTORY)
        .readonly(sysvar::STAKE_CONFIG)
        .signer(*authority)
        .build()
}

/// Split lamports off into a new pre-allocated stake account
pub fn split(
    stake: &PublicKey,
    authority: &PublicKey,
    split_stake: &PublicKey,
    lamports: u64,
) -> TransactionInstruction {
    builder(StakeInstructionKind::Split)
        .writable(*stake)
        .writable(*split_stake)
        .signer(*authority)
        .append_u64(lamports)
        .build()
}

/// Withdraw unstaked lamports to a recipient
///
/// The custodian must co-sign while a lockup is in force.
pub fn withdraw(
    stake: &PublicKey,
    withdraw_authority: &PublicKey,
    recipient: &PublicKey,
    lamports: u64,
    custodian: Option<&PublicKey>,
) -> TransactionInstruction {
    builder(StakeInstructionKind::Withdraw)
        .writable(*stake)
        .writable(*recipient)
        .signer(*withdraw_authority)
        .optional_signer(custodian)
        .append_u64(lamports)
        .build()
}

/// Deactivate a delegated stake account
pub fn deactivate(stake: &PublicKey, authority: &PublicKey) -> TransactionInstruction {
    builder(StakeInstructionKind::Deactivate)
        .writable(*stake)
        .readonly(sysvar::CLOCK)
        .signer(*authority)
        .build()
}

/// Update lockup fields; the signer is the custodian while the lockup is in
/// force, the withdraw authority afterwards
pub fn set_lockup(
    stake: &PublicKey,
    authority: &PublicKey,
    args: &LockupArgs,
) -> Result<TransactionInstruction> {
    Ok(builder(StakeInstructionKind::SetLockup)
        .writable(*stake)
        .signer(*authority)
        .append_record(args)?
        .build())
}

/// Merge a source stake account into a destination account
pub fn merge(
    destination: &PublicKey,
    source: &PublicKey,
    authority: &PublicKey,
) -> TransactionInstruction {
    builder(StakeInstructionKind::Merge)
        .writable(*destination)
        .writable(*source)
        .readonly(sysvar::CLOCK)
        .readonly(sysvar::STAKE_HISTORY)
        .signer(*authority)
        .build()
}

/// Replace an authority where the current authority is derived from a
/// base key with a seed
pub fn authorize_with_seed(
    stake: &PublicKey,
    base: &PublicKey,
    args: &AuthorizeWithSeedArgs,
    custodian: Option<&PublicKey>,
) -> Result<TransactionInstruction> {
    Ok(builder(StakeInstructionKind::AuthorizeWithSeed)
        .writable(*stake)
        .signer(*base)
        .readonly(sysvar::CLOCK)
        .optional_signer(custodian)
        .append_record(args)?
        .build())
}

/// Initialize with both authorities passed as accounts; the withdrawer must
/// sign, so authorities cannot be set to unowned keys by mistake
pub fn initialize_checked(stake: &PublicKey, authorized: &Authorized) -> TransactionInstruction {
    builder(StakeInstructionKind::InitializeChecked)
        .writable(*stake)
        .readonly(sysvar::RENT)
        .readonly(authorized.staker)
        .signer(authorized.withdrawer)
        .build()
}

/// Replace an authority; the new authority must co-sign
pub fn authorize_checked(
    stake: &PublicKey,
    authority: &PublicKey,
    new_authorized: &PublicKey,
    stake_authorize: StakeAuthorize,
    custodian: Option<&PublicKey>,
) -> TransactionInstruction {
    builder(StakeInstructionKind::AuthorizeChecked)
        .writable(*stake)
        .readonly(sysvar::CLOCK)
        .signer(*authority)
        .signer(*new_authorized)
        .optional_signer(custodian)
        .append_u8(stake_authorize.ordinal())
        .build()
}

/// Seed-derived authorize where the new authority must co-sign
pub fn authorize_checked_with_seed(
    stake: &PublicKey,
    base: &PublicKey,
    new_authorized: &PublicKey,
    args: &AuthorizeCheckedWithSeedArgs,
    custodian: Option<&PublicKey>,
) -> Result<TransactionInstruction> {
    Ok(builder(StakeInstructionKind::AuthorizeCheckedWithSeed)
        .writable(*stake)
        .signer(*base)
        .readonly(sysvar::CLOCK)
        .signer(*new_authorized)
        .optional_signer(custodian)
        .append_record(args)?
        .build())
}

/// Update lockup fields; a new custodian is passed as a signing account
/// rather than payload data
pub fn set_lockup_checked(
    stake: &PublicKey,
    authority: &PublicKey,
    args: &LockupCheckedArgs,
    new_custodian: Option<&PublicKey>,
) -> Result<TransactionInstruction> {
    Ok(builder(StakeInstructionKind::SetLockupChecked)
        .writable(*stake)
        .signer(*authority)
        .optional_signer(new_custodian)
        .append_record(args)?
        .build())
}
