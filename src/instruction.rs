//! Account references and instruction construction
//!
//! This module provides the account-reference model and a builder producing
//! immutable instructions: a target program, an ordered account list, and
//! opaque payload bytes. Account ordering is protocol data owned by the
//! target program; nothing here validates it, and nothing here can — wrong
//! orderings only surface as rejections at execution time.

use crate::error::Result;
use crate::pubkey::PublicKey;
use crate::record::RecordSerialize;

/// An account reference with independent writable and signer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: PublicKey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    pub fn new(pubkey: PublicKey, is_signer: bool, is_writable: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable,
        }
    }

    /// Writable, non-signing
    pub fn writable(pubkey: PublicKey) -> Self {
        Self::new(pubkey, false, true)
    }

    /// Read-only, signing
    pub fn signer(pubkey: PublicKey) -> Self {
        Self::new(pubkey, true, false)
    }

    /// Writable and signing
    pub fn writable_signer(pubkey: PublicKey) -> Self {
        Self::new(pubkey, true, true)
    }

    /// Read-only, non-signing
    pub fn readonly(pubkey: PublicKey) -> Self {
        Self::new(pubkey, false, false)
    }

    /// Convert from solana_sdk account metadata
    pub fn from_sdk(meta: &solana_sdk::instruction::AccountMeta) -> Self {
        Self::new(meta.pubkey.into(), meta.is_signer, meta.is_writable)
    }

    /// Convert to solana_sdk account metadata
    pub fn to_sdk(self) -> solana_sdk::instruction::AccountMeta {
        solana_sdk::instruction::AccountMeta {
            pubkey: self.pubkey.into(),
            is_signer: self.is_signer,
            is_writable: self.is_writable,
        }
    }
}

/// An immutable instruction: program identity, ordered accounts, payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInstruction {
    /// Program ID that this instruction invokes
    pub program_id: PublicKey,
    /// Account references, in the order the program's dispatch expects
    pub accounts: Vec<AccountMeta>,
    /// Instruction data (opaque bytes)
    pub data: Vec<u8>,
}

impl TransactionInstruction {
    pub fn new(program_id: PublicKey, accounts: Vec<AccountMeta>, data: Vec<u8>) -> Self {
        Self {
            program_id,
            accounts,
            data,
        }
    }

    /// Convert from a solana_sdk instruction
    pub fn from_sdk(instruction: &solana_sdk::instruction::Instruction) -> Self {
        Self {
            program_id: instruction.program_id.into(),
            accounts: instruction.accounts.iter().map(AccountMeta::from_sdk).collect(),
            data: instruction.data.clone(),
        }
    }

    /// Convert to a solana_sdk instruction for downstream transaction assembly
    pub fn to_sdk(&self) -> solana_sdk::instruction::Instruction {
        solana_sdk::instruction::Instruction {
            program_id: self.program_id.into(),
            accounts: self.accounts.iter().map(|meta| meta.to_sdk()).collect(),
            data: self.data.clone(),
        }
    }
}

/// Fluent instruction builder
///
/// Data starts with the operation's discriminant byte; payload fields are
/// appended after it in the program's documented order.
pub struct InstructionBuilder {
    program_id: PublicKey,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
}

impl InstructionBuilder {
    pub fn new(program_id: PublicKey) -> Self {
        Self {
            program_id,
            accounts: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Set the leading discriminant byte selecting the operation
    pub fn discriminant(mut self, value: u8) -> Self {
        self.data.push(value);
        self
    }

    /// Add an account to the instruction
    pub fn account(mut self, meta: AccountMeta) -> Self {
        self.accounts.push(meta);
        self
    }

    /// Add a writable, non-signing account
    pub fn writable(self, pubkey: PublicKey) -> Self {
        self.account(AccountMeta::writable(pubkey))
    }

    /// Add a read-only signing account
    pub fn signer(self, pubkey: PublicKey) -> Self {
        self.account(AccountMeta::signer(pubkey))
    }

    /// Add a writable signing account
    pub fn writable_signer(self, pubkey: PublicKey) -> Self {
        self.account(AccountMeta::writable_signer(pubkey))
    }

    /// Add a read-only account
    pub fn readonly(self, pubkey: PublicKey) -> Self {
        self.account(AccountMeta::readonly(pubkey))
    }

    /// Add a read-only signing account when present
    ///
    /// An omitted optional account shortens the list at this slot; it never
    /// shifts the position of accounts added before it.
    pub fn optional_signer(self, pubkey: Option<&PublicKey>) -> Self {
        match pubkey {
            Some(key) => self.signer(*key),
            None => self,
        }
    }

    /// Append raw bytes to instruction data
    pub fn append_data(mut self, data: &[u8]) -> Self {
        self.data.extend_from_slice(data);
        self
    }

    /// Append u8 to instruction data
    pub fn append_u8(mut self, value: u8) -> Self {
        self.data.push(value);
        self
    }

    /// Append u32 (little-endian) to instruction data
    pub fn append_u32(mut self, value: u32) -> Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Append u64 (little-endian) to instruction data
    pub fn append_u64(mut self, value: u64) -> Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Append a public key to instruction data
    pub fn append_pubkey(mut self, pubkey: &PublicKey) -> Self {
        self.data.extend_from_slice(pubkey.as_bytes());
        self
    }

    /// Append a structured record to instruction data
    pub fn append_record<T: RecordSerialize>(mut self, record: &T) -> Result<Self> {
        record.encode(&mut self.data)?;
        Ok(self)
    }

    /// Build the final instruction
    pub fn build(self) -> TransactionInstruction {
        TransactionInstruction::new(self.program_id, self.accounts, self.data)
    }
}
