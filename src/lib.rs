//! IxForge - Low-Level Solana Instruction Builder
//!
//! A library for constructing program instructions at the byte level: a
//! little-endian primitive codec, a structured record codec with an agreed
//! keyed (JSON) form, an account-reference model, and a fluent instruction
//! builder. The Stake program binding shows the intended consumption
//! pattern.

pub mod codec;
pub mod error;
pub mod instruction;
pub mod pubkey;
pub mod record;
pub mod stake;
pub mod state;

pub use error::IxforgeError;
pub use instruction::{AccountMeta, InstructionBuilder, TransactionInstruction};
pub use pubkey::PublicKey;
pub use record::{FieldCodec, FieldSpec, RecordSerialize};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::IxforgeError;
    pub use crate::instruction::{AccountMeta, InstructionBuilder, TransactionInstruction};
    pub use crate::pubkey::{sysvar, PublicKey};
    pub use crate::record::RecordSerialize;
    pub use crate::state::{Authorized, Lockup, LockupArgs, LockupCheckedArgs, StakeAuthorize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_imports() {
        // Ensure all modules are accessible
        let _ = InstructionBuilder::new(PublicKey::new([0u8; 32]));
    }
}
