//! Basic usage examples for IxForge

use ixforge::prelude::*;
use ixforge::stake;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== IxForge Basic Usage Examples ===\n");

    // Example 1: Initializing a stake account
    example_initialize()?;

    // Example 2: Withdrawing with a lockup custodian
    example_withdraw()?;

    // Example 3: Building a custom instruction byte by byte
    example_custom_instruction()?;

    // Example 4: Keyed (JSON) and binary record forms
    example_record_forms()?;

    Ok(())
}

fn example_initialize() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 1: Initializing a Stake Account");
    println!("----------------------------------------");

    let stake_account = PublicKey::new([1u8; 32]);
    let authorized = Authorized {
        staker: PublicKey::new([2u8; 32]),
        withdrawer: PublicKey::new([3u8; 32]),
    };
    let lockup = Lockup {
        unix_timestamp: 0,
        epoch: 0,
        custodian: PublicKey::new([0u8; 32]),
    };

    let instruction = stake::initialize(&stake_account, &authorized, &lockup)?;

    println!("✓ Instruction created");
    println!("  Program ID: {}", instruction.program_id);
    println!("  Accounts: {}", instruction.accounts.len());
    println!("  Data size: {} bytes", instruction.data.len());
    println!();

    Ok(())
}

fn example_withdraw() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2: Withdraw With a Custodian");
    println!("------------------------------------");

    let stake_account = PublicKey::new([1u8; 32]);
    let withdraw_authority = PublicKey::new([2u8; 32]);
    let recipient = PublicKey::new([3u8; 32]);
    let custodian = PublicKey::new([4u8; 32]);

    let instruction = stake::withdraw(
        &stake_account,
        &withdraw_authority,
        &recipient,
        1_000_000,
        Some(&custodian),
    );

    println!("✓ Instruction created");
    println!("  Accounts: {}", instruction.accounts.len());
    for (index, meta) in instruction.accounts.iter().enumerate() {
        println!(
            "    {}: {} (writable={}, signer={})",
            index, meta.pubkey, meta.is_writable, meta.is_signer
        );
    }
    println!();

    Ok(())
}

fn example_custom_instruction() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 3: Custom Instruction");
    println!("-----------------------------");

    let program_id = PublicKey::new([7u8; 32]);
    let vault = PublicKey::new([8u8; 32]);
    let owner = PublicKey::new([9u8; 32]);

    let instruction = InstructionBuilder::new(program_id)
        .discriminant(5)
        .writable(vault)
        .signer(owner)
        .append_u32(42)
        .append_u64(1_000_000)
        .build();

    // Hand off to any transaction assembler via solana-sdk types
    let sdk_instruction = instruction.to_sdk();

    println!("✓ Instruction created");
    println!("  Data size: {} bytes", sdk_instruction.data.len());
    println!();

    Ok(())
}

fn example_record_forms() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 4: Record Forms");
    println!("-----------------------");

    let args = LockupArgs {
        unix_timestamp: Some(1_700_000_000),
        epoch: None,
        custodian: Some(PublicKey::new([5u8; 32])),
    };

    let keyed = args.to_record()?;
    let binary = args.encode_to_vec()?;

    println!("✓ Keyed form: {}", serde_json::Value::Object(keyed));
    println!("✓ Binary form: {} bytes", binary.len());
    println!();

    Ok(())
}
