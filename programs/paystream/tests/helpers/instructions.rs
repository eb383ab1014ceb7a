//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("GHsd2cgzpaoyFQ9hoQkhcXmAegbLaVh2zLFCjBFdotNn");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
pub const DISCRIMINATOR_INITIALIZE: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];
pub const DISCRIMINATOR_CREATE_STREAM: [u8; 8] = [0x47, 0xbc, 0x6f, 0x7f, 0x6c, 0x28, 0xe5, 0x9e];
pub const DISCRIMINATOR_WITHDRAW: [u8; 8] = [0xb7, 0x12, 0x46, 0x9c, 0x94, 0x6d, 0xa1, 0x22];
pub const DISCRIMINATOR_CANCEL_STREAM: [u8; 8] = [0xda, 0xdd, 0x26, 0x19, 0xb1, 0xcf, 0xbc, 0x5b];
pub const DISCRIMINATOR_STREAMED_AMOUNT_OF: [u8; 8] = [0x5b, 0x45, 0xdb, 0x30, 0xbd, 0x1a, 0x0d, 0x21];
pub const DISCRIMINATOR_WITHDRAWABLE_AMOUNT_OF: [u8; 8] = [0x1e, 0xc3, 0x8c, 0x8d, 0xad, 0x7b, 0xfd, 0x3c];
pub const DISCRIMINATOR_REFUNDABLE_AMOUNT_OF: [u8; 8] = [0xa0, 0x88, 0x72, 0x78, 0xea, 0xb2, 0x92, 0x3a];
pub const DISCRIMINATOR_STATUS_OF: [u8; 8] = [0x5a, 0xd6, 0xfd, 0xed, 0x7e, 0xec, 0x84, 0xed];

/// Derive stream account PDA
pub fn derive_stream_account(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"stream", authority.as_ref()], &PROGRAM_ID)
}

fn index_data(discriminator: [u8; 8], stream_index: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&discriminator);
    data.extend_from_slice(&stream_index.to_le_bytes());
    data
}

/// Build initialize instruction
///
/// Accounts:
/// 0. stream_account (writable) - PDA to initialize
/// 1. authority (writable, signer)
/// 2. system_program
pub fn build_initialize(stream_account: Pubkey, authority: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(stream_account, false),
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: DISCRIMINATOR_INITIALIZE.to_vec(),
    }
}

/// Build create_stream instruction
///
/// Accounts:
/// 0. stream_account (writable)
/// 1. authority (writable, signer)
/// 2. system_program
pub fn build_create_stream(
    stream_account: Pubkey,
    authority: Pubkey,
    receiver: Pubkey,
    duration: i64,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32 + 8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_CREATE_STREAM);
    data.extend_from_slice(&receiver.to_bytes());
    data.extend_from_slice(&duration.to_le_bytes());
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(stream_account, false),
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build withdraw instruction
///
/// Accounts:
/// 0. stream_account (writable)
/// 1. authority (readonly) - PDA seed
/// 2. receiver (writable, signer)
pub fn build_withdraw(
    stream_account: Pubkey,
    authority: Pubkey,
    receiver: Pubkey,
    stream_index: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(stream_account, false),
            AccountMeta::new_readonly(authority, false),
            AccountMeta::new(receiver, true),
        ],
        data: index_data(DISCRIMINATOR_WITHDRAW, stream_index),
    }
}

/// Build cancel_stream instruction
///
/// Accounts:
/// 0. stream_account (writable)
/// 1. authority (writable) - PDA seed and refund destination
/// 2. receiver (writable) - payout destination
/// 3. caller (signer) - sender or receiver
pub fn build_cancel_stream(
    stream_account: Pubkey,
    authority: Pubkey,
    receiver: Pubkey,
    caller: Pubkey,
    stream_index: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(stream_account, false),
            AccountMeta::new(authority, false),
            AccountMeta::new(receiver, false),
            AccountMeta::new_readonly(caller, true),
        ],
        data: index_data(DISCRIMINATOR_CANCEL_STREAM, stream_index),
    }
}

/// Build a read-only view instruction (streamed/withdrawable/refundable_amount_of, status_of)
///
/// Accounts:
/// 0. stream_account (readonly)
/// 1. authority (readonly) - PDA seed
pub fn build_view(
    discriminator: [u8; 8],
    stream_account: Pubkey,
    authority: Pubkey,
    stream_index: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(stream_account, false),
            AccountMeta::new_readonly(authority, false),
        ],
        data: index_data(discriminator, stream_index),
    }
}
