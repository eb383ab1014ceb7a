use anchor_lang::prelude::*;

#[event]
pub struct StreamAccountInitialized {
    pub stream_account: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct StreamCreated {
    pub stream_account: Pubkey,
    pub stream_index: u64,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct StreamWithdrawn {
    pub stream_account: Pubkey,
    pub stream_index: u64,
    pub receiver: Pubkey,
    pub amount: u64,
    pub withdrawn_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct StreamCancelled {
    pub stream_account: Pubkey,
    pub stream_index: u64,
    pub cancelled_by: Pubkey,
    pub receiver_amount: u64,
    pub sender_amount: u64,
    pub timestamp: i64,
}
