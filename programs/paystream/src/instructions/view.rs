use anchor_lang::prelude::*;

use crate::{
    constants::STREAM_ACCOUNT_SEED,
    state::{StreamAccount, StreamStatus},
};

// Common context for the read-only stream queries
#[derive(Accounts)]
pub struct StreamView<'info> {
    #[account(
        seeds = [STREAM_ACCOUNT_SEED, authority.key().as_ref()],
        bump = stream_account.load()?.bump
    )]
    pub stream_account: AccountLoader<'info, StreamAccount>,

    /// CHECK: Only used as PDA seed
    pub authority: UncheckedAccount<'info>,
}

pub fn streamed_amount_of(ctx: Context<StreamView>, stream_index: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let stream_account = ctx.accounts.stream_account.load()?;
    Ok(stream_account.stream(stream_index)?.vested_amount(now))
}

pub fn withdrawable_amount_of(ctx: Context<StreamView>, stream_index: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let stream_account = ctx.accounts.stream_account.load()?;
    Ok(stream_account.stream(stream_index)?.withdrawable_amount(now))
}

pub fn refundable_amount_of(ctx: Context<StreamView>, stream_index: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let stream_account = ctx.accounts.stream_account.load()?;
    Ok(stream_account.stream(stream_index)?.refundable_amount(now))
}

pub fn status_of(ctx: Context<StreamView>, stream_index: u64) -> Result<StreamStatus> {
    let now = Clock::get()?.unix_timestamp;
    let stream_account = ctx.accounts.stream_account.load()?;
    Ok(stream_account.stream(stream_index)?.status(now))
}
