use anchor_lang::prelude::*;

use crate::{
    constants::{STREAM_ACCOUNT_SEED, STREAM_ACCOUNT_SIZE},
    errors::ErrorCode,
    events::StreamAccountInitialized,
    state::StreamAccount,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = STREAM_ACCOUNT_SIZE,
        seeds = [STREAM_ACCOUNT_SEED, authority.key().as_ref()],
        bump
    )]
    pub stream_account: AccountLoader<'info, StreamAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the stream ledger for the signing authority
/// Fails with AlreadyInitialized (and charges nothing) if it already exists
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    // An existing account already carries its discriminator, which load_init rejects
    let stream_account = &mut ctx
        .accounts
        .stream_account
        .load_init()
        .map_err(|_| ErrorCode::AlreadyInitialized)?;

    stream_account.authority = ctx.accounts.authority.key();
    stream_account.stream_count = 0;
    stream_account.bump = ctx.bumps.stream_account;

    #[cfg(feature = "verbose")]
    msg!("Stream account initialized for {}", ctx.accounts.authority.key());

    emit!(StreamAccountInitialized {
        stream_account: ctx.accounts.stream_account.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
