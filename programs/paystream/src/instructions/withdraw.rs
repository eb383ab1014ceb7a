use anchor_lang::prelude::*;

use crate::{
    constants::STREAM_ACCOUNT_SEED,
    events::StreamWithdrawn,
    state::StreamAccount,
    utils::release_from_escrow,
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [STREAM_ACCOUNT_SEED, authority.key().as_ref()],
        bump = stream_account.load()?.bump
    )]
    pub stream_account: AccountLoader<'info, StreamAccount>,

    /// CHECK: Only used as PDA seed; the stream stores its own sender
    pub authority: UncheckedAccount<'info>,

    /// Must match the stream receiver - checked by the ledger
    #[account(mut)]
    pub receiver: Signer<'info>,
}

/// Releases everything vested and not yet withdrawn to the receiver
/// Nothing claimable is a successful no-op
pub fn handler(ctx: Context<Withdraw>, stream_index: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let receiver = ctx.accounts.receiver.key();

    // Phase 1: update the ledger and DROP borrow before moving lamports
    let (amount, withdrawn_amount) = {
        let mut stream_account = ctx.accounts.stream_account.load_mut()?;
        let stream = stream_account.stream_mut(stream_index)?;
        let amount = stream.withdraw(&receiver, now)?;
        (amount, stream.withdrawn_amount)
    };

    if amount == 0 {
        #[cfg(feature = "verbose")]
        msg!("Stream {} has nothing to withdraw", stream_index);
        return Ok(());
    }

    // Phase 2: pay out of escrow
    release_from_escrow(
        &ctx.accounts.stream_account.to_account_info(),
        &ctx.accounts.receiver.to_account_info(),
        amount,
    )?;

    emit!(StreamWithdrawn {
        stream_account: ctx.accounts.stream_account.key(),
        stream_index,
        receiver,
        amount,
        withdrawn_amount,
        timestamp: now,
    });

    Ok(())
}
