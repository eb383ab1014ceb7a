use anchor_lang::prelude::*;

use crate::{
    constants::STREAM_ACCOUNT_SEED,
    errors::ErrorCode,
    events::StreamCancelled,
    state::StreamAccount,
    utils::release_from_escrow,
};

#[derive(Accounts)]
pub struct CancelStream<'info> {
    #[account(
        mut,
        seeds = [STREAM_ACCOUNT_SEED, authority.key().as_ref()],
        bump = stream_account.load()?.bump
    )]
    pub stream_account: AccountLoader<'info, StreamAccount>,

    /// CHECK: PDA seed (so always the stream sender) and refund destination
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    /// CHECK: Payout destination - validated against the stored receiver in handler
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    /// Sender or receiver of the stream
    pub caller: Signer<'info>,
}

/// Cancels an active stream and settles it in one step:
/// vested-but-unclaimed goes to the receiver, the unvested rest back to the sender
pub fn handler(ctx: Context<CancelStream>, stream_index: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();

    // Phase 1: settle in the ledger and DROP borrow before moving lamports
    let settlement = {
        let mut stream_account = ctx.accounts.stream_account.load_mut()?;
        let stream = stream_account.stream_mut(stream_index)?;

        require_keys_eq!(
            stream.receiver,
            ctx.accounts.receiver.key(),
            ErrorCode::ReceiverMismatch
        );

        stream.cancel(&caller, now)?
    };

    // Phase 2: both transfers or neither - any failure aborts the transaction
    let escrow = ctx.accounts.stream_account.to_account_info();
    release_from_escrow(
        &escrow,
        &ctx.accounts.receiver.to_account_info(),
        settlement.receiver_amount,
    )?;
    release_from_escrow(
        &escrow,
        &ctx.accounts.authority.to_account_info(),
        settlement.sender_amount,
    )?;

    #[cfg(feature = "verbose")]
    msg!(
        "Stream {} cancelled: {} to receiver, {} refunded",
        stream_index,
        settlement.receiver_amount,
        settlement.sender_amount
    );

    emit!(StreamCancelled {
        stream_account: ctx.accounts.stream_account.key(),
        stream_index,
        cancelled_by: caller,
        receiver_amount: settlement.receiver_amount,
        sender_amount: settlement.sender_amount,
        timestamp: now,
    });

    Ok(())
}
