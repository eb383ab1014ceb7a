use anchor_lang::{prelude::*, system_program};

use crate::{
    constants::STREAM_ACCOUNT_SEED,
    events::StreamCreated,
    state::StreamAccount,
};

#[derive(Accounts)]
pub struct CreateStream<'info> {
    #[account(
        mut,
        seeds = [STREAM_ACCOUNT_SEED, authority.key().as_ref()],
        bump = stream_account.load()?.bump
    )]
    pub stream_account: AccountLoader<'info, StreamAccount>,

    /// Sender; funds the escrow
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Appends a stream and escrows its principal in the stream account
/// Returns the new stream index
pub fn handler(
    ctx: Context<CreateStream>,
    receiver: Pubkey,
    duration: i64,
    amount: u64,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;

    // Phase 1: append to the ledger and DROP borrow before the CPI
    let (stream_index, end_time) = {
        let mut stream_account = ctx.accounts.stream_account.load_mut()?;
        let index = stream_account.push_stream(receiver, duration, amount, now)?;
        (index, stream_account.stream(index)?.end_time)
    };

    // Phase 2: escrow the principal
    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.authority.to_account_info(),
            to: ctx.accounts.stream_account.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)?;

    #[cfg(feature = "verbose")]
    msg!(
        "Stream {} created: {} lamports to {} over {}s",
        stream_index,
        amount,
        receiver,
        duration
    );

    emit!(StreamCreated {
        stream_account: ctx.accounts.stream_account.key(),
        stream_index,
        sender: ctx.accounts.authority.key(),
        receiver,
        amount,
        start_time: now,
        end_time,
    });

    Ok(stream_index)
}
