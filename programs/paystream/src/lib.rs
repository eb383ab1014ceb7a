use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;
use state::StreamStatus;

declare_id!("GHsd2cgzpaoyFQ9hoQkhcXmAegbLaVh2zLFCjBFdotNn");

#[program]
pub mod paystream {
    use super::*;

    /// Creates the stream account for the signing authority
    /// Fails with AlreadyInitialized if it exists; safe to retry
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Creates a linear stream of `amount` lamports to `receiver` over `duration` seconds
    /// Escrows the amount and returns the stream index
    pub fn create_stream(
        ctx: Context<CreateStream>,
        receiver: Pubkey,
        duration: i64,
        amount: u64,
    ) -> Result<u64> {
        instructions::create_stream::handler(ctx, receiver, duration, amount)
    }

    /// Releases the vested, unwithdrawn amount to the receiver
    /// Only callable by the stream receiver
    pub fn withdraw(ctx: Context<Withdraw>, stream_index: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, stream_index)
    }

    /// Cancels a stream, paying the receiver what has vested and refunding the rest
    /// Callable by the sender or the receiver; terminal
    pub fn cancel_stream(ctx: Context<CancelStream>, stream_index: u64) -> Result<()> {
        instructions::cancel_stream::handler(ctx, stream_index)
    }

    /// Amount vested at the current time
    pub fn streamed_amount_of(ctx: Context<StreamView>, stream_index: u64) -> Result<u64> {
        instructions::view::streamed_amount_of(ctx, stream_index)
    }

    /// Amount the receiver could withdraw at the current time
    pub fn withdrawable_amount_of(ctx: Context<StreamView>, stream_index: u64) -> Result<u64> {
        instructions::view::withdrawable_amount_of(ctx, stream_index)
    }

    /// Amount the sender would get back on cancellation at the current time
    pub fn refundable_amount_of(ctx: Context<StreamView>, stream_index: u64) -> Result<u64> {
        instructions::view::refundable_amount_of(ctx, stream_index)
    }

    pub fn status_of(ctx: Context<StreamView>, stream_index: u64) -> Result<StreamStatus> {
        instructions::view::status_of(ctx, stream_index)
    }
}
