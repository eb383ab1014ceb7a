use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Calculate the amount vested at `now` for a linear schedule over [start_time, end_time]
/// Rounds down so a receiver is never paid ahead of schedule
pub fn vested_amount(amount: u64, start_time: i64, end_time: i64, now: i64) -> u64 {
    if now <= start_time {
        return 0;
    }
    if now >= end_time {
        return amount;
    }

    // start_time < now < end_time here, so the duration is non-zero and
    // elapsed < duration keeps the quotient below amount
    let elapsed = now.abs_diff(start_time) as u128;
    let duration = end_time.abs_diff(start_time) as u128;

    (amount as u128 * elapsed / duration) as u64
}

/// Vested minus already withdrawn, floored at zero
pub fn claimable_amount(vested: u64, withdrawn: u64) -> u64 {
    vested.saturating_sub(withdrawn)
}

/// Unearned remainder owed back to the sender
pub fn refundable_amount(amount: u64, vested: u64) -> u64 {
    amount.saturating_sub(vested)
}

/// Moves lamports out of the program-owned escrow PDA
/// The escrow never drops below its rent-exempt minimum
pub fn release_from_escrow<'info>(
    escrow: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let rent_floor = Rent::get()?.minimum_balance(escrow.data_len());
    let available = escrow
        .lamports()
        .checked_sub(rent_floor)
        .ok_or(ErrorCode::InsufficientEscrow)?;
    require!(available >= amount, ErrorCode::InsufficientEscrow);

    let escrow_balance = escrow.lamports() - amount;
    let destination_balance = destination
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    **escrow.try_borrow_mut_lamports()? = escrow_balance;
    **destination.try_borrow_mut_lamports()? = destination_balance;

    Ok(())
}
