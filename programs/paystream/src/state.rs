use anchor_lang::prelude::*;

use crate::{
    constants::MAX_STREAMS,
    errors::ErrorCode,
    utils::{claimable_amount, refundable_amount, vested_amount},
};

/// Per-authority ledger holding every stream that authority has created
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct StreamAccount {
    /// Owner of the account and sender of every stream in it
    pub authority: Pubkey,
    /// Number of streams ever created (also the number of occupied slots)
    pub stream_count: u64,
    /// Append-only arena; the slot index is the external stream handle
    pub streams: [Stream; MAX_STREAMS],
    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// A single linear payment schedule
#[zero_copy(unsafe)]
#[repr(C)]
#[derive(Default)]
pub struct Stream {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    /// Principal escrowed at creation
    pub amount: u64,
    /// Total released to the receiver so far
    pub withdrawn_amount: u64,
    /// 1 until cancelled, then 0 forever
    pub is_active: u8,
}

/// Lamport split produced by a cancellation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Earned but unclaimed, paid to the receiver
    pub receiver_amount: u64,
    /// Unearned remainder, refunded to the sender
    pub sender_amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamStatus {
    Pending,
    Streaming,
    Settled,
    Depleted,
    Canceled,
}

impl StreamAccount {
    pub fn stream(&self, index: u64) -> std::result::Result<&Stream, ErrorCode> {
        let slot = self.slot(index)?;
        Ok(&self.streams[slot])
    }

    pub fn stream_mut(&mut self, index: u64) -> std::result::Result<&mut Stream, ErrorCode> {
        let slot = self.slot(index)?;
        Ok(&mut self.streams[slot])
    }

    /// Appends a new active stream starting at `now` and returns its index
    pub fn push_stream(
        &mut self,
        receiver: Pubkey,
        duration: i64,
        amount: u64,
        now: i64,
    ) -> std::result::Result<u64, ErrorCode> {
        if amount == 0 {
            return Err(ErrorCode::InvalidAmount);
        }
        if duration <= 0 {
            return Err(ErrorCode::InvalidDuration);
        }
        if receiver == Pubkey::default() || receiver == self.authority {
            return Err(ErrorCode::InvalidReceiver);
        }

        let index = self.stream_count;
        let slot = usize::try_from(index).map_err(|_| ErrorCode::StreamLimitReached)?;
        if slot >= MAX_STREAMS {
            return Err(ErrorCode::StreamLimitReached);
        }

        let end_time = now.checked_add(duration).ok_or(ErrorCode::MathOverflow)?;

        self.streams[slot] = Stream {
            sender: self.authority,
            receiver,
            start_time: now,
            end_time,
            amount,
            withdrawn_amount: 0,
            is_active: 1,
        };
        self.stream_count = index.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

        Ok(index)
    }

    fn slot(&self, index: u64) -> std::result::Result<usize, ErrorCode> {
        if index >= self.stream_count {
            return Err(ErrorCode::InvalidIndex);
        }
        usize::try_from(index)
            .ok()
            .filter(|slot| *slot < MAX_STREAMS)
            .ok_or(ErrorCode::InvalidIndex)
    }
}

impl Stream {
    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }

    /// Only the receiver may withdraw
    pub fn can_withdraw(&self, caller: &Pubkey) -> bool {
        *caller == self.receiver
    }

    /// Either party may cancel
    pub fn can_cancel(&self, caller: &Pubkey) -> bool {
        *caller == self.sender || *caller == self.receiver
    }

    /// Amount earned by the receiver at `now`, ignoring withdrawals
    /// Inactive streams are frozen at what was actually paid out
    pub fn vested_amount(&self, now: i64) -> u64 {
        if !self.is_active() {
            return self.withdrawn_amount;
        }
        // Never below what was already paid, even if the clock reads earlier
        // than at the last withdrawal
        vested_amount(self.amount, self.start_time, self.end_time, now).max(self.withdrawn_amount)
    }

    pub fn withdrawable_amount(&self, now: i64) -> u64 {
        if !self.is_active() {
            return 0;
        }
        claimable_amount(self.vested_amount(now), self.withdrawn_amount)
    }

    pub fn refundable_amount(&self, now: i64) -> u64 {
        if !self.is_active() {
            return 0;
        }
        refundable_amount(self.amount, self.vested_amount(now))
    }

    pub fn status(&self, now: i64) -> StreamStatus {
        if !self.is_active() {
            return StreamStatus::Canceled;
        }
        if now < self.start_time {
            return StreamStatus::Pending;
        }
        if self.withdrawn_amount >= self.amount {
            return StreamStatus::Depleted;
        }
        if self.vested_amount(now) >= self.amount {
            return StreamStatus::Settled;
        }
        StreamStatus::Streaming
    }

    /// Releases everything claimable at `now` and returns the released amount
    /// Zero is a valid outcome and leaves the stream untouched
    pub fn withdraw(&mut self, caller: &Pubkey, now: i64) -> std::result::Result<u64, ErrorCode> {
        if !self.is_active() {
            return Err(ErrorCode::StreamInactive);
        }
        if !self.can_withdraw(caller) {
            return Err(ErrorCode::Unauthorized);
        }

        let claimable = self.withdrawable_amount(now);
        if claimable == 0 {
            return Ok(0);
        }

        self.withdrawn_amount = self
            .withdrawn_amount
            .checked_add(claimable)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(claimable)
    }

    /// Terminates the stream, splitting the unwithdrawn principal at `now`
    /// receiver_amount + sender_amount == amount - withdrawn_amount (before)
    pub fn cancel(&mut self, caller: &Pubkey, now: i64) -> std::result::Result<Settlement, ErrorCode> {
        if !self.is_active() {
            return Err(ErrorCode::StreamInactive);
        }
        if !self.can_cancel(caller) {
            return Err(ErrorCode::Unauthorized);
        }

        let vested = self.vested_amount(now);
        let settlement = Settlement {
            receiver_amount: claimable_amount(vested, self.withdrawn_amount),
            sender_amount: refundable_amount(self.amount, vested),
        };

        self.withdrawn_amount = vested;
        self.is_active = 0;

        Ok(settlement)
    }
}

// Compile-time size assertions to catch accidental struct changes
// Stream: see constants.rs = 104
const _: () = assert!(std::mem::size_of::<Stream>() == crate::constants::STREAM_SIZE);

// StreamAccount: see constants.rs for full breakdown = 3384
const _: () = assert!(
    std::mem::size_of::<StreamAccount>() == crate::constants::STREAM_ACCOUNT_SIZE - 8
); // discriminator added by Anchor
