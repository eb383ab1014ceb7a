use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The stream is inactive")]
    StreamInactive,

    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Stream account already initialized")]
    AlreadyInitialized,

    #[msg("Stream index out of range")]
    InvalidIndex,

    #[msg("Stream amount must be greater than zero")]
    InvalidAmount,

    #[msg("Stream duration must be greater than zero")]
    InvalidDuration,

    #[msg("Receiver cannot be zero or the sender")]
    InvalidReceiver,

    #[msg("Receiver account does not match the stream receiver")]
    ReceiverMismatch,

    #[msg("Stream account is full")]
    StreamLimitReached,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Escrow balance is lower than the amount owed")]
    InsufficientEscrow,
}
