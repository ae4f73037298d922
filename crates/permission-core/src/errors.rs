use anchor_lang::prelude::*;

/// Errors shared by every permission program.
///
/// All programs report the same custom codes, so clients can decode an
/// engine failure identically whether it was called directly or through the
/// caller program.
#[error_code]
pub enum PermissionError {
    // ========================================================================
    // Engine Errors
    // ========================================================================
    #[msg("Signer is neither the token owner nor the control authority")]
    Unauthorized,

    #[msg("Token account is not locked")]
    NotLocked,

    #[msg("Token account is already locked at the maximum depth")]
    AlreadyAtMaxDepth,

    #[msg("No token record exists for this token account")]
    RecordNotFound,

    #[msg("Mint freeze authority is not the engine control authority")]
    InvalidControlAuthority,

    #[msg("Token account mint does not match the mint provided")]
    MintMismatch,

    #[msg("Token record belongs to a different token account or mint")]
    RecordMismatch,

    #[msg("Stored lock depth exceeds the engine maximum")]
    InvalidLockDepth,

    // ========================================================================
    // Resolution Errors
    // ========================================================================
    #[msg("Could not resolve the target program's accounts")]
    ResolutionFailed,

    #[msg("Target program is unknown or not executable")]
    UnknownTargetProgram,

    #[msg("Target program does not publish this operation")]
    OperationNotPublished,

    #[msg("Materialized instruction has fewer accounts than the base context")]
    IncompleteInstruction,

    #[msg("A published account was not supplied in remaining accounts")]
    MissingRemainingAccount,

    #[msg("Base context lacks an account required by the operation")]
    IncompleteBaseContext,

    #[msg("Target published too many remaining accounts")]
    TooManyRemainingAccounts,
}
