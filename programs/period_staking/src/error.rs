//! Error types for the Period Staking program.
//!
//! Every failure aborts the whole instruction; none of them are retried by
//! the program itself.

use anchor_lang::prelude::*;

/// Custom error codes for the Period Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset) and follow
/// declaration order.
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// Cannot deposit or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// Reward rate exceeds 100 percent per period.
    #[msg("Reward rate exceeds maximum of 100 percent per period")]
    RewardRateTooHigh,

    /// Staking period must be a positive number of seconds.
    #[msg("Staking period must be greater than zero")]
    InvalidStakingPeriod,

    /// A new staking end must not lie in the past.
    #[msg("Staking end cannot be earlier than the current time")]
    StakingEndInPast,

    /// New authority cannot be the default pubkey.
    #[msg("New authority cannot be the default pubkey")]
    InvalidAuthority,

    // ========== Policy Errors ==========

    /// Neither the existing stake nor stake plus deposit reaches the minimum.
    #[msg("Stake would stay below the pool minimum")]
    BelowMinimumStake,

    /// Deposit would push total staked over the pool cap.
    #[msg("Deposit would exceed the maximum total staked")]
    MaxTotalStakedExceeded,

    /// A full staking period has not passed since the last settlement.
    #[msg("Lock period has not ended - cannot unstake yet")]
    LockPeriodNotEnded,

    /// No active stake found for this user.
    #[msg("No active stake found for this user")]
    NoActiveStake,

    /// Custody holds nothing beyond the principal backing total staked.
    #[msg("No excess custody balance to recover")]
    NoExcessCustody,

    // ========== Token Ledger Errors ==========

    /// The pool vault cannot cover an outbound transfer.
    #[msg("Insufficient custody balance for transfer")]
    InsufficientCustody,

    /// The counterparty cannot cover an inbound transfer.
    #[msg("Insufficient token balance for transfer")]
    InsufficientBalance,

    /// Transfer requested for an account the ledger is not bound to.
    #[msg("Transfer counterparty does not match the bound token account owner")]
    CounterpartyMismatch,

    // ========== Math Errors ==========

    /// Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// Arithmetic underflow occurred during calculation.
    #[msg("Arithmetic underflow occurred during calculation")]
    MathUnderflow,

    /// Integer conversion failed (value out of range).
    #[msg("Integer conversion failed - value out of range")]
    ConversionOverflow,

    /// Last settlement lies after the settlement horizon.
    #[msg("Settlement clock is ahead of the current settlement horizon")]
    SettlementClockAhead,

    // ========== Authorization Errors ==========

    /// Unauthorized - caller is not the admin.
    #[msg("Unauthorized: caller is not the pool admin")]
    Unauthorized,

    // ========== Account Validation Errors ==========

    /// The provided mint does not match the pool's staking token.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// The provided vault does not match the pool's staking vault.
    #[msg("Staking vault address mismatch")]
    VaultMismatch,

    /// Vault owner is not the stake pool PDA.
    #[msg("Vault owner must be the stake pool PDA")]
    InvalidVaultOwner,

    /// Token account mint does not match expected mint.
    #[msg("Token account mint does not match pool staking mint")]
    InvalidTokenAccountMint,
}
