//! # Period Staking Program
//!
//! A single-token staking pool with linear, period-capped rewards.
//!
//! A position earns `reward_rate` percent of its principal over one staking
//! period, accruing linearly and stopping at one period's worth until the
//! position is settled again. Settlement compounds the reward into principal
//! while the pool cap leaves room and pays it out otherwise.
//!
//! ## Features
//! - Deposit, settle, withdraw rewards and unstake, each settling first
//! - Global cap on total staked with cap-aware auto-compounding
//! - Hard staking end after which no further reward accrues
//! - Minimum stake per position
//! - Admin setters for rate, end, cap and minimum
//! - Safe math with overflow protection

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;

#[cfg(test)]
mod tests;

use instructions::*;

#[program]
pub mod period_staking {
    use super::*;

    /// Initializes the staking pool.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `reward_rate` - Percent earned over one staking period (0..=100)
    /// * `staking_period` - Staking period in seconds
    /// * `max_total_staked` - Cap on total staked principal
    /// * `min_staked` - Minimum principal per position
    ///
    /// # Errors
    /// Returns an error if the rate exceeds 100 or the period is not positive.
    pub fn initialize(
        ctx: Context<Initialize>,
        reward_rate: u8,
        staking_period: i64,
        max_total_staked: u64,
        min_staked: u64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            reward_rate,
            staking_period,
            max_total_staked,
            min_staked,
        )
    }

    /// Settles the caller's position, then stakes `amount` more tokens.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - The position would stay below the pool minimum
    /// - The pool cap would be exceeded
    /// - The token transfer fails
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Settles the caller's pending reward: compounded when the pool cap
    /// allows, paid out otherwise.
    pub fn settle(ctx: Context<ManagePosition>) -> Result<()> {
        instructions::settle::handler(ctx)
    }

    /// Pays out the caller's pending reward without compounding.
    ///
    /// # Errors
    /// Returns an error if the vault cannot cover the payout.
    pub fn withdraw_rewards(ctx: Context<ManagePosition>) -> Result<()> {
        instructions::withdraw_rewards::handler(ctx)
    }

    /// Settles and returns the caller's whole principal.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Nothing is staked
    /// - A full staking period has not passed since the last settlement
    ///   and the staking end has not been reached
    pub fn unstake(ctx: Context<ManagePosition>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }

    /// Returns the reward a position would receive if settled now.
    pub fn pending_rewards(ctx: Context<PendingRewards>) -> Result<u64> {
        instructions::pending_rewards::handler(ctx)
    }

    /// Funds the pool vault with reward tokens.
    ///
    /// # Errors
    /// Returns an error if amount is zero or insufficient balance.
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    /// Admin function to withdraw vault tokens not backing staked principal.
    pub fn recover_excess(ctx: Context<RecoverExcess>) -> Result<()> {
        instructions::recover_excess::handler(ctx)
    }

    /// Admin function to set the reward rate (percent per period).
    pub fn set_reward_rate(ctx: Context<AdminControl>, reward_rate: u8) -> Result<()> {
        instructions::admin::set_reward_rate_handler(ctx, reward_rate)
    }

    /// Admin function to move the staking end. Must not be in the past.
    pub fn set_staking_end(ctx: Context<AdminControl>, staking_end: i64) -> Result<()> {
        instructions::admin::set_staking_end_handler(ctx, staking_end)
    }

    /// Admin function to set the cap on total staked principal.
    pub fn set_max_total_staked(ctx: Context<AdminControl>, max_total_staked: u64) -> Result<()> {
        instructions::admin::set_max_total_staked_handler(ctx, max_total_staked)
    }

    /// Admin function to set the minimum principal per position.
    pub fn set_min_staked(ctx: Context<AdminControl>, min_staked: u64) -> Result<()> {
        instructions::admin::set_min_staked_handler(ctx, min_staked)
    }

    /// Admin function to transfer authority to a new address.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the current admin
    /// - New authority is zero address
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }
}
