/// Admin instruction handlers.
///
/// Handles admin-only parameter updates for the staking pool. None of these
/// touch positions or settle rewards; new values apply to the next
/// settlement of each position.
///
/// ## Security Guarantees
/// - All admin functions require signer == pool.authority
/// - PDA validation ensures correct pool
/// - Parameter bounds checking

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{AuthorityTransferred, PoolParameter, PoolParameterUpdated};
use crate::state::StakePool;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The admin authority.
    /// SECURITY: Must be signer AND match pool.authority.
    #[account(
        mut,
        constraint = authority.key() == stake_pool.authority @ StakingError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The stake pool to modify.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub stake_pool: Account<'info, StakePool>,
}

fn log_update(parameter: PoolParameter, old_value: i128, new_value: i128, admin: Pubkey) {
    msg!("{:?} updated: {} -> {}", parameter, old_value, new_value);
    msg!("Admin: {}", admin);
    emit!(PoolParameterUpdated {
        parameter,
        old_value,
        new_value,
    });
}

/// Set the reward rate, in percent per staking period.
///
/// # Errors
/// Returns `RewardRateTooHigh` above 100.
pub fn set_reward_rate_handler(ctx: Context<AdminControl>, reward_rate: u8) -> Result<()> {
    StakePool::validate_reward_rate(reward_rate)?;

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let old_rate = stake_pool.reward_rate;
    stake_pool.reward_rate = reward_rate;
    stake_pool.last_updated = clock.unix_timestamp;

    log_update(
        PoolParameter::RewardRate,
        old_rate.into(),
        reward_rate.into(),
        ctx.accounts.authority.key(),
    );
    Ok(())
}

/// Move the staking end.
///
/// # Errors
/// Returns `StakingEndInPast` if `staking_end` is before the current time.
pub fn set_staking_end_handler(ctx: Context<AdminControl>, staking_end: i64) -> Result<()> {
    let clock = Clock::get()?;
    StakePool::validate_staking_end(staking_end, clock.unix_timestamp)?;

    let stake_pool = &mut ctx.accounts.stake_pool;
    let old_end = stake_pool.staking_end;
    stake_pool.staking_end = staking_end;
    stake_pool.last_updated = clock.unix_timestamp;

    log_update(
        PoolParameter::StakingEnd,
        old_end.into(),
        staking_end.into(),
        ctx.accounts.authority.key(),
    );
    Ok(())
}

/// Set the cap on total staked principal.
///
/// Lowering it below the current total only blocks new deposits and routes
/// settlements to payout; existing stakes are not affected.
pub fn set_max_total_staked_handler(
    ctx: Context<AdminControl>,
    max_total_staked: u64,
) -> Result<()> {
    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let old_cap = stake_pool.max_total_staked;
    stake_pool.max_total_staked = max_total_staked;
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Total staked: {}", stake_pool.total_staked);
    log_update(
        PoolParameter::MaxTotalStaked,
        old_cap.into(),
        max_total_staked.into(),
        ctx.accounts.authority.key(),
    );
    Ok(())
}

/// Set the minimum principal per position.
pub fn set_min_staked_handler(ctx: Context<AdminControl>, min_staked: u64) -> Result<()> {
    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let old_min = stake_pool.min_staked;
    stake_pool.min_staked = min_staked;
    stake_pool.last_updated = clock.unix_timestamp;

    log_update(
        PoolParameter::MinStaked,
        old_min.into(),
        min_staked.into(),
        ctx.accounts.authority.key(),
    );
    Ok(())
}

/// Transfer admin authority to a new address.
///
/// # Security
/// - Only current authority can call this
/// - New authority must be a valid pubkey (non-zero)
pub fn transfer_authority_handler(
    ctx: Context<AdminControl>,
    new_authority: Pubkey,
) -> Result<()> {
    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    StakePool::validate_authority(&new_authority)?;

    let old_authority = stake_pool.authority;
    stake_pool.authority = new_authority;
    stake_pool.last_updated = clock.unix_timestamp;

    msg!("Authority transferred: {} -> {}", old_authority, new_authority);
    emit!(AuthorityTransferred {
        old_authority,
        new_authority,
    });

    Ok(())
}
