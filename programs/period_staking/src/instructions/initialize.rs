/// Initialize instruction handler.
///
/// Creates and configures a new staking pool with security validations.
///
/// ## Security Guarantees
/// - The vault is a PDA owned by the stake pool
/// - Mint address is locked to pool state permanently
/// - All parameters validated before storage

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolInitialized;
use crate::state::StakePool;

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `staking_vault` is a PDA with `stake_pool` as authority
/// - Seeds ensure the vault cannot be swapped or replaced
/// - Mint is validated and locked to pool state
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The admin authority that will control the pool.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The stake pool account to be created.
    /// SECURITY: PDA derived from STAKE_POOL_SEED + mint ensures uniqueness per token.
    #[account(
        init,
        payer = authority,
        space = StakePool::LEN,
        seeds = [STAKE_POOL_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The mint for the staking token.
    pub staking_mint: Account<'info, Mint>,

    /// The vault holding staked principal and reward funding.
    /// SECURITY:
    /// - PDA derived from POOL_VAULT_SEED + stake_pool
    /// - Authority set to stake_pool PDA (cannot be changed)
    #[account(
        init,
        payer = authority,
        seeds = [POOL_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = stake_pool
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking pool.
///
/// The staking end is placed `STAKING_WINDOW` after the current time; the
/// staking period is fixed for the lifetime of the pool.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `reward_rate` - Percent earned over one staking period (0..=100)
/// * `staking_period` - Period length in seconds
/// * `max_total_staked` - Cap on total staked principal
/// * `min_staked` - Minimum principal per position
pub fn handler(
    ctx: Context<Initialize>,
    reward_rate: u8,
    staking_period: i64,
    max_total_staked: u64,
    min_staked: u64,
) -> Result<()> {
    // === INPUT VALIDATION ===

    StakePool::validate_reward_rate(reward_rate)?;
    StakePool::validate_staking_period(staking_period)?;

    require!(
        ctx.accounts.staking_vault.owner == ctx.accounts.stake_pool.key(),
        StakingError::InvalidVaultOwner
    );
    require!(
        ctx.accounts.staking_vault.mint == ctx.accounts.staking_mint.key(),
        StakingError::InvalidTokenAccountMint
    );

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let staking_end = clock
        .unix_timestamp
        .checked_add(STAKING_WINDOW)
        .ok_or(StakingError::MathOverflow)?;

    // === STATE INITIALIZATION ===

    stake_pool.authority = ctx.accounts.authority.key();
    stake_pool.staking_mint = ctx.accounts.staking_mint.key();
    stake_pool.staking_vault = ctx.accounts.staking_vault.key();
    stake_pool.reward_rate = reward_rate;
    stake_pool.staking_period = staking_period;
    stake_pool.staking_end = staking_end;
    stake_pool.max_total_staked = max_total_staked;
    stake_pool.min_staked = min_staked;
    stake_pool.total_staked = 0;
    stake_pool.total_rewards_compounded = 0;
    stake_pool.total_rewards_paid = 0;
    stake_pool.staker_count = 0;
    stake_pool.created_at = clock.unix_timestamp;
    stake_pool.last_updated = clock.unix_timestamp;

    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.vault_bump = ctx.bumps.staking_vault;

    msg!("Staking pool initialized");
    msg!("Admin: {}", ctx.accounts.authority.key());
    msg!("Mint: {}", ctx.accounts.staking_mint.key());
    msg!(
        "Rate: {}% per {}s, staking ends at {}",
        reward_rate,
        staking_period,
        staking_end
    );
    msg!("Max total staked: {}, min staked: {}", max_total_staked, min_staked);

    emit!(PoolInitialized {
        authority: ctx.accounts.authority.key(),
        staking_mint: ctx.accounts.staking_mint.key(),
        reward_rate,
        staking_period,
        staking_end,
    });

    Ok(())
}
