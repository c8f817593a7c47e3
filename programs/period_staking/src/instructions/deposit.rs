//! Deposit instruction handler.
//!
//! Settles any pending reward on the existing principal, then adds new
//! tokens to the user's stake.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::engine::{self, SettlementRoute};
use crate::error::StakingError;
use crate::events::{Deposited, Settled};
use crate::ledger::SplTokenLedger;
use crate::state::{StakePool, UserStake};

/// Accounts required for depositing.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The user depositing tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_vault @ StakingError::VaultMismatch,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's stake account (created on first deposit).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// User's token account for the staking token.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(
        mut,
        constraint = staking_vault.key() == stake_pool.staking_vault @ StakingError::VaultMismatch
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Deposit tokens into the pool.
///
/// # Arguments
/// * `ctx` - Deposit accounts context
/// * `amount` - Amount of tokens to deposit
///
/// # Errors
/// - `ZeroAmount` for an empty deposit
/// - `BelowMinimumStake` if the position would stay under the pool minimum
/// - `MaxTotalStakedExceeded` if the pool cap would be breached
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();

    let mut ledger = SplTokenLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_pool,
        &ctx.accounts.staking_vault,
        ctx.accounts.user.to_account_info(),
        &ctx.accounts.user_token_account,
    );

    let pool_key = ctx.accounts.stake_pool.key();
    let user_stake = &mut ctx.accounts.user_stake;

    // First deposit into a freshly created account
    if user_stake.owner == Pubkey::default() {
        user_stake.owner = user_key;
        user_stake.stake_pool = pool_key;
        user_stake.bump = ctx.bumps.user_stake;
    }

    let stake_pool = &mut ctx.accounts.stake_pool;
    let settlement = engine::deposit(
        stake_pool,
        user_stake,
        &mut ledger,
        amount,
        clock.unix_timestamp,
    )?;

    msg!("Deposited {} tokens", amount);
    msg!(
        "Settled {} reward ({:?}) before deposit",
        settlement.reward,
        settlement.route
    );
    msg!("Total staked by user: {}", user_stake.staked);

    emit!(Settled {
        owner: user_key,
        reward: settlement.reward,
        compounded: settlement.route == SettlementRoute::Compounded,
        settled_until: settlement.settled_until,
    });
    emit!(Deposited {
        owner: user_key,
        amount,
        staked: user_stake.staked,
        total_staked: stake_pool.total_staked,
    });

    Ok(())
}
