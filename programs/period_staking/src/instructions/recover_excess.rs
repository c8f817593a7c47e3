//! Recover excess instruction handler.
//!
//! Lets the authority withdraw vault tokens that do not back staked
//! principal: leftover reward funding or stray transfers.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::engine;
use crate::error::StakingError;
use crate::events::ExcessRecovered;
use crate::ledger::SplTokenLedger;
use crate::state::StakePool;

#[derive(Accounts)]
pub struct RecoverExcess<'info> {
    /// The admin authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = authority @ StakingError::Unauthorized,
        has_one = staking_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// Authority's token account receiving the excess.
    #[account(
        mut,
        constraint = authority_token_account.mint == stake_pool.staking_mint @ StakingError::MintMismatch,
        constraint = authority_token_account.owner == authority.key()
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RecoverExcess>) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let custodian = ctx.accounts.stake_pool.key();

    let mut ledger = SplTokenLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_pool,
        &ctx.accounts.staking_vault,
        ctx.accounts.authority.to_account_info(),
        &ctx.accounts.authority_token_account,
    );

    let stake_pool = &mut ctx.accounts.stake_pool;
    let recovered = engine::recover_excess(
        stake_pool,
        &mut ledger,
        &custodian,
        &authority,
        clock.unix_timestamp,
    )?;

    msg!("Recovered {} excess tokens", recovered);
    msg!("Principal left in custody: {}", stake_pool.total_staked);

    emit!(ExcessRecovered {
        authority,
        amount: recovered,
    });

    Ok(())
}
