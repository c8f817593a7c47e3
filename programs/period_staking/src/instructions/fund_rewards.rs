/// Fund rewards instruction handler.
///
/// Tops up the pool vault so payout-branch settlements and reward
/// withdrawals can be honoured.
///
/// ## Security Guarantees
/// - Vault validation ensures correct PDA
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no admin restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsFunded;
use crate::state::StakePool;

/// Accounts required for funding rewards.
#[derive(Accounts)]
pub struct FundRewards<'info> {
    /// The funder (anyone can fund - no admin restriction).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_vault @ StakingError::VaultMismatch,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Funder's token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key()
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    /// SECURITY: Must match pool's stored vault + owner validation.
    #[account(
        mut,
        constraint = staking_vault.owner == stake_pool.key() @ StakingError::InvalidVaultOwner,
        constraint = staking_vault.mint == staking_mint.key() @ StakingError::InvalidTokenAccountMint
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the vault with reward tokens.
///
/// Funded tokens are not principal: they never count towards
/// `total_staked` and can be recovered by the authority as excess.
///
/// # Arguments
/// * `ctx` - FundRewards accounts context
/// * `amount` - Amount of tokens to fund
pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.staking_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;
    stake_pool.last_updated = clock.unix_timestamp;

    ctx.accounts.staking_vault.reload()?;
    let vault_balance = ctx.accounts.staking_vault.amount;

    msg!("Rewards funded with {} tokens", amount);
    msg!("New vault balance: {}", vault_balance);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(RewardsFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });

    Ok(())
}
