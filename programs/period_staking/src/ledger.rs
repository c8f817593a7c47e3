//! Token ledger seam.
//!
//! The settlement engine moves tokens only through [`TokenLedger`]. On-chain
//! it is backed by SPL Token CPIs against the pool vault; tests plug in an
//! in-memory ledger.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::STAKE_POOL_SEED;
use crate::error::StakingError;
use crate::state::StakePool;

/// Minimal token interface consumed by the settlement engine.
pub trait TokenLedger {
    /// Pull `amount` from `from` into pool custody.
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Pay `amount` out of pool custody to `to`.
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;

    /// Token balance held by `owner`.
    fn balance_of(&self, owner: &Pubkey) -> u64;
}

/// [`TokenLedger`] over the pool vault and one counterparty token account.
///
/// Inbound transfers are authorized by the counterparty signer; outbound
/// transfers are signed by the stake pool PDA, which owns the vault.
///
/// Only two balances are known: the vault (queried by the stake pool key)
/// and the counterparty's token account (queried by its owner). Any other
/// key reads as zero.
pub struct SplTokenLedger<'info> {
    token_program: AccountInfo<'info>,
    stake_pool: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    counterparty: AccountInfo<'info>,
    counterparty_token_account: AccountInfo<'info>,
    counterparty_owner: Pubkey,
    staking_mint: Pubkey,
    pool_bump: u8,
    custody_balance: u64,
    counterparty_balance: u64,
}

impl<'info> SplTokenLedger<'info> {
    pub fn new(
        token_program: &Program<'info, Token>,
        stake_pool: &Account<'info, StakePool>,
        vault: &Account<'info, TokenAccount>,
        counterparty: AccountInfo<'info>,
        counterparty_token_account: &Account<'info, TokenAccount>,
    ) -> Self {
        Self {
            token_program: token_program.to_account_info(),
            stake_pool: stake_pool.to_account_info(),
            vault: vault.to_account_info(),
            counterparty,
            counterparty_token_account: counterparty_token_account.to_account_info(),
            counterparty_owner: counterparty_token_account.owner,
            staking_mint: stake_pool.staking_mint,
            pool_bump: stake_pool.bump,
            custody_balance: vault.amount,
            counterparty_balance: counterparty_token_account.amount,
        }
    }
}

impl<'info> TokenLedger for SplTokenLedger<'info> {
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*from, self.counterparty_owner, StakingError::CounterpartyMismatch);
        require!(
            self.counterparty_balance >= amount,
            StakingError::InsufficientBalance
        );

        let cpi_accounts = Transfer {
            from: self.counterparty_token_account.clone(),
            to: self.vault.clone(),
            authority: self.counterparty.clone(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token::transfer(cpi_ctx, amount)?;

        self.counterparty_balance -= amount;
        self.custody_balance = self
            .custody_balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.counterparty_owner, StakingError::CounterpartyMismatch);
        require!(
            self.custody_balance >= amount,
            StakingError::InsufficientCustody
        );

        let bump = [self.pool_bump];
        let seeds: &[&[u8]] = &[STAKE_POOL_SEED, self.staking_mint.as_ref(), &bump];
        let signer_seeds = &[seeds];

        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: self.counterparty_token_account.clone(),
            authority: self.stake_pool.clone(),
        };
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, amount)?;

        self.custody_balance -= amount;
        self.counterparty_balance = self
            .counterparty_balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Tracked vault or counterparty balance; zero for unbound keys.
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        if owner == self.stake_pool.key {
            self.custody_balance
        } else if *owner == self.counterparty_owner {
            self.counterparty_balance
        } else {
            0
        }
    }
}
