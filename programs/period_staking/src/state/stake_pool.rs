use anchor_lang::prelude::*;

use crate::constants::MAX_REWARD_RATE;
use crate::error::StakingError;

#[account]
#[derive(Debug, Default)]
pub struct StakePool {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub staking_vault: Pubkey,

    /// Percent of principal earned over one full staking period.
    pub reward_rate: u8,
    pub staking_period: i64,
    pub staking_end: i64,

    pub max_total_staked: u64,
    pub min_staked: u64,

    pub total_staked: u64,
    pub total_rewards_compounded: u64,
    pub total_rewards_paid: u64,
    pub staker_count: u64,

    pub last_updated: i64,
    pub created_at: i64,

    pub vault_bump: u8,
    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 3)
        + 1
        + (8 * 2)
        + (8 * 2)
        + (8 * 4)
        + (8 * 2)
        + 2;

    /// Accrual never runs past the staking end.
    pub fn settled_until(&self, now: i64) -> i64 {
        now.min(self.staking_end)
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.staking_end
    }

    /// Whether `amount` more principal fits under `max_total_staked`.
    pub fn has_capacity_for(&self, amount: u64) -> Result<bool> {
        let next = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(next <= self.max_total_staked)
    }

    pub fn validate_reward_rate(reward_rate: u8) -> Result<()> {
        require!(reward_rate <= MAX_REWARD_RATE, StakingError::RewardRateTooHigh);
        Ok(())
    }

    pub fn validate_staking_period(staking_period: i64) -> Result<()> {
        require!(staking_period > 0, StakingError::InvalidStakingPeriod);
        Ok(())
    }

    /// A staking end may be moved, but never into the past.
    pub fn validate_staking_end(staking_end: i64, now: i64) -> Result<()> {
        require!(staking_end >= now, StakingError::StakingEndInPast);
        Ok(())
    }

    pub fn validate_authority(authority: &Pubkey) -> Result<()> {
        require!(
            *authority != Pubkey::default(),
            StakingError::InvalidAuthority
        );
        Ok(())
    }
}
