use anchor_lang::prelude::*;

use crate::error::StakingError;

#[account]
#[derive(Debug, Default)]
pub struct UserStake {
    pub owner: Pubkey,
    pub stake_pool: Pubkey,

    pub staked: u64,
    pub last_settled: i64,
    pub total_earned: u64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    /// Seconds between the last settlement and `until`.
    ///
    /// `last_settled` never passes the settlement horizon, so a negative span
    /// means corrupted state and is reported instead of wrapped.
    pub fn elapsed_until(&self, until: i64) -> Result<i64> {
        let elapsed = until
            .checked_sub(self.last_settled)
            .ok_or(StakingError::MathUnderflow)?;
        require!(elapsed >= 0, StakingError::SettlementClockAhead);
        Ok(elapsed)
    }

    pub fn is_lock_ended(&self, now: i64, staking_period: i64) -> bool {
        now.saturating_sub(self.last_settled) >= staking_period
    }

    pub fn is_active(&self) -> bool {
        self.staked > 0
    }
}
