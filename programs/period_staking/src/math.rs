//! Reward accrual math.
//!
//! Rewards accrue linearly over one staking period and stop at exactly one
//! period's worth: `elapsed * staked * rate / period / 100` while
//! `elapsed < period`, `staked * rate / 100` afterwards. All products are
//! formed before any division so short spans keep their precision; the
//! remainder below one base unit is truncated.

use anchor_lang::prelude::*;

use crate::constants::PERCENT_DENOMINATOR;
use crate::error::StakingError;

/// Reward earned by `staked` over `elapsed` seconds.
///
/// # Arguments
/// * `staked` - Principal in token base units
/// * `elapsed` - Seconds since the last settlement, already clamped to the staking end
/// * `reward_rate` - Percent earned over a full period
/// * `staking_period` - Period length in seconds
pub fn accrued_reward(
    staked: u64,
    elapsed: i64,
    reward_rate: u8,
    staking_period: i64,
) -> Result<u64> {
    require!(staking_period > 0, StakingError::InvalidStakingPeriod);
    require!(elapsed >= 0, StakingError::SettlementClockAhead);

    if staked == 0 || elapsed == 0 || reward_rate == 0 {
        return Ok(0);
    }

    let staked = staked as u128;
    let rate = reward_rate as u128;

    let reward = if elapsed < staking_period {
        (elapsed as u128)
            .checked_mul(staked)
            .ok_or(StakingError::MathOverflow)?
            .checked_mul(rate)
            .ok_or(StakingError::MathOverflow)?
            .checked_div(staking_period as u128)
            .ok_or(StakingError::MathOverflow)?
            .checked_div(PERCENT_DENOMINATOR)
            .ok_or(StakingError::MathOverflow)?
    } else {
        staked
            .checked_mul(rate)
            .ok_or(StakingError::MathOverflow)?
            .checked_div(PERCENT_DENOMINATOR)
            .ok_or(StakingError::MathOverflow)?
    };

    u64::try_from(reward).map_err(|_| error!(StakingError::ConversionOverflow))
}
