//! Staking accrual and settlement engine.
//!
//! Every operation works on a staged copy of the pool and the position,
//! performs its token movements, and only then commits the copies. A failed
//! precondition or transfer therefore leaves both accounts untouched.
//!
//! Within one operation the inbound transfer always runs before any
//! outbound one.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::ledger::TokenLedger;
use crate::math::accrued_reward;
use crate::state::{StakePool, UserStake};

/// Where a settled reward went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementRoute {
    /// Folded into the position's principal.
    Compounded,
    /// Transferred out because compounding would breach the pool cap.
    PaidOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub reward: u64,
    pub route: SettlementRoute,
    pub settled_until: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unstaked {
    pub principal: u64,
    pub settlement: Settlement,
}

/// Reward owed since the last settlement and the point it is owed up to.
fn accrue(position: &UserStake, pool: &StakePool, now: i64) -> Result<(u64, i64)> {
    let settled_until = pool.settled_until(now);
    let elapsed = position.elapsed_until(settled_until)?;
    let reward = accrued_reward(
        position.staked,
        elapsed,
        pool.reward_rate,
        pool.staking_period,
    )?;
    Ok((reward, settled_until))
}

/// Reward a position would receive if settled at `now`. Read-only.
pub fn pending_rewards(position: &UserStake, pool: &StakePool, now: i64) -> Result<u64> {
    accrue(position, pool, now).map(|(reward, _)| reward)
}

/// Advance the settlement clock and route the reward on staged state.
fn apply_settlement(
    pool: &mut StakePool,
    position: &mut UserStake,
    now: i64,
) -> Result<Settlement> {
    let (reward, settled_until) = accrue(position, pool, now)?;

    position.last_settled = settled_until;
    position.total_earned = position
        .total_earned
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;

    let route = if pool.has_capacity_for(reward)? {
        position.staked = position
            .staked
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        pool.total_rewards_compounded = pool
            .total_rewards_compounded
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        SettlementRoute::Compounded
    } else {
        pool.total_rewards_paid = pool
            .total_rewards_paid
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        SettlementRoute::PaidOut
    };

    Ok(Settlement {
        reward,
        route,
        settled_until,
    })
}

fn pay_out<L: TokenLedger>(ledger: &mut L, to: &Pubkey, settlement: &Settlement) -> Result<()> {
    if settlement.route == SettlementRoute::PaidOut && settlement.reward > 0 {
        ledger.transfer_out(to, settlement.reward)?;
    }
    Ok(())
}

fn commit(
    pool: &mut StakePool,
    position: &mut UserStake,
    mut next_pool: StakePool,
    next_position: UserStake,
    now: i64,
) {
    next_pool.last_updated = now;
    *pool = next_pool;
    *position = next_position;
}

/// Settle a position: compound the pending reward when the pool cap allows,
/// pay it out otherwise.
pub fn settle<L: TokenLedger>(
    pool: &mut StakePool,
    position: &mut UserStake,
    ledger: &mut L,
    now: i64,
) -> Result<Settlement> {
    let mut next_pool = pool.clone();
    let mut next_position = position.clone();

    let settlement = apply_settlement(&mut next_pool, &mut next_position, now)?;
    pay_out(ledger, &position.owner, &settlement)?;

    commit(pool, position, next_pool, next_position, now);
    Ok(settlement)
}

/// Settle, then pull `amount` from the owner and add it to principal.
pub fn deposit<L: TokenLedger>(
    pool: &mut StakePool,
    position: &mut UserStake,
    ledger: &mut L,
    amount: u64,
    now: i64,
) -> Result<Settlement> {
    require!(amount > 0, StakingError::ZeroAmount);

    let staked_after = position
        .staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    require!(
        position.staked >= pool.min_staked || staked_after >= pool.min_staked,
        StakingError::BelowMinimumStake
    );
    require!(
        pool.has_capacity_for(amount)?,
        StakingError::MaxTotalStakedExceeded
    );

    let mut next_pool = pool.clone();
    let mut next_position = position.clone();
    let was_active = position.is_active();

    let settlement = apply_settlement(&mut next_pool, &mut next_position, now)?;

    // Compounded reward consumes headroom too.
    require!(
        next_pool.has_capacity_for(amount)?,
        StakingError::MaxTotalStakedExceeded
    );

    ledger.transfer_in(&position.owner, amount)?;
    pay_out(ledger, &position.owner, &settlement)?;

    next_position.staked = next_position
        .staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    if !was_active {
        next_pool.staker_count = next_pool.staker_count.saturating_add(1);
    }

    commit(pool, position, next_pool, next_position, now);
    Ok(settlement)
}

/// Pay out the pending reward regardless of cap headroom.
pub fn withdraw_rewards<L: TokenLedger>(
    pool: &mut StakePool,
    position: &mut UserStake,
    ledger: &mut L,
    now: i64,
) -> Result<u64> {
    let mut next_pool = pool.clone();
    let mut next_position = position.clone();

    let (reward, settled_until) = accrue(position, pool, now)?;
    next_position.last_settled = settled_until;
    next_position.total_earned = next_position
        .total_earned
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;
    next_pool.total_rewards_paid = next_pool
        .total_rewards_paid
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;

    if reward > 0 {
        ledger.transfer_out(&position.owner, reward)?;
    }

    commit(pool, position, next_pool, next_position, now);
    Ok(reward)
}

/// Settle and return the whole principal.
///
/// Allowed once a full staking period has passed since the last settlement,
/// or at any time after the staking end.
pub fn unstake<L: TokenLedger>(
    pool: &mut StakePool,
    position: &mut UserStake,
    ledger: &mut L,
    now: i64,
) -> Result<Unstaked> {
    require!(position.is_active(), StakingError::NoActiveStake);
    require!(
        position.is_lock_ended(now, pool.staking_period) || pool.has_ended(now),
        StakingError::LockPeriodNotEnded
    );

    let mut next_pool = pool.clone();
    let mut next_position = position.clone();

    let settlement = apply_settlement(&mut next_pool, &mut next_position, now)?;

    let principal = next_position.staked;
    next_position.staked = 0;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_sub(principal)
        .ok_or(StakingError::MathUnderflow)?;
    next_pool.staker_count = next_pool.staker_count.saturating_sub(1);

    pay_out(ledger, &position.owner, &settlement)?;
    ledger.transfer_out(&position.owner, principal)?;

    commit(pool, position, next_pool, next_position, now);
    Ok(Unstaked {
        principal,
        settlement,
    })
}

/// Send custody held beyond `total_staked` to `to`. Principal backing
/// stakes is never touched.
pub fn recover_excess<L: TokenLedger>(
    pool: &mut StakePool,
    ledger: &mut L,
    custodian: &Pubkey,
    to: &Pubkey,
    now: i64,
) -> Result<u64> {
    let excess = ledger.balance_of(custodian).saturating_sub(pool.total_staked);
    require!(excess > 0, StakingError::NoExcessCustody);

    ledger.transfer_out(to, excess)?;
    pool.last_updated = now;
    Ok(excess)
}
