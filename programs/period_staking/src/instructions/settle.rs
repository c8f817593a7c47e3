//! Settle instruction handler.
//!
//! Folds the pending reward into principal, or pays it out when the pool
//! cap leaves no room.

use anchor_lang::prelude::*;

use crate::engine::{self, SettlementRoute};
use crate::events::Settled;
use crate::instructions::ManagePosition;

pub fn handler(ctx: Context<ManagePosition>) -> Result<()> {
    let clock = Clock::get()?;
    let mut ledger = ctx.accounts.ledger();

    let accounts = &mut *ctx.accounts;
    let settlement = engine::settle(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        &mut ledger,
        clock.unix_timestamp,
    )?;

    let compounded = settlement.route == SettlementRoute::Compounded;
    msg!(
        "Settled {} reward tokens ({})",
        settlement.reward,
        if compounded { "compounded" } else { "paid out" }
    );
    msg!("Staked after settlement: {}", accounts.user_stake.staked);

    emit!(Settled {
        owner: accounts.user.key(),
        reward: settlement.reward,
        compounded,
        settled_until: settlement.settled_until,
    });

    Ok(())
}
