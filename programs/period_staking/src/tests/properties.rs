use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use proptest::prelude::*;

use super::*;
use crate::engine;
use crate::math::accrued_reward;

const USERS: usize = 3;
const CAP: u64 = 20_000;
const MIN: u64 = 100;

#[derive(Clone, Debug)]
enum Op {
    Deposit { user: usize, amount: u64 },
    Settle { user: usize },
    WithdrawRewards { user: usize },
    Unstake { user: usize },
    Advance { seconds: i64 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..USERS, 1u64..6_000).prop_map(|(user, amount)| Op::Deposit { user, amount }),
        2 => (0..USERS).prop_map(|user| Op::Settle { user }),
        1 => (0..USERS).prop_map(|user| Op::WithdrawRewards { user }),
        1 => (0..USERS).prop_map(|user| Op::Unstake { user }),
        3 => (0i64..45 * DAY).prop_map(|seconds| Op::Advance { seconds }),
    ]
}

proptest! {
    /// Random operation sequences keep pool totals equal to the sum of
    /// positions, under the cap, and leave failed operations without effect.
    #[test]
    fn prop_ledger_invariants_hold(
        ops in prop::collection::vec(op(), 1..80),
        staking_days in 20i64..400,
    ) {
        let mut pool = pool(14, CAP, MIN);
        pool.staking_end = T0 + staking_days * DAY;
        let mut ledger = MemoryLedger::new();
        ledger.fund_custody(1_000_000);

        let users: Vec<Pubkey> = (0..USERS).map(|_| Pubkey::new_unique()).collect();
        let mut positions = BTreeMap::new();
        for user in &users {
            ledger.mint(*user, 1_000_000);
            positions.insert(*user, position(*user));
        }

        let mut now = T0;
        for op in ops {
            let user = match op {
                Op::Advance { seconds } => {
                    now += seconds;
                    continue;
                }
                Op::Deposit { user, .. }
                | Op::Settle { user }
                | Op::WithdrawRewards { user }
                | Op::Unstake { user } => users[user],
            };

            let before_pool = pool.clone();
            let before = positions[&user].clone();
            let position = positions.get_mut(&user).unwrap();

            let outcome = match op {
                Op::Deposit { amount, .. } => {
                    engine::deposit(&mut pool, position, &mut ledger, amount, now).map(|_| ())
                }
                Op::Settle { .. } => engine::settle(&mut pool, position, &mut ledger, now).map(|_| ()),
                Op::WithdrawRewards { .. } => {
                    engine::withdraw_rewards(&mut pool, position, &mut ledger, now).map(|_| ())
                }
                Op::Unstake { .. } => engine::unstake(&mut pool, position, &mut ledger, now).map(|_| ()),
                Op::Advance { .. } => unreachable!(),
            };

            let after = &positions[&user];
            if outcome.is_err() {
                prop_assert_eq!(pool.total_staked, before_pool.total_staked);
                prop_assert_eq!(pool.last_updated, before_pool.last_updated);
                prop_assert_eq!(after.staked, before.staked);
                prop_assert_eq!(after.last_settled, before.last_settled);
                prop_assert_eq!(after.total_earned, before.total_earned);
            }

            prop_assert!(after.last_settled >= before.last_settled);
            prop_assert!(after.last_settled <= now.min(pool.staking_end));
            prop_assert!(after.total_earned >= before.total_earned);
            prop_assert!(after.staked == 0 || after.staked >= MIN);
            prop_assert_eq!(pool.total_staked, sum_staked(&positions));
            prop_assert!(pool.total_staked <= pool.max_total_staked);
        }
    }

    /// Accrual never decreases with time and never exceeds one period's worth.
    #[test]
    fn prop_accrual_is_monotonic_and_capped(
        staked in 0u64..=u64::MAX / 2,
        rate in 0u8..=100,
        a in 0i64..3 * PERIOD,
        b in 0i64..3 * PERIOD,
    ) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let cap = (staked as u128 * rate as u128 / 100) as u64;

        let early = accrued_reward(staked, short, rate, PERIOD).unwrap();
        let late = accrued_reward(staked, long, rate, PERIOD).unwrap();

        prop_assert!(early <= late);
        prop_assert!(late <= cap);
        if long >= PERIOD {
            prop_assert_eq!(late, cap);
        }
    }
}
