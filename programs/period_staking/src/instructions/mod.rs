//! Instruction handlers for the Period Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod deposit;
pub mod fund_rewards;
pub mod initialize;
pub mod manage_position;
pub mod pending_rewards;
pub mod recover_excess;
pub mod settle;
pub mod unstake;
pub mod withdraw_rewards;

pub use admin::*;
pub use deposit::*;
pub use fund_rewards::*;
pub use initialize::*;
pub use manage_position::*;
pub use pending_rewards::*;
pub use recover_excess::*;
pub use settle::*;
pub use unstake::*;
pub use withdraw_rewards::*;
