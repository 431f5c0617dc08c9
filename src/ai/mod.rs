//! Computer opponents: the policy interface, difficulty labels, and the
//! uniformly random policy every difficulty currently maps to.

mod policy;
mod random;

pub use policy::{Difficulty, OpponentPolicy};
pub use random::{policy_for, RandomPolicy};
