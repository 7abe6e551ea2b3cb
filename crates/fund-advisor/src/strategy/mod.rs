//! Allocation Strategies
//!
//! Personalized allocation targets and the hand-picked legacy baskets.

mod allocation;
mod legacy;

pub use allocation::{compute_allocation, AllocationHints, AllocationResult, Split};
pub use legacy::{legacy_basket, LegacyAllocation};
