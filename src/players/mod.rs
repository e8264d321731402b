//! Move policies used to drive sessions without a UI.

pub mod policy;

pub use policy::{FixedPolicy, MovePolicy, PerfectPolicy, RandomPolicy};
