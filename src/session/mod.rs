//! Session state machine and checkpoints.
//!
//! The presentation layer talks to a `Session`: it renders the state,
//! calls `choose` when a move is tapped, and `advance` / `reset` when the
//! outcome or final verdict is dismissed.

pub mod machine;
pub mod snapshot;

pub use machine::{tutorial, Advance, RoundReport, Session};
pub use snapshot::SessionSnapshot;
