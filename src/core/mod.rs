//! Core hierarchy types and pure algorithms.
//!
//! This module contains the immutable half of the engine:
//! - State definitions via the `State` trait
//! - Events and the engine-reserved signals
//! - Ancestor-chain algorithms (LCA, membership)
//!
//! Nothing in this module mutates a machine; the state tree is a build-time
//! constant that any number of machines can share.

mod ancestry;
mod event;
mod state;

pub use ancestry::{
    ancestors, depth, is_ancestor_or_self, lowest_common_ancestor, transition_boundary, Ancestors,
};
pub use event::{Event, SignalKind};
pub use state::{Outcome, State, MAX_HIERARCHY_DEPTH};
