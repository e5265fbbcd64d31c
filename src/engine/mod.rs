//! The dispatch and transition engine.
//!
//! This module is the mutable half of the crate: a [`Machine`] holds the
//! run-time record of one state machine and drives events through the shared,
//! immutable state tree.
//!
//! # Key Concepts
//!
//! - **Dispatch**: one external event bubbles from the active state to the root
//! - **Deferred transitions**: requested from a handler, executed after the walk
//! - **Cascades**: exit leaf to boundary, then enter boundary to leaf
//!
//! Nothing here allocates. The traversal stack used by an entry cascade lives
//! on the call stack of the transition that needs it.

mod dispatch;
mod error;
mod machine;
mod observer;
mod scope;
mod stack;
mod transition;

pub use error::DispatchError;
pub use machine::{state_is_active, Machine, Observer};
pub use observer::trace_events;
pub use scope::Scope;
