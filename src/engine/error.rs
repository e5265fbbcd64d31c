//! Dispatch error types.

use thiserror::Error;

/// Errors that can occur while initializing or driving a machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// `dispatch` was called before `initialize`
    #[error("Machine not initialized. Call .initialize() before dispatching events")]
    NotInitialized,

    /// `initialize` was called a second time
    #[error("Machine already initialized")]
    AlreadyInitialized,

    /// A chain to be entered has more states than the machine can hold
    #[error("State '{state}' is nested deeper than the maximum hierarchy depth ({max_depth})")]
    HierarchyTooDeep {
        state: &'static str,
        max_depth: usize,
    },
}
