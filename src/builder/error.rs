//! Build errors for the machine builder.

use crate::builder::validate::HierarchyViolation;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Application context not specified. Call .context(value) before .build()")]
    MissingContext,

    #[error("Invalid state hierarchy: {}", describe(.0))]
    InvalidHierarchy(Vec<HierarchyViolation>),
}

fn describe(violations: &[HierarchyViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
