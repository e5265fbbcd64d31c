//! Construction-time API: declaring trees and building validated machines.
//!
//! This module provides the `hsm_states!` macro for declaring a state tree
//! and a fluent builder that checks the tree's invariants once, up front,
//! so the dispatch path never has to.

pub mod error;
pub mod machine;
pub mod macros;
pub mod validate;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use validate::{validate_hierarchy, HierarchyViolation};
