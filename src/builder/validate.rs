//! Construction-time validation of a state hierarchy.
//!
//! Dispatch assumes every chain is acyclic and no deeper than the machine's
//! bound. These checks establish that once, before any event is delivered,
//! and report every violation at once using Stillwater's `Validation`.

use crate::core::State;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A way in which a state's chain breaks the hierarchy invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyViolation {
    #[error("State '{state}' has a cyclic superstate chain")]
    Cycle { state: &'static str },

    #[error("State '{state}' has {depth} states on its chain (maximum: {max_depth})")]
    TooDeep {
        state: &'static str,
        depth: usize,
        max_depth: usize,
    },
}

/// Check every state in `states`, accumulating ALL violations.
pub fn validate_hierarchy<S: State>(
    states: &[S],
    max_depth: usize,
) -> Validation<(), NonEmptyVec<HierarchyViolation>> {
    let checks: Vec<Validation<(), NonEmptyVec<HierarchyViolation>>> = states
        .iter()
        .map(|state| check_chain(*state, max_depth))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Walk one chain, remembering every state seen so a cycle cannot loop.
fn check_chain<S: State>(state: S, max_depth: usize) -> Validation<(), NonEmptyVec<HierarchyViolation>> {
    let mut seen: Vec<S> = Vec::new();
    let mut next = Some(state);
    while let Some(current) = next {
        if seen.contains(&current) {
            return Validation::fail(HierarchyViolation::Cycle {
                state: state.name(),
            });
        }
        seen.push(current);
        next = current.superstate();
    }

    if seen.len() > max_depth {
        Validation::fail(HierarchyViolation::TooDeep {
            state: state.name(),
            depth: seen.len(),
            max_depth,
        })
    } else {
        Validation::success(())
    }
}
