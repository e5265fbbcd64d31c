//! Builder for constructing validated state machines.

use crate::builder::error::BuildError;
use crate::builder::validate::validate_hierarchy;
use crate::core::{State, MAX_HIERARCHY_DEPTH};
use crate::engine::{Machine, Observer};
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing state machines with a fluent API.
///
/// `build` checks every state in `S::ALL`, plus the initial state, against
/// the `DEPTH` bound so that dispatch never meets a cycle or an over-deep
/// chain.
pub struct MachineBuilder<S: State, const DEPTH: usize = MAX_HIERARCHY_DEPTH> {
    initial: Option<S>,
    context: Option<S::Context>,
    observer: Option<Observer<S, DEPTH>>,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder with the default depth bound.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: State, const DEPTH: usize> MachineBuilder<S, DEPTH> {
    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the application context (required).
    pub fn context(mut self, context: S::Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Install an observer (optional).
    pub fn observer(mut self, observer: Observer<S, DEPTH>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the hierarchy is
    /// malformed.
    pub fn build(self) -> Result<Machine<S, DEPTH>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        let mut states = S::ALL.to_vec();
        if !states.contains(&initial) {
            states.push(initial);
        }
        if let Validation::Failure(violations) = validate_hierarchy(&states, DEPTH) {
            return Err(BuildError::InvalidHierarchy(
                violations.iter().cloned().collect(),
            ));
        }

        debug!(
            initial = initial.name(),
            states = states.len(),
            max_depth = DEPTH,
            "state hierarchy validated"
        );

        let machine = Machine::with_depth(initial, context);
        Ok(match self.observer {
            Some(observer) => machine.with_observer(observer),
            None => machine,
        })
    }
}

impl<S: State, const DEPTH: usize> Default for MachineBuilder<S, DEPTH> {
    fn default() -> Self {
        Self {
            initial: None,
            context: None,
            observer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HierarchyViolation;
    use crate::core::{Event, Outcome};
    use crate::engine::Scope;

    // Root -> Branch -> Twig -> Bud
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum TestState {
        Root,
        Branch,
        Twig,
        Bud,
    }

    impl State for TestState {
        type Context = u8;
        type Payload = ();

        const ALL: &'static [Self] = &[Self::Root, Self::Branch, Self::Twig, Self::Bud];

        fn superstate(&self) -> Option<Self> {
            match self {
                Self::Root => None,
                Self::Branch => Some(Self::Root),
                Self::Twig => Some(Self::Branch),
                Self::Bud => Some(Self::Twig),
            }
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Root => "Root",
                Self::Branch => "Branch",
                Self::Twig => "Twig",
                Self::Bud => "Bud",
            }
        }

        fn handle(&self, _scope: &mut Scope<'_, Self>, _event: &Event<()>) -> Outcome {
            Outcome::Continue
        }
    }

    fn ignore_events(_machine: &Machine<TestState, 4>, _event: &Event<()>) {}

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::<TestState>::new().context(0).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_context() {
        let result = MachineBuilder::<TestState>::new()
            .initial(TestState::Branch)
            .build();

        assert!(matches!(result, Err(BuildError::MissingContext)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .initial(TestState::Twig)
            .context(7)
            .build();

        assert!(machine.is_ok());
        let machine = machine.unwrap();
        assert_eq!(machine.active(), TestState::Twig);
        assert_eq!(*machine.context(), 7);
        assert!(!machine.is_initialized());
    }

    #[test]
    fn builder_rejects_hierarchy_deeper_than_bound() {
        let result = MachineBuilder::<TestState, 2>::default()
            .initial(TestState::Root)
            .context(0)
            .build();

        match result {
            Err(BuildError::InvalidHierarchy(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&HierarchyViolation::TooDeep {
                    state: "Twig",
                    depth: 3,
                    max_depth: 2,
                }));
                assert!(violations.contains(&HierarchyViolation::TooDeep {
                    state: "Bud",
                    depth: 4,
                    max_depth: 2,
                }));
            }
            Err(other) => panic!("Expected hierarchy violations, got {other}"),
            Ok(_) => panic!("Expected hierarchy violations, got a machine"),
        }
    }

    #[test]
    fn builder_installs_observer() {
        let machine = MachineBuilder::<TestState, 4>::default()
            .initial(TestState::Bud)
            .context(0)
            .observer(ignore_events)
            .build();

        assert!(machine.is_ok());
        assert_eq!(machine.unwrap().max_depth(), 4);
    }

    #[test]
    fn build_error_lists_every_violation() {
        let error = BuildError::InvalidHierarchy(vec![
            HierarchyViolation::Cycle { state: "A" },
            HierarchyViolation::Cycle { state: "B" },
        ]);

        assert_eq!(
            error.to_string(),
            "Invalid state hierarchy: State 'A' has a cyclic superstate chain; \
             State 'B' has a cyclic superstate chain"
        );
    }
}
