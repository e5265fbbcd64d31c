//! Core State trait for hierarchical state machine states.
//!
//! A state tree is a fixed set of states, each with an optional superstate
//! and a handler. Implementors are plain `Copy` values (normally a field-less
//! enum) so that one tree can back any number of machines.

use super::event::Event;
use crate::engine::Scope;
use std::fmt::Debug;

/// Default maximum number of states on any chain from a leaf to its root.
pub const MAX_HIERARCHY_DEPTH: usize = 5;

/// What a handler asks the dispatcher to do with the event next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Let the event bubble to the superstate.
    #[default]
    Continue,

    /// Stop the walk; no superstate sees this event.
    SuppressSuperstates,

    /// Skip exactly the immediate superstate, then keep bubbling.
    SuppressImmediateSuperstate,
}

/// Trait for states of a hierarchical state machine.
///
/// The hierarchy is described by [`State::superstate`] and must be acyclic
/// with every chain at most the machine's configured depth. Use
/// [`MachineBuilder`](crate::builder::MachineBuilder) to check that before
/// the first event is delivered.
///
/// Most trees are declared with [`hsm_states!`](crate::hsm_states), which
/// writes this implementation. By hand it looks like this:
///
/// ```rust
/// use hsm_engine::core::{Event, Outcome, State};
/// use hsm_engine::engine::Scope;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Lamp {
///     Powered,
///     On,
///     Off,
/// }
///
/// impl State for Lamp {
///     type Context = u32;
///     type Payload = ();
///
///     const ALL: &'static [Self] = &[Self::Powered, Self::On, Self::Off];
///
///     fn superstate(&self) -> Option<Self> {
///         match self {
///             Self::Powered => None,
///             Self::On | Self::Off => Some(Self::Powered),
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Powered => "Powered",
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
///
///     fn handle(&self, scope: &mut Scope<'_, Self>, event: &Event<()>) -> Outcome {
///         match (self, event) {
///             (Self::On, Event::Entry) => *scope.context_mut() += 1,
///             (Self::On, Event::User(())) => scope.request_transition(Self::Off),
///             (Self::Off, Event::User(())) => scope.request_transition(Self::On),
///             _ => {}
///         }
///         Outcome::Continue
///     }
/// }
///
/// assert_eq!(Lamp::On.superstate(), Some(Lamp::Powered));
/// assert_eq!(Lamp::Powered.name(), "Powered");
/// ```
pub trait State: Copy + Eq + Debug + 'static {
    /// Application data owned by the machine and reachable from handlers.
    type Context;

    /// Payload carried by application events.
    type Payload;

    /// Every state of the tree.
    ///
    /// Used only for construction-time validation. The default is empty, in
    /// which case only the initial state's chain is checked.
    const ALL: &'static [Self] = &[];

    /// The parent of this state, or `None` for a root.
    fn superstate(&self) -> Option<Self>;

    /// Debug identifier for logging. Has no runtime semantics.
    fn name(&self) -> &'static str;

    /// Handle one event on behalf of this state.
    ///
    /// Reserved events (`Init`, `Entry`, `Exit`) reach the handler as well;
    /// the returned outcome only matters for `User` events.
    fn handle(&self, scope: &mut Scope<'_, Self>, event: &Event<Self::Payload>) -> Outcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum TestState {
        Root,
        Child,
        Grandchild,
    }

    impl State for TestState {
        type Context = ();
        type Payload = ();

        const ALL: &'static [Self] = &[Self::Root, Self::Child, Self::Grandchild];

        fn superstate(&self) -> Option<Self> {
            match self {
                Self::Root => None,
                Self::Child => Some(Self::Root),
                Self::Grandchild => Some(Self::Child),
            }
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Root => "Root",
                Self::Child => "Child",
                Self::Grandchild => "Grandchild",
            }
        }

        fn handle(&self, _scope: &mut Scope<'_, Self>, _event: &Event<()>) -> Outcome {
            Outcome::Continue
        }
    }

    #[test]
    fn superstate_links_form_a_chain() {
        assert_eq!(TestState::Grandchild.superstate(), Some(TestState::Child));
        assert_eq!(TestState::Child.superstate(), Some(TestState::Root));
        assert_eq!(TestState::Root.superstate(), None);
    }

    #[test]
    fn state_name_returns_debug_identifier() {
        assert_eq!(TestState::Root.name(), "Root");
        assert_eq!(TestState::Child.name(), "Child");
        assert_eq!(TestState::Grandchild.name(), "Grandchild");
    }

    #[test]
    fn all_lists_every_state() {
        assert_eq!(TestState::ALL.len(), 3);
        assert!(TestState::ALL.contains(&TestState::Grandchild));
    }

    #[test]
    fn outcome_defaults_to_continue() {
        assert_eq!(Outcome::default(), Outcome::Continue);
    }
}
