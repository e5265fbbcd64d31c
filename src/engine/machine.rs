//! Run-time record of one hierarchical state machine.

use crate::builder::MachineBuilder;
use crate::core::{is_ancestor_or_self, Event, SignalKind, State, MAX_HIERARCHY_DEPTH};
use crate::engine::dispatch::Walk;
use crate::engine::error::DispatchError;
use crate::engine::stack::ChainStack;
use tracing::debug;

/// Cross-cutting hook called with every event before any state handler sees it.
///
/// Observers run for reserved events too, once per pass: the `Init` and
/// `Entry` passes of initialization and the `Exit` and `Entry` passes of every
/// transition.
pub type Observer<S, const DEPTH: usize> = fn(&Machine<S, DEPTH>, &Event<<S as State>::Payload>);

/// A hierarchical state machine instance.
///
/// The machine owns only fixed fields: the active state, a pending
/// transition, the kind of event being processed, an optional observer and
/// the application context. The state tree itself is the type `S` and is
/// shared by every machine built on it.
///
/// `DEPTH` bounds the number of states on any chain and sizes the stack used
/// by entry cascades.
///
/// # Example
///
/// ```rust
/// use hsm_engine::core::{Event, Outcome, State};
/// use hsm_engine::engine::{Machine, Scope};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Door {
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     type Context = Vec<&'static str>;
///     type Payload = &'static str;
///
///     fn superstate(&self) -> Option<Self> {
///         match self {
///             Self::Closed => None,
///             Self::Locked => Some(Self::Closed),
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn handle(&self, scope: &mut Scope<'_, Self>, event: &Event<&'static str>) -> Outcome {
///         match (self, event) {
///             (Self::Locked, Event::Entry) => scope.context_mut().push("click"),
///             (Self::Closed, Event::User("lock")) => scope.request_transition(Self::Locked),
///             _ => {}
///         }
///         Outcome::Continue
///     }
/// }
///
/// let mut door = Machine::new(Door::Closed, Vec::new());
/// door.initialize().unwrap();
/// door.dispatch(&Event::User("lock")).unwrap();
///
/// assert_eq!(door.active(), Door::Locked);
/// assert!(door.is_active(Door::Closed));
/// assert_eq!(door.context(), &vec!["click"]);
/// ```
pub struct Machine<S: State, const DEPTH: usize = MAX_HIERARCHY_DEPTH> {
    pub(super) initial: S,
    pub(super) active: S,
    pub(super) pending: Option<S>,
    pub(super) current: Option<SignalKind>,
    pub(super) observer: Option<Observer<S, DEPTH>>,
    pub(super) context: S::Context,
    pub(super) initialized: bool,
}

impl<S: State> Machine<S> {
    /// Create a machine with the default depth bound.
    ///
    /// The hierarchy is not validated here; use [`Machine::builder`] for
    /// that. Walks up a cyclic superstate chain do not terminate.
    pub fn new(initial: S, context: S::Context) -> Self {
        Self::with_depth(initial, context)
    }

    /// Start a validating builder.
    pub fn builder() -> MachineBuilder<S> {
        MachineBuilder::new()
    }
}

impl<S: State, const DEPTH: usize> Machine<S, DEPTH> {
    /// Create a machine whose depth bound is the `DEPTH` parameter.
    pub fn with_depth(initial: S, context: S::Context) -> Self {
        Self {
            initial,
            active: initial,
            pending: None,
            current: None,
            observer: None,
            context,
            initialized: false,
        }
    }

    /// Install an observer that sees every event first.
    pub fn with_observer(mut self, observer: Observer<S, DEPTH>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Deliver `Init` to the initial state, then enter its whole chain.
    ///
    /// Only the initial state sees `Init`. `Entry` then runs from the root
    /// down to the initial state, as if entering from outside every state.
    /// A transition requested while handling `Init` runs after the entry
    /// cascade.
    ///
    /// Must be called exactly once, before the first [`Machine::dispatch`].
    pub fn initialize(&mut self) -> Result<(), DispatchError> {
        if self.initialized {
            return Err(DispatchError::AlreadyInitialized);
        }
        let entering = ChainStack::<S, DEPTH>::collect(self.initial, None)?;

        debug!(initial = self.initial.name(), "initializing machine");
        self.initialized = true;
        self.deliver_init();
        self.enter(entering);

        let result = self.settle();
        self.current = None;
        result
    }

    /// Process one event against the active state and its superstates.
    ///
    /// The event bubbles leaf to root, subject to each handler's
    /// [`Outcome`](crate::core::Outcome). At most one transition runs, after
    /// the walk has finished.
    ///
    /// Call this from a single place (the scheduler that owns the machine).
    /// Handlers cannot reach it, so it is never reentered.
    pub fn dispatch(&mut self, event: &Event<S::Payload>) -> Result<(), DispatchError> {
        if !self.initialized {
            return Err(DispatchError::NotInitialized);
        }
        self.walk(event, None, Walk::Bubble);

        let result = self.settle();
        self.current = None;
        result
    }

    /// The active (leaf) state.
    pub fn active(&self) -> S {
        self.active
    }

    /// The state the machine was constructed with.
    pub fn initial(&self) -> S {
        self.initial
    }

    /// Check if `state` is the active state or one of its superstates.
    pub fn is_active(&self, state: S) -> bool {
        is_ancestor_or_self(state, self.active)
    }

    /// Kind of the event being processed, while a dispatch is in progress.
    pub fn current_signal(&self) -> Option<SignalKind> {
        self.current
    }

    /// Transition requested during the walk in progress, if any.
    pub fn pending_transition(&self) -> Option<S> {
        self.pending
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Maximum number of states on a chain this machine can enter.
    pub fn max_depth(&self) -> usize {
        DEPTH
    }

    pub fn context(&self) -> &S::Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut S::Context {
        &mut self.context
    }

    pub fn into_context(self) -> S::Context {
        self.context
    }
}

/// Check if `state` is active in `machine`, directly or as a superstate.
pub fn state_is_active<S: State, const DEPTH: usize>(machine: &Machine<S, DEPTH>, state: S) -> bool {
    machine.is_active(state)
}
