//! Handler-facing view of a machine.

use crate::core::{is_ancestor_or_self, SignalKind, State};
use tracing::trace;

/// What a state handler can see and do while it processes one event.
///
/// A scope borrows the machine's pending-transition slot and application
/// context for the duration of a single handler call. Handlers never get the
/// machine itself, so they cannot dispatch events reentrantly.
pub struct Scope<'a, S: State> {
    active: S,
    signal: SignalKind,
    pending: &'a mut Option<S>,
    context: &'a mut S::Context,
}

impl<'a, S: State> Scope<'a, S> {
    pub(crate) fn new(
        active: S,
        signal: SignalKind,
        pending: &'a mut Option<S>,
        context: &'a mut S::Context,
    ) -> Self {
        Self {
            active,
            signal,
            pending,
            context,
        }
    }

    /// The machine's active (leaf) state.
    ///
    /// During an entry cascade this is already the transition target.
    pub fn active(&self) -> S {
        self.active
    }

    /// Kind of the event being processed.
    pub fn signal(&self) -> SignalKind {
        self.signal
    }

    /// Check if `state` is the active state or one of its superstates.
    pub fn is_active(&self, state: S) -> bool {
        is_ancestor_or_self(state, self.active)
    }

    /// Register a transition to run once the current event has finished
    /// bubbling through every state that will see it.
    ///
    /// Ignored while an `Entry` or `Exit` event is being processed. A later
    /// request during the same walk replaces an earlier one.
    pub fn request_transition(&mut self, target: S) {
        if !self.signal.allows_transition() {
            trace!(
                requested = target.name(),
                signal = ?self.signal,
                "transition request ignored"
            );
            return;
        }
        *self.pending = Some(target);
    }

    /// Target of the transition requested so far, if any.
    pub fn pending_transition(&self) -> Option<S> {
        *self.pending
    }

    pub fn context(&self) -> &S::Context {
        &*self.context
    }

    pub fn context_mut(&mut self) -> &mut S::Context {
        &mut *self.context
    }
}
