//! Walks up the active state's chain: event bubbling and exit cascades.

use crate::core::{Event, Outcome, State};
use crate::engine::machine::Machine;
use crate::engine::scope::Scope;
use tracing::trace;

/// How a walk treats the outcomes its handlers return.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Walk {
    /// External events: outcomes may end or shorten the walk.
    Bubble,
    /// Exit cascades: every state up to the boundary sees the event.
    Cascade,
}

impl<S: State, const DEPTH: usize> Machine<S, DEPTH> {
    /// Mark `event` as being processed and show it to the observer.
    pub(super) fn begin(&mut self, event: &Event<S::Payload>) {
        self.current = Some(event.kind());
        if let Some(observer) = self.observer {
            observer(self, event);
        }
    }

    /// Run one state's handler.
    pub(super) fn invoke(&mut self, state: S, event: &Event<S::Payload>) -> Outcome {
        let signal = event.kind();
        trace!(state = state.name(), ?signal, "invoking handler");
        let mut scope = Scope::new(self.active, signal, &mut self.pending, &mut self.context);
        state.handle(&mut scope, event)
    }

    /// Deliver `Init` to the active state alone; its superstates never see it.
    pub(super) fn deliver_init(&mut self) {
        let init = Event::Init;
        self.begin(&init);
        self.invoke(self.active, &init);
    }

    /// Walk `event` from the active state toward the root, stopping before
    /// `stop_before`.
    ///
    /// In [`Walk::Bubble`] mode each handler's outcome may end or shorten the
    /// walk; a skipped superstate never carries it past the boundary. In
    /// [`Walk::Cascade`] mode every state below the boundary is visited.
    pub(super) fn walk(&mut self, event: &Event<S::Payload>, stop_before: Option<S>, mode: Walk) {
        self.begin(event);

        let within = |state: &S| Some(*state) != stop_before;
        let mut next = Some(self.active).filter(within);
        while let Some(state) = next {
            next = match mode {
                Walk::Cascade => {
                    self.cascade(state, event);
                    state.superstate()
                }
                Walk::Bubble => match self.invoke(state, event) {
                    Outcome::Continue => state.superstate(),
                    Outcome::SuppressSuperstates => {
                        trace!(state = state.name(), "superstates suppressed");
                        None
                    }
                    Outcome::SuppressImmediateSuperstate => state
                        .superstate()
                        .filter(within)
                        .and_then(|skipped| {
                            trace!(state = state.name(), skipped = skipped.name(), "superstate skipped");
                            skipped.superstate()
                        }),
                },
            }
            .filter(within);
        }
    }

    /// Run a cascade handler; its outcome is not honored.
    pub(super) fn cascade(&mut self, state: S, event: &Event<S::Payload>) {
        let outcome = self.invoke(state, event);
        if outcome != Outcome::Continue {
            trace!(
                state = state.name(),
                ?outcome,
                "suppression ignored during cascade"
            );
        }
    }
}
