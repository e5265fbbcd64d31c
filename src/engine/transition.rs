//! Exit and entry cascades around a deferred transition.

use crate::core::{transition_boundary, Event, State};
use crate::engine::dispatch::Walk;
use crate::engine::error::DispatchError;
use crate::engine::machine::Machine;
use crate::engine::stack::ChainStack;
use tracing::debug;

impl<S: State, const DEPTH: usize> Machine<S, DEPTH> {
    /// Run the transition requested during the last walk, if any.
    pub(super) fn settle(&mut self) -> Result<(), DispatchError> {
        match self.pending.take() {
            Some(target) => self.transition(target),
            None => Ok(()),
        }
    }

    /// Exit from the active state up to the boundary, switch, then enter
    /// down to `target`.
    ///
    /// The boundary state is neither exited nor entered. The entry chain is
    /// collected before anything runs, so a target nested too deeply is
    /// rejected with the machine untouched.
    fn transition(&mut self, target: S) -> Result<(), DispatchError> {
        let source = self.active;
        let boundary = transition_boundary(source, target);
        let entering = ChainStack::<S, DEPTH>::collect(target, boundary)?;

        debug!(
            from = source.name(),
            to = target.name(),
            boundary = boundary.map(|s| s.name()),
            entering = entering.len(),
            "transition"
        );

        self.exit(boundary);
        self.active = target;
        self.enter(entering);

        // Entry and Exit handlers cannot request transitions.
        debug_assert!(self.pending.is_none());
        Ok(())
    }

    /// Deliver `Exit` leaf to root, stopping before `stop_before`.
    fn exit(&mut self, stop_before: Option<S>) {
        self.walk(&Event::Exit, stop_before, Walk::Cascade);
    }

    /// Deliver `Entry` to the collected chain, nearest the boundary first.
    pub(super) fn enter(&mut self, mut entering: ChainStack<S, DEPTH>) {
        let entry = Event::Entry;
        self.begin(&entry);
        while let Some(state) = entering.pop() {
            self.cascade(state, &entry);
        }
    }
}
