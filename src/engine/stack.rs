//! Bounded traversal stack for entry cascades.

use crate::core::State;
use crate::engine::error::DispatchError;

/// Fixed-capacity stack of states, owned by the call that fills it.
///
/// An entry cascade walks from the target up to the boundary but must run
/// handlers in the opposite order, so the chain is collected here first.
#[derive(Debug)]
pub(crate) struct ChainStack<S, const N: usize> {
    slots: [Option<S>; N],
    len: usize,
}

impl<S: State, const N: usize> ChainStack<S, N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: [None; N],
            len: 0,
        }
    }

    /// Collect `from` and its superstates, stopping before `stop_before`.
    ///
    /// Fails without side effects if the chain does not fit in `N` slots,
    /// which is also how a cyclic hierarchy surfaces at run time.
    pub(crate) fn collect(from: S, stop_before: Option<S>) -> Result<Self, DispatchError> {
        let mut stack = Self::new();
        let mut next = Some(from);
        while let Some(state) = next.filter(|s| Some(*s) != stop_before) {
            stack.push(state).map_err(|_| DispatchError::HierarchyTooDeep {
                state: from.name(),
                max_depth: N,
            })?;
            next = state.superstate();
        }
        Ok(stack)
    }

    /// Push a state, handing it back if the stack is full.
    pub(crate) fn push(&mut self, state: S) -> Result<(), S> {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                *slot = Some(state);
                self.len += 1;
                Ok(())
            }
            None => Err(state),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<S> {
        let index = self.len.checked_sub(1)?;
        self.len = index;
        self.slots[index].take()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, Outcome};
    use crate::engine::Scope;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum TestState {
        Top,
        Middle,
        Bottom,
    }

    impl State for TestState {
        type Context = ();
        type Payload = ();

        fn superstate(&self) -> Option<Self> {
            match self {
                Self::Top => None,
                Self::Middle => Some(Self::Top),
                Self::Bottom => Some(Self::Middle),
            }
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Top => "Top",
                Self::Middle => "Middle",
                Self::Bottom => "Bottom",
            }
        }

        fn handle(&self, _scope: &mut Scope<'_, Self>, _event: &Event<()>) -> Outcome {
            Outcome::Continue
        }
    }

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = ChainStack::<TestState, 3>::new();
        assert_eq!(stack.len(), 0);
        stack.push(TestState::Bottom).unwrap();
        stack.push(TestState::Top).unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(TestState::Top));
        assert_eq!(stack.pop(), Some(TestState::Bottom));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn push_rejects_overflow() {
        let mut stack = ChainStack::<TestState, 1>::new();
        stack.push(TestState::Top).unwrap();
        assert_eq!(stack.push(TestState::Middle), Err(TestState::Middle));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn collect_stops_before_boundary() {
        let mut stack =
            ChainStack::<TestState, 3>::collect(TestState::Bottom, Some(TestState::Top)).unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(TestState::Middle));
        assert_eq!(stack.pop(), Some(TestState::Bottom));
    }

    #[test]
    fn collect_without_boundary_reaches_root() {
        let mut stack = ChainStack::<TestState, 3>::collect(TestState::Bottom, None).unwrap();

        assert_eq!(stack.pop(), Some(TestState::Top));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn collect_from_boundary_is_empty() {
        let stack =
            ChainStack::<TestState, 3>::collect(TestState::Middle, Some(TestState::Middle))
                .unwrap();
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn collect_fails_when_chain_is_too_deep() {
        let result = ChainStack::<TestState, 2>::collect(TestState::Bottom, None);

        assert_eq!(
            result.unwrap_err(),
            DispatchError::HierarchyTooDeep {
                state: "Bottom",
                max_depth: 2,
            }
        );
    }
}
