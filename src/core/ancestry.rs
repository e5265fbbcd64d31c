//! Ancestor-chain algorithms over a state tree.
//!
//! All functions here are pure. Chains are linear, so every walk is bounded
//! by the depth of the tree.

use super::state::State;
use std::iter::FusedIterator;

/// Iterator over a state and each of its superstates, leaf first.
#[derive(Clone, Debug)]
pub struct Ancestors<S> {
    next: Option<S>,
}

impl<S: State> Iterator for Ancestors<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        let current = self.next?;
        self.next = current.superstate();
        Some(current)
    }
}

impl<S: State> FusedIterator for Ancestors<S> {}

/// Walk `state` and then every superstate up to its root.
///
/// ```rust
/// use hsm_engine::core::ancestors;
/// # use hsm_engine::core::{Event, Outcome, State};
/// # use hsm_engine::engine::Scope;
/// # #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// # enum Node { Root, Leaf }
/// # impl State for Node {
/// #     type Context = ();
/// #     type Payload = ();
/// #     fn superstate(&self) -> Option<Self> {
/// #         match self { Self::Root => None, Self::Leaf => Some(Self::Root) }
/// #     }
/// #     fn name(&self) -> &'static str { "Node" }
/// #     fn handle(&self, _: &mut Scope<'_, Self>, _: &Event<()>) -> Outcome { Outcome::Continue }
/// # }
///
/// let chain: Vec<Node> = ancestors(Node::Leaf).collect();
/// assert_eq!(chain, vec![Node::Leaf, Node::Root]);
/// ```
pub fn ancestors<S: State>(state: S) -> Ancestors<S> {
    Ancestors { next: Some(state) }
}

/// Number of states on the chain from `state` to its root, inclusive.
pub fn depth<S: State>(state: S) -> usize {
    ancestors(state).count()
}

/// Check if `ancestor` is `state` or one of its superstates.
pub fn is_ancestor_or_self<S: State>(ancestor: S, state: S) -> bool {
    ancestors(state).any(|s| s == ancestor)
}

/// Find the nearest state that is an ancestor of (or equal to) both `a` and `b`.
///
/// Every ancestor of `a` is checked against every ancestor of `b`, nearest
/// first. Returns `None` when the states belong to disjoint trees.
pub fn lowest_common_ancestor<S: State>(a: S, b: S) -> Option<S> {
    ancestors(a).find(|candidate| is_ancestor_or_self(*candidate, b))
}

/// The state that exit and entry cascades stop before when moving from
/// `source` to `target`.
///
/// This is the lowest common ancestor, except for a self-transition: the
/// source is then exited and re-entered, so the boundary is its superstate.
pub fn transition_boundary<S: State>(source: S, target: S) -> Option<S> {
    if source == target {
        source.superstate()
    } else {
        lowest_common_ancestor(source, target)
    }
}
