//! Shared state tree for integration tests.
//!
//! ```text
//! Root ─┬─ A ─┬─ A1
//!       │     └─ A2
//!       └─ B ─── B1 ─── B11
//! Island
//! ```
//!
//! Every handler records `(state, signal)` in the journal, so tests can
//! assert the exact order in which handlers ran.

#![allow(dead_code)]

use hsm_engine::core::{Event, Outcome, SignalKind};
use hsm_engine::engine::{Machine, Scope};
use hsm_engine::hsm_states;

hsm_states! {
    pub enum Node {
        context: Journal,
        payload: Command,
        Root => root,
        A(Root) => a,
        A1(A) => a1,
        A2(A) => a2,
        B(Root) => b,
        B1(B) => b1,
        B11(B1) => b11,
        Island => island,
    }
}

/// Application events understood by every state.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Does nothing but bubble.
    Ping,
    /// `from` requests a transition to `to` when it sees this event.
    Goto { from: Node, to: Node },
}

/// What each handler does and what it saw.
#[derive(Debug, Default)]
pub struct Journal {
    pub calls: Vec<(Node, SignalKind)>,
    /// Outcome a state returns for any event it sees.
    pub outcomes: Vec<(Node, Outcome)>,
    /// `(state, signal, target)`: request `target` when `state` sees `signal`.
    pub requests: Vec<(Node, SignalKind, Node)>,
}

impl Journal {
    pub fn returning(mut self, state: Node, outcome: Outcome) -> Self {
        self.outcomes.push((state, outcome));
        self
    }

    pub fn requesting(mut self, state: Node, signal: SignalKind, target: Node) -> Self {
        self.requests.push((state, signal, target));
        self
    }
}

fn record(me: Node, scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    let signal = event.kind();
    scope.context_mut().calls.push((me, signal));

    if let Event::User(Command::Goto { from, to }) = event {
        if *from == me {
            scope.request_transition(*to);
        }
    }

    let scripted = scope
        .context()
        .requests
        .iter()
        .find(|(state, on, _)| *state == me && *on == signal)
        .map(|(_, _, target)| *target);
    if let Some(target) = scripted {
        scope.request_transition(target);
    }

    scope
        .context()
        .outcomes
        .iter()
        .find(|(state, _)| *state == me)
        .map(|(_, outcome)| *outcome)
        .unwrap_or_default()
}

fn root(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::Root, scope, event)
}

fn a(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::A, scope, event)
}

fn a1(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::A1, scope, event)
}

fn a2(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::A2, scope, event)
}

fn b(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::B, scope, event)
}

fn b1(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::B1, scope, event)
}

fn b11(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::B11, scope, event)
}

fn island(scope: &mut Scope<'_, Node>, event: &Event<Command>) -> Outcome {
    record(Node::Island, scope, event)
}

/// An initialized machine in `initial` with an empty call log.
pub fn started(initial: Node, journal: Journal) -> Machine<Node> {
    let mut machine = Machine::builder()
        .initial(initial)
        .context(journal)
        .build()
        .unwrap();
    machine.initialize().unwrap();
    machine.context_mut().calls.clear();
    machine
}

pub fn goto(from: Node, to: Node) -> Event<Command> {
    Event::User(Command::Goto { from, to })
}

/// Calls for one signal kind, in order.
pub fn calls_of(machine: &Machine<Node>, signal: SignalKind) -> Vec<Node> {
    machine
        .context()
        .calls
        .iter()
        .filter(|(_, kind)| *kind == signal)
        .map(|(state, _)| *state)
        .collect()
}
