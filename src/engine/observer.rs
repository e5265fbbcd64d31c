//! Ready-made observers.

use crate::core::{Event, State};
use crate::engine::machine::Machine;
use std::fmt::Debug;
use tracing::debug;

/// Observer that logs every event the machine processes at debug level.
///
/// ```rust
/// use hsm_engine::engine::{trace_events, Machine};
/// # use hsm_engine::core::{Event, Outcome, State};
/// # use hsm_engine::engine::Scope;
/// # #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// # enum Idle { Only }
/// # impl State for Idle {
/// #     type Context = ();
/// #     type Payload = u8;
/// #     fn superstate(&self) -> Option<Self> { None }
/// #     fn name(&self) -> &'static str { "Only" }
/// #     fn handle(&self, _: &mut Scope<'_, Self>, _: &Event<u8>) -> Outcome { Outcome::Continue }
/// # }
///
/// let mut machine = Machine::new(Idle::Only, ()).with_observer(trace_events);
/// machine.initialize().unwrap();
/// machine.dispatch(&Event::User(7)).unwrap();
/// ```
pub fn trace_events<S, const DEPTH: usize>(machine: &Machine<S, DEPTH>, event: &Event<S::Payload>)
where
    S: State,
    S::Payload: Debug,
{
    debug!(
        active = machine.active().name(),
        signal = ?event.kind(),
        payload = ?event.payload(),
        "event"
    );
}
