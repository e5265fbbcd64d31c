//! Door Controller State Machine
//!
//! This example demonstrates a three-level hierarchy with shared behavior in
//! superstates.
//!
//! Key concepts:
//! - Superstates handling events their substates ignore
//! - Entry/exit actions ordered around the lowest common ancestor
//! - Suppressing an event before it reaches a superstate
//! - Logging every event through the tracing observer
//!
//! Run with: RUST_LOG=debug cargo run --example door_controller

use hsm_engine::core::{Event, Outcome};
use hsm_engine::engine::{trace_events, Machine, Scope};
use hsm_engine::hsm_states;
use tracing_subscriber::EnvFilter;

hsm_states! {
    enum Door {
        context: Panel,
        payload: Input,
        Powered => powered,
        Closed(Powered) => closed,
        Locked(Closed) => locked,
        Unlocked(Closed) => unlocked,
        Open(Powered) => open,
    }
}

#[derive(Clone, Debug)]
enum Input {
    Push,
    Pull,
    Key,
    Alarm,
}

#[derive(Debug, Default)]
struct Panel {
    lamp: bool,
    bolt: bool,
    actions: Vec<String>,
}

impl Panel {
    fn log(&mut self, action: &str) {
        println!("  {action}");
        self.actions.push(action.to_string());
    }
}

fn powered(scope: &mut Scope<'_, Door>, event: &Event<Input>) -> Outcome {
    match event {
        Event::Entry => scope.context_mut().log("panel on"),
        Event::User(Input::Alarm) => {
            scope.context_mut().log("alarm: unlocking and opening");
            scope.request_transition(Door::Open);
        }
        _ => {}
    }
    Outcome::Continue
}

fn closed(scope: &mut Scope<'_, Door>, event: &Event<Input>) -> Outcome {
    match event {
        Event::Entry => scope.context_mut().lamp = false,
        Event::Exit => scope.context_mut().lamp = true,
        _ => {}
    }
    Outcome::Continue
}

fn locked(scope: &mut Scope<'_, Door>, event: &Event<Input>) -> Outcome {
    match event {
        Event::Entry => {
            scope.context_mut().bolt = true;
            scope.context_mut().log("bolt thrown");
            Outcome::Continue
        }
        Event::Exit => {
            scope.context_mut().bolt = false;
            scope.context_mut().log("bolt withdrawn");
            Outcome::Continue
        }
        Event::User(Input::Key) => {
            scope.request_transition(Door::Unlocked);
            Outcome::SuppressSuperstates
        }
        Event::User(Input::Pull) => {
            scope.context_mut().log("door is locked");
            Outcome::SuppressSuperstates
        }
        _ => Outcome::Continue,
    }
}

fn unlocked(scope: &mut Scope<'_, Door>, event: &Event<Input>) -> Outcome {
    match event {
        Event::User(Input::Key) => scope.request_transition(Door::Locked),
        Event::User(Input::Pull) => scope.request_transition(Door::Open),
        _ => {}
    }
    Outcome::Continue
}

fn open(scope: &mut Scope<'_, Door>, event: &Event<Input>) -> Outcome {
    match event {
        Event::Entry => scope.context_mut().log("door swings open"),
        Event::Exit => scope.context_mut().log("door swings shut"),
        Event::User(Input::Push) => scope.request_transition(Door::Unlocked),
        _ => {}
    }
    Outcome::Continue
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Door Controller State Machine ===\n");

    let mut door = Machine::builder()
        .initial(Door::Locked)
        .context(Panel::default())
        .observer(trace_events)
        .build()
        .unwrap();

    println!("Initializing:");
    door.initialize().unwrap();
    println!("Active state: {:?}\n", door.active());

    for input in [Input::Pull, Input::Key, Input::Pull, Input::Push, Input::Key, Input::Alarm] {
        println!("Input {input:?}:");
        door.dispatch(&Event::User(input)).unwrap();
        println!(
            "  -> {:?} (lamp: {}, bolt: {})\n",
            door.active(),
            door.context().lamp,
            door.context().bolt
        );
    }

    println!("Actions performed: {}", door.context().actions.len());
    println!("Closed is active: {}", door.is_active(Door::Closed));

    println!("\n=== Example Complete ===");
}
