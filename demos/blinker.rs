//! Blinker State Machine
//!
//! This example drives a small hierarchy from a simulated event queue, the
//! way an embedded scheduler would.
//!
//! Key concepts:
//! - A scheduler loop as the single caller of `dispatch`
//! - Transitions requested during `Init`
//! - Guards using `is_active`
//!
//! Run with: cargo run --example blinker

use hsm_engine::core::{Event, Outcome};
use hsm_engine::engine::{Machine, Scope};
use hsm_engine::hsm_states;
use std::collections::VecDeque;

hsm_states! {
    enum Blinker {
        context: Lamp,
        payload: Tick,
        Running => running,
        LightOn(Running) => light_on,
        LightOff(Running) => light_off,
        Halted => halted,
    }
}

#[derive(Clone, Copy, Debug)]
enum Tick {
    Timer,
    Stop,
}

#[derive(Debug, Default)]
struct Lamp {
    lit: bool,
    flashes: u32,
}

fn running(scope: &mut Scope<'_, Blinker>, event: &Event<Tick>) -> Outcome {
    if let Event::User(Tick::Stop) = event {
        scope.request_transition(Blinker::Halted);
    }
    Outcome::Continue
}

fn light_on(scope: &mut Scope<'_, Blinker>, event: &Event<Tick>) -> Outcome {
    match event {
        Event::Init => scope.request_transition(Blinker::LightOff),
        Event::Entry => {
            let lamp = scope.context_mut();
            lamp.lit = true;
            lamp.flashes += 1;
        }
        Event::Exit => scope.context_mut().lit = false,
        Event::User(Tick::Timer) => scope.request_transition(Blinker::LightOff),
        _ => {}
    }
    Outcome::Continue
}

fn light_off(scope: &mut Scope<'_, Blinker>, event: &Event<Tick>) -> Outcome {
    if let Event::User(Tick::Timer) = event {
        if scope.is_active(Blinker::Running) {
            scope.request_transition(Blinker::LightOn);
        }
    }
    Outcome::Continue
}

fn halted(_scope: &mut Scope<'_, Blinker>, _event: &Event<Tick>) -> Outcome {
    Outcome::SuppressSuperstates
}

fn main() {
    println!("=== Blinker State Machine ===\n");

    let mut blinker = Machine::new(Blinker::LightOn, Lamp::default());
    blinker.initialize().unwrap();
    println!("After initialize: {:?} (Init moved us off)", blinker.active());

    let mut queue: VecDeque<Tick> = (0..6).map(|_| Tick::Timer).collect();
    queue.push_back(Tick::Stop);
    queue.push_back(Tick::Timer);

    while let Some(tick) = queue.pop_front() {
        blinker.dispatch(&Event::User(tick)).unwrap();
        println!(
            "{:?} -> {:?} (lit: {})",
            tick,
            blinker.active(),
            blinker.context().lit
        );
    }

    println!("\nFlashes: {}", blinker.context().flashes);
    println!("\n=== Example Complete ===");
}
