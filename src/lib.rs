//! hsm-engine: a hierarchical state machine dispatch engine
//!
//! States form a fixed tree. Events are delivered to the active (leaf) state
//! and bubble up through its superstates; handlers may stop or shorten that
//! walk and may request a transition, which runs once the walk is complete.
//! A transition exits states from the active leaf up to the lowest common
//! ancestor, then enters states from there down to the target.
//!
//! # Core Concepts
//!
//! - **State**: a node of the tree with a superstate link and a handler, via the `State` trait
//! - **Machine**: the mutable run-time record driven by `dispatch`
//! - **Scope**: what a handler sees; the only place transitions are requested
//!
//! The engine is synchronous and does not allocate while dispatching.
//!
//! # Example
//!
//! ```rust
//! use hsm_engine::core::{Event, Outcome};
//! use hsm_engine::engine::{Machine, Scope};
//! use hsm_engine::hsm_states;
//!
//! hsm_states! {
//!     enum Player {
//!         context: Vec<&'static str>,
//!         payload: &'static str,
//!         Powered => powered,
//!         Stopped(Powered) => stopped,
//!         Playing(Powered) => playing,
//!     }
//! }
//!
//! fn powered(scope: &mut Scope<'_, Player>, event: &Event<&'static str>) -> Outcome {
//!     if let Event::Entry = event {
//!         scope.context_mut().push("power on");
//!     }
//!     Outcome::Continue
//! }
//!
//! fn stopped(scope: &mut Scope<'_, Player>, event: &Event<&'static str>) -> Outcome {
//!     match event {
//!         Event::User("play") => scope.request_transition(Player::Playing),
//!         Event::Exit => scope.context_mut().push("leave stopped"),
//!         _ => {}
//!     }
//!     Outcome::Continue
//! }
//!
//! fn playing(scope: &mut Scope<'_, Player>, event: &Event<&'static str>) -> Outcome {
//!     if let Event::Entry = event {
//!         scope.context_mut().push("start playback");
//!     }
//!     Outcome::Continue
//! }
//!
//! let mut player = Machine::builder()
//!     .initial(Player::Stopped)
//!     .context(Vec::new())
//!     .build()
//!     .unwrap();
//!
//! player.initialize().unwrap();
//! player.dispatch(&Event::User("play")).unwrap();
//!
//! assert_eq!(player.active(), Player::Playing);
//! assert_eq!(
//!     player.context(),
//!     &vec!["power on", "leave stopped", "start playback"]
//! );
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder};
pub use self::core::{Event, Outcome, SignalKind, State, MAX_HIERARCHY_DEPTH};
pub use self::engine::{DispatchError, Machine, Scope};
