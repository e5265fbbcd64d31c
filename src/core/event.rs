//! Events delivered to a state machine.

/// An event delivered to the machine.
///
/// `Init`, `Entry` and `Exit` are reserved for the engine, which synthesizes
/// them during initialization and transitions. Application events travel as
/// `User` and carry an arbitrary payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<P = ()> {
    /// One-time initialization, delivered to the initial state only.
    Init,

    /// The state is being entered.
    Entry,

    /// The state is being exited.
    Exit,

    /// Application-defined event.
    User(P),
}

impl<P> Event<P> {
    /// Payload-free tag of this event.
    pub fn kind(&self) -> SignalKind {
        match self {
            Self::Init => SignalKind::Init,
            Self::Entry => SignalKind::Entry,
            Self::Exit => SignalKind::Exit,
            Self::User(_) => SignalKind::User,
        }
    }

    /// The application payload, if this is a user event.
    pub fn payload(&self) -> Option<&P> {
        match self {
            Self::User(payload) => Some(payload),
            _ => None,
        }
    }

    /// Check if this is one of the engine-reserved signals.
    pub fn is_reserved(&self) -> bool {
        !matches!(self, Self::User(_))
    }
}

/// The signal of an event without its payload.
///
/// The machine records the kind of the event it is processing; transition
/// requests consult it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Init,
    Entry,
    Exit,
    User,
}

impl SignalKind {
    /// Transitions may not be requested while entering or exiting states.
    pub fn allows_transition(self) -> bool {
        !matches!(self, Self::Entry | Self::Exit)
    }
}
