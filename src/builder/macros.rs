//! Macros for declaring state trees.

/// Declare a state tree: the state enum, its superstate links and the
/// handler for each state.
///
/// Each entry is `Variant => handler` for a root or
/// `Variant(Superstate) => handler` for a substate. Handlers are plain
/// functions `fn(&mut Scope<'_, Name>, &Event<Payload>) -> Outcome`.
///
/// # Example
///
/// ```
/// use hsm_engine::core::{Event, Outcome};
/// use hsm_engine::engine::Scope;
/// use hsm_engine::hsm_states;
///
/// hsm_states! {
///     pub enum Oven {
///         context: u32,
///         payload: (),
///         Powered => powered,
///         Heating(Powered) => heating,
///         Idle(Powered) => idle,
///     }
/// }
///
/// fn powered(_scope: &mut Scope<'_, Oven>, _event: &Event<()>) -> Outcome {
///     Outcome::Continue
/// }
///
/// fn heating(scope: &mut Scope<'_, Oven>, event: &Event<()>) -> Outcome {
///     if let Event::Entry = event {
///         *scope.context_mut() += 1;
///     }
///     Outcome::Continue
/// }
///
/// fn idle(scope: &mut Scope<'_, Oven>, event: &Event<()>) -> Outcome {
///     if let Event::User(()) = event {
///         scope.request_transition(Oven::Heating);
///     }
///     Outcome::SuppressSuperstates
/// }
/// ```
#[macro_export]
macro_rules! hsm_states {
    (@superstate) => {
        None
    };

    (@superstate $superstate:ident) => {
        Some(Self::$superstate)
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            context: $context:ty,
            payload: $payload:ty,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(($superstate:ident))? => $handler:path
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            type Context = $context;
            type Payload = $payload;

            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn superstate(&self) -> Option<Self> {
                match self {
                    $(Self::$variant => $crate::hsm_states!(@superstate $($superstate)?)),*
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn handle(
                &self,
                scope: &mut $crate::engine::Scope<'_, Self>,
                event: &$crate::core::Event<$payload>,
            ) -> $crate::core::Outcome {
                match self {
                    $(Self::$variant => $handler(scope, event)),*
                }
            }
        }
    };
}
