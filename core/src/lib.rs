//! # Grand Stay Core
//!
//! Core traits and types for The Grand Stay's client state architecture.
//!
//! This crate provides the fundamental abstractions for building the site's
//! transactional features (order cart, booking flow, session mediation) as
//! pure state containers driven by user intents.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: All possible user intents a reducer processes
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work descriptions (not execution)
//! - **Environment**: Injected collaborators via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Synchronous run-to-completion (no suspension points in the core)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use grand_stay_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Cart {
//!     lines: Vec<CartLine>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CartAction {
//!     AddItem { item: MenuItem },
//!     RemoveItem { item_id: MenuItemId },
//! }
//!
//! struct CartReducer;
//!
//! impl Reducer for CartReducer {
//!     type State = Cart;
//!     type Action = CartAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Cart,
//!         action: CartAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CartAction>; 4]> {
//!         match action {
//!             CartAction::AddItem { item } => {
//!                 state.add_item(item);
//!                 SmallVec::new()
//!             }
//!             CartAction::RemoveItem { item_id } => {
//!                 state.remove_item(&item_id);
//!                 SmallVec::new()
//!             }
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub use effect::Effect;
pub use reducer::Reducer;

/// Reducer module - the core trait for business logic
///
/// Reducers are pure objects: given the current state, an action, and the
/// environment, they mutate state in place and return effect descriptions.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for BookingReducer {
    ///     type State = BookingState;
    ///     type Action = BookingAction;
    ///     type Environment = BookingEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut BookingState,
    ///         action: BookingAction,
    ///         env: &BookingEnvironment,
    ///     ) -> SmallVec<[Effect<BookingAction>; 4]> {
    ///         match action {
    ///             BookingAction::Dismiss => {
    ///                 state.flow.dismiss();
    ///                 SmallVec::new()
    ///             }
    ///             // ...
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the runtime
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. The inline capacity of 4
        /// keeps the common cases (zero or one effect) off the heap.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - follow-up work descriptions
///
/// Effects describe work to be performed by the runtime after a reduce call.
/// They are values, not execution. Because the core is synchronous and
/// performs no I/O, the only follow-up an effect can describe is dispatching
/// another action into the same run-to-completion cycle.
pub mod effect {
    /// Effect type - describes follow-up work for the runtime
    ///
    /// Effects are NOT executed immediately. They are descriptions returned
    /// from reducers; the `Store` drains them FIFO before the next intent is
    /// accepted.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed a follow-up action back into the current cycle
        Dispatch(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// The inert effect
        #[must_use]
        pub const fn none() -> Self {
            Effect::None
        }

        /// Describe a follow-up action to dispatch
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Effect::Dispatch(Box::new(action))
        }

        /// True if this effect carries no work
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }

        /// Lift the carried action into another action type
        ///
        /// Used by parent reducers to embed child effects in their own
        /// action space.
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            F: FnOnce(Action) -> B,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Dispatch(action) => Effect::Dispatch(Box::new(f(*action))),
            }
        }
    }
}

/// Environment module - dependency injection traits
///
/// External collaborators are abstracted behind traits and injected via the
/// Environment parameter, keeping reducers deterministic under test.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - uses system clock
    /// let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    ///
    /// // Test - fixed time for deterministic assertions
    /// let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(instant));
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the operating system
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
