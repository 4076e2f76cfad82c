//! # Grand Stay Runtime
//!
//! Runtime implementation for The Grand Stay's state architecture.
//!
//! This crate provides the synchronous Store runtime that owns feature state
//! and coordinates reducer execution.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, applies one reducer call per intent
//! - **Feedback loop**: Dispatched follow-up actions drain FIFO until the
//!   cycle is quiescent, so every intent runs to completion before the next
//!   one is accepted
//! - **Feedback guard**: A configurable cap on follow-up actions turns an
//!   unboundedly dispatching reducer into a reported error instead of a hang
//!
//! All mutations are synchronous. There is no parallelism, no suspension,
//! and no locking: a single owner drives the store from a single thread,
//! matching the one-guest-one-session model of the site.
//!
//! ## Example
//!
//! ```ignore
//! use grand_stay_runtime::Store;
//!
//! let mut store = Store::new(
//!     SessionState::default(),
//!     SessionReducer::default(),
//!     SessionEnvironment::new(Arc::new(SystemClock)),
//! );
//!
//! // Send an intent; state is settled when this returns
//! store.send(SessionAction::OpenCart)?;
//!
//! // Read state through a projection
//! let view = store.state(SessionState::view);
//! ```

use std::collections::VecDeque;

use grand_stay_core::effect::Effect;
use grand_stay_core::reducer::Reducer;

pub use error::StoreError;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// The synchronous store cannot fail on ordinary intents; the only
    /// failure mode is a runaway feedback cycle, which indicates a reducer
    /// defect rather than a user condition.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A run-to-completion cycle dispatched more follow-up actions than
        /// the configured limit allows
        ///
        /// The drain is aborted; state keeps the mutations applied so far.
        #[error("feedback action limit exceeded ({limit} follow-up actions in one cycle)")]
        FeedbackOverflow {
            /// The configured follow-up cap that was exceeded
            limit: usize,
        },
    }
}

/// Configuration for Store instances
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// let store = Store::with_config(state, reducer, env, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of follow-up actions one cycle may dispatch
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the follow-up action cap
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        // Far above any sanctioned intent chain; low enough to fail fast.
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// The Store runtime - owns state and drives reducers
///
/// `send` applies the reducer to the given action, then drains any
/// dispatched follow-up actions FIFO until the cycle is quiescent. Intents
/// are therefore strictly sequential: the state observed after `send`
/// returns is the settled result of that intent.
pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    environment: R::Environment,
    config: StoreConfig,
}

impl<R: Reducer> Store<R> {
    /// Create a new store with default configuration
    ///
    /// # Arguments
    ///
    /// - `initial_state`: Starting state
    /// - `reducer`: The reducer driving this store
    /// - `environment`: Injected dependencies passed to every reduce call
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new store with custom configuration
    #[must_use]
    pub const fn with_config(
        initial_state: R::State,
        reducer: R,
        environment: R::Environment,
        config: StoreConfig,
    ) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            config,
        }
    }

    /// Send an action and run the cycle to completion
    ///
    /// Applies the reducer to `action`, then drains dispatched follow-ups in
    /// FIFO order; follow-ups dispatched while draining join the back of the
    /// queue. When this returns, the cycle is quiescent.
    ///
    /// # Errors
    ///
    /// [`StoreError::FeedbackOverflow`] if the cycle dispatches more
    /// follow-up actions than [`StoreConfig::max_feedback_actions`]. The
    /// drain stops there; mutations applied up to that point remain.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&mut self, action: R::Action) -> Result<(), StoreError> {
        metrics::counter!("store.actions.sent").increment(1);

        let mut queue = VecDeque::new();
        self.apply(action, &mut queue);

        let mut drained = 0_usize;
        while let Some(follow_up) = queue.pop_front() {
            drained += 1;
            if drained > self.config.max_feedback_actions {
                metrics::counter!("store.feedback.overflow").increment(1);
                tracing::error!(
                    limit = self.config.max_feedback_actions,
                    "feedback action limit exceeded, aborting drain"
                );
                return Err(StoreError::FeedbackOverflow {
                    limit: self.config.max_feedback_actions,
                });
            }

            tracing::trace!(position = drained, "applying feedback action");
            metrics::counter!("store.actions.feedback").increment(1);
            self.apply(follow_up, &mut queue);
        }

        Ok(())
    }

    /// Read state through a projection function
    ///
    /// # Example
    ///
    /// ```ignore
    /// let subtotal = store.state(|s| s.cart.subtotal());
    /// ```
    pub fn state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state)
    }

    fn apply(&mut self, action: R::Action, queue: &mut VecDeque<R::Action>) {
        let effects = self
            .reducer
            .reduce(&mut self.state, action, &self.environment);
        for effect in effects {
            match effect {
                Effect::None => {}
                Effect::Dispatch(follow_up) => queue.push_back(*follow_up),
            }
        }
    }
}
