//! Room booking flow
//!
//! A reservation attempt is a small state machine scoped to one room. The
//! modal walks a visitor through two steps (guest details, then review) and
//! ends on a confirmation screen:
//!
//! ```text
//!                   open(room)
//!     Closed ─────────────────────► DetailsEntry
//!       ▲                             │      ▲
//!       │                     advance │      │ back
//!       │ dismiss                     ▼      │
//!       │ (any phase)              Confirmation
//!       │                             │
//!       │                    complete │
//!       │                             ▼
//!       └───────────────────────── Completed
//! ```
//!
//! `advance` validates the guest details; a rejection keeps the machine
//! where it is and names the missing fields. Operations fired outside their
//! valid phase are rejected with [`BookingError::InvalidTransition`] and
//! leave the state untouched. Completion is simulated: the machine stamps a
//! confirmation time from the injected clock, nothing leaves the session.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use grand_stay_catalog::Room;
use grand_stay_core::environment::Clock;
use grand_stay_core::{SmallVec, effect::Effect, reducer::Reducer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One guest detail collected in the details entry step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestField {
    /// Full name
    Name,
    /// Email address
    Email,
    /// Phone number
    Phone,
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        };
        f.write_str(name)
    }
}

/// Free-text guest details captured by the booking form
///
/// Values are stored exactly as typed. Validation happens on `advance`, not
/// on entry, and treats whitespace-only values as missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
}

impl GuestDetails {
    /// Overwrite one field with a new value
    pub fn set(&mut self, field: GuestField, value: impl Into<String>) {
        let value = value.into();
        match field {
            GuestField::Name => self.name = value,
            GuestField::Email => self.email = value,
            GuestField::Phone => self.phone = value,
        }
    }

    /// Read one field
    #[must_use]
    pub fn get(&self, field: GuestField) -> &str {
        match field {
            GuestField::Name => &self.name,
            GuestField::Email => &self.email,
            GuestField::Phone => &self.phone,
        }
    }

    /// Fields that are empty or whitespace-only, in form order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<GuestField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(GuestField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(GuestField::Email);
        }
        if self.phone.trim().is_empty() {
            missing.push(GuestField::Phone);
        }
        missing
    }

    /// Whether every field has a non-whitespace value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Phase marker for views and diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingPhase {
    /// No reservation attempt in progress
    Closed,
    /// Step 1 of 2: collecting guest details
    DetailsEntry,
    /// Step 2 of 2: reviewing before confirming
    Confirmation,
    /// Reservation confirmed, awaiting dismissal
    Completed,
}

impl fmt::Display for BookingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Closed => "closed",
            Self::DetailsEntry => "details entry",
            Self::Confirmation => "confirmation",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

fn field_list(fields: &[GuestField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a booking operation was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Guest details failed validation on `advance`
    #[error("guest details incomplete: missing {}", field_list(.missing))]
    ValidationFailed {
        /// The fields that were empty or whitespace-only, in form order
        missing: Vec<GuestField>,
    },
    /// The operation is not defined for the current phase
    #[error("{operation} is not valid in the {phase} phase")]
    InvalidTransition {
        /// The phase the machine was in when the operation arrived
        phase: BookingPhase,
        /// The rejected operation
        operation: &'static str,
    },
}

/// The booking machine
///
/// Each phase carries exactly the data that is meaningful in it, so an
/// open attempt always has a room and a completed one always has a
/// confirmation time. Rejected operations leave the machine untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BookingFlow {
    /// No reservation attempt in progress
    #[default]
    Closed,
    /// Step 1 of 2: collecting guest details for the selected room
    DetailsEntry {
        /// The room being booked
        room: Room,
        /// Details entered so far
        details: GuestDetails,
    },
    /// Step 2 of 2: reviewing validated details before confirming
    Confirmation {
        /// The room being booked
        room: Room,
        /// Validated guest details
        details: GuestDetails,
    },
    /// Terminal until dismissed: the simulated reservation went through
    Completed {
        /// The booked room
        room: Room,
        /// The guest the confirmation is addressed to
        details: GuestDetails,
        /// When the reservation was confirmed
        confirmed_at: DateTime<Utc>,
    },
}

impl BookingFlow {
    /// Start a reservation attempt for `room`
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidTransition`] if an attempt is already
    /// in progress.
    pub fn open(&mut self, room: Room) -> Result<(), BookingError> {
        match self {
            Self::Closed => {
                *self = Self::DetailsEntry {
                    room,
                    details: GuestDetails::default(),
                };
                Ok(())
            }
            other => Err(BookingError::InvalidTransition {
                phase: other.phase(),
                operation: "open",
            }),
        }
    }

    /// Overwrite one guest detail field
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidTransition`] outside the details
    /// entry phase.
    pub fn update_field(
        &mut self,
        field: GuestField,
        value: impl Into<String>,
    ) -> Result<(), BookingError> {
        match self {
            Self::DetailsEntry { details, .. } => {
                details.set(field, value);
                Ok(())
            }
            other => Err(BookingError::InvalidTransition {
                phase: other.phase(),
                operation: "update field",
            }),
        }
    }

    /// Submit the details step, moving to confirmation if they validate
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::ValidationFailed`] naming the missing fields
    /// if any detail is empty or whitespace-only; the machine stays in
    /// details entry with the typed values retained. Returns
    /// [`BookingError::InvalidTransition`] outside the details entry phase.
    pub fn advance(&mut self) -> Result<(), BookingError> {
        match std::mem::take(self) {
            Self::DetailsEntry { room, details } => {
                let missing = details.missing_fields();
                if missing.is_empty() {
                    *self = Self::Confirmation { room, details };
                    Ok(())
                } else {
                    *self = Self::DetailsEntry { room, details };
                    Err(BookingError::ValidationFailed { missing })
                }
            }
            other => {
                let phase = other.phase();
                *self = other;
                Err(BookingError::InvalidTransition {
                    phase,
                    operation: "advance",
                })
            }
        }
    }

    /// Return from confirmation to details entry, keeping the typed details
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidTransition`] outside the confirmation
    /// phase.
    pub fn back(&mut self) -> Result<(), BookingError> {
        match std::mem::take(self) {
            Self::Confirmation { room, details } => {
                *self = Self::DetailsEntry { room, details };
                Ok(())
            }
            other => {
                let phase = other.phase();
                *self = other;
                Err(BookingError::InvalidTransition {
                    phase,
                    operation: "back",
                })
            }
        }
    }

    /// Confirm the reservation, stamping `now` as the confirmation time
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidTransition`] outside the confirmation
    /// phase.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), BookingError> {
        match std::mem::take(self) {
            Self::Confirmation { room, details } => {
                *self = Self::Completed {
                    room,
                    details,
                    confirmed_at: now,
                };
                Ok(())
            }
            other => {
                let phase = other.phase();
                *self = other;
                Err(BookingError::InvalidTransition {
                    phase,
                    operation: "complete",
                })
            }
        }
    }

    /// Close the attempt from any phase, discarding its data
    ///
    /// Valid everywhere, including when already closed. Returns whether an
    /// attempt was actually discarded.
    pub fn dismiss(&mut self) -> bool {
        let had_attempt = !matches!(self, Self::Closed);
        *self = Self::Closed;
        had_attempt
    }

    /// Which phase the machine is in
    #[must_use]
    pub const fn phase(&self) -> BookingPhase {
        match self {
            Self::Closed => BookingPhase::Closed,
            Self::DetailsEntry { .. } => BookingPhase::DetailsEntry,
            Self::Confirmation { .. } => BookingPhase::Confirmation,
            Self::Completed { .. } => BookingPhase::Completed,
        }
    }

    /// The room of the current attempt, if one is open
    #[must_use]
    pub const fn room(&self) -> Option<&Room> {
        match self {
            Self::Closed => None,
            Self::DetailsEntry { room, .. }
            | Self::Confirmation { room, .. }
            | Self::Completed { room, .. } => Some(room),
        }
    }

    /// The guest details of the current attempt, if one is open
    #[must_use]
    pub const fn details(&self) -> Option<&GuestDetails> {
        match self {
            Self::Closed => None,
            Self::DetailsEntry { details, .. }
            | Self::Confirmation { details, .. }
            | Self::Completed { details, .. } => Some(details),
        }
    }

    /// Whether no attempt is in progress
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Booking component state: the machine plus the latest rejection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingState {
    /// The reservation machine
    pub flow: BookingFlow,
    /// The most recent rejected operation, cleared by the next accepted one
    pub last_error: Option<BookingError>,
}

/// Visitor intents the booking flow understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingAction {
    /// Start a reservation attempt for a room
    Open {
        /// The room to book
        room: Room,
    },
    /// Overwrite one guest detail field
    UpdateField {
        /// Which field to overwrite
        field: GuestField,
        /// The new value, stored as typed
        value: String,
    },
    /// Submit the details step
    Advance,
    /// Return from confirmation to details entry
    Back,
    /// Confirm the reservation
    Complete,
    /// Close the attempt from any phase
    Dismiss,
}

/// Injected dependencies for the booking reducer
#[derive(Clone)]
pub struct BookingEnvironment {
    /// Time source for confirmation timestamps
    pub clock: Arc<dyn Clock>,
}

impl BookingEnvironment {
    /// Create a new environment
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the booking flow
///
/// Every action maps to one machine operation. Rejections land in
/// `last_error`; accepted operations clear it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BookingReducer;

impl BookingReducer {
    /// Create the reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let outcome = match action {
            BookingAction::Open { room } => state.flow.open(room),
            BookingAction::UpdateField { field, value } => state.flow.update_field(field, value),
            BookingAction::Advance => state.flow.advance(),
            BookingAction::Back => state.flow.back(),
            BookingAction::Complete => state.flow.complete(env.clock.now()),
            BookingAction::Dismiss => {
                state.flow.dismiss();
                Ok(())
            }
        };

        match outcome {
            Ok(()) => state.last_error = None,
            Err(error) => {
                if matches!(error, BookingError::InvalidTransition { .. }) {
                    tracing::warn!(%error, "booking operation rejected outside its phase");
                }
                state.last_error = Some(error);
            }
        }

        SmallVec::new()
    }
}
