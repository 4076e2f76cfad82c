//! Session mediator
//!
//! One reducer owns the whole session: the cart, the booking flow and the
//! cart drawer flag. It routes every visitor intent to the component that
//! handles it and lifts whatever effects come back into the session's own
//! action space. The mediator adds no rules of its own; components enforce
//! their invariants and the mediator reports outcomes through state.
//!
//! Overlay policy lives here too: the booking modal is always topmost, and
//! the cart drawer shows only while no booking attempt is in progress.

use std::sync::Arc;

use grand_stay_catalog::{MenuItem, MenuItemId, Room};
use grand_stay_core::environment::Clock;
use grand_stay_core::{SmallVec, effect::Effect, reducer::Reducer};

use crate::booking::{BookingAction, BookingEnvironment, BookingReducer, BookingState, GuestField};
use crate::cart::{Cart, CartAction, CartReducer};
use crate::view::Overlay;

/// Everything a browsing session tracks
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The order cart
    pub cart: Cart,
    /// The booking component
    pub booking: BookingState,
    /// Whether the visitor has the cart drawer open
    pub cart_open: bool,
}

impl SessionState {
    /// Which overlay the presentation should show
    ///
    /// The booking modal is topmost: a drawer left open behind it comes
    /// back once the booking flow is dismissed.
    #[must_use]
    pub const fn overlay(&self) -> Overlay {
        if !self.booking.flow.is_closed() {
            Overlay::BookingModal
        } else if self.cart_open {
            Overlay::CartDrawer
        } else {
            Overlay::None
        }
    }
}

/// The full intent feed a browsing session produces
///
/// Every interactive element on the site maps to one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// A room card's "Book Now": start a reservation attempt
    SelectRoom {
        /// The room to book
        room: Room,
    },
    /// A dish card's "Add to Order": add one unit to the cart
    AddToOrder {
        /// The dish to add
        item: MenuItem,
    },
    /// Drawer quantity input: set a line to an exact quantity
    SetQuantity {
        /// Id of the line's dish
        item_id: MenuItemId,
        /// The new quantity; zero removes the line
        quantity: u32,
    },
    /// Drawer remove affordance: drop a line outright
    RemoveItem {
        /// Id of the line's dish
        item_id: MenuItemId,
    },
    /// Drawer minus affordance: step a line down by one
    DecrementItem {
        /// Id of the line's dish
        item_id: MenuItemId,
    },
    /// Booking form input: overwrite one guest detail field
    UpdateField {
        /// Which field to overwrite
        field: GuestField,
        /// The new value
        value: String,
    },
    /// Booking form submit: move from details entry to confirmation
    Advance,
    /// Booking review "Back": return to details entry
    Back,
    /// Booking review "Confirm": complete the reservation
    Complete,
    /// Booking modal close: dismiss the attempt from any phase
    CloseBooking,
    /// Cart button: present the drawer
    OpenCart,
    /// Drawer close affordance: hide the drawer
    CloseCart,
}

impl From<CartAction> for SessionAction {
    fn from(action: CartAction) -> Self {
        match action {
            CartAction::AddItem { item } => Self::AddToOrder { item },
            CartAction::SetQuantity { item_id, quantity } => {
                Self::SetQuantity { item_id, quantity }
            }
            CartAction::RemoveItem { item_id } => Self::RemoveItem { item_id },
            CartAction::Decrement { item_id } => Self::DecrementItem { item_id },
        }
    }
}

impl From<BookingAction> for SessionAction {
    fn from(action: BookingAction) -> Self {
        match action {
            BookingAction::Open { room } => Self::SelectRoom { room },
            BookingAction::UpdateField { field, value } => Self::UpdateField { field, value },
            BookingAction::Advance => Self::Advance,
            BookingAction::Back => Self::Back,
            BookingAction::Complete => Self::Complete,
            BookingAction::Dismiss => Self::CloseBooking,
        }
    }
}

/// Injected dependencies for the session
#[derive(Clone)]
pub struct SessionEnvironment {
    /// Time source shared with the booking flow
    pub clock: Arc<dyn Clock>,
}

impl SessionEnvironment {
    /// Create a new environment
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The environment slice handed to the booking reducer
    fn booking(&self) -> BookingEnvironment {
        BookingEnvironment::new(Arc::clone(&self.clock))
    }
}

/// Reducer for the whole session
///
/// Owns the component reducers and routes each intent to exactly one of
/// them, or handles it directly when it is drawer chrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionReducer {
    cart: CartReducer,
    booking: BookingReducer,
}

impl SessionReducer {
    /// Create the reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cart: CartReducer::new(),
            booking: BookingReducer::new(),
        }
    }

    fn to_cart(
        &self,
        state: &mut SessionState,
        action: CartAction,
    ) -> SmallVec<[Effect<SessionAction>; 4]> {
        self.cart
            .reduce(&mut state.cart, action, &())
            .into_iter()
            .map(|effect| effect.map(SessionAction::from))
            .collect()
    }

    fn to_booking(
        &self,
        state: &mut SessionState,
        action: BookingAction,
        env: &SessionEnvironment,
    ) -> SmallVec<[Effect<SessionAction>; 4]> {
        self.booking
            .reduce(&mut state.booking, action, &env.booking())
            .into_iter()
            .map(|effect| effect.map(SessionAction::from))
            .collect()
    }
}

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = SessionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::SelectRoom { room } => {
                self.to_booking(state, BookingAction::Open { room }, env)
            }
            SessionAction::AddToOrder { item } => {
                self.to_cart(state, CartAction::AddItem { item })
            }
            SessionAction::SetQuantity { item_id, quantity } => {
                self.to_cart(state, CartAction::SetQuantity { item_id, quantity })
            }
            SessionAction::RemoveItem { item_id } => {
                self.to_cart(state, CartAction::RemoveItem { item_id })
            }
            SessionAction::DecrementItem { item_id } => {
                self.to_cart(state, CartAction::Decrement { item_id })
            }
            SessionAction::UpdateField { field, value } => {
                self.to_booking(state, BookingAction::UpdateField { field, value }, env)
            }
            SessionAction::Advance => self.to_booking(state, BookingAction::Advance, env),
            SessionAction::Back => self.to_booking(state, BookingAction::Back, env),
            SessionAction::Complete => self.to_booking(state, BookingAction::Complete, env),
            SessionAction::CloseBooking => self.to_booking(state, BookingAction::Dismiss, env),
            SessionAction::OpenCart => {
                state.cart_open = true;
                SmallVec::new()
            }
            SessionAction::CloseCart => {
                state.cart_open = false;
                SmallVec::new()
            }
        }
    }
}
