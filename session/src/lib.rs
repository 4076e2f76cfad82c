//! Client-side session logic for The Grand Stay
//!
//! This crate holds every piece of interactive state behind the hotel's
//! marketing site: the order cart, the room booking flow and the session
//! mediator that routes visitor intents between them. All of it runs
//! synchronously on a single thread; the catalog it reads from is injected
//! as immutable data from [`grand_stay_catalog`].
//!
//! # Components
//!
//! - [`cart`]: quantity-aggregating order lines with a running subtotal
//! - [`booking`]: a four-phase reservation state machine with validation
//! - [`mediator`]: session-wide state, intent routing and overlay policy
//! - [`view`]: plain serializable projections for a presentation layer
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use grand_stay_catalog::{Catalog, MenuItemId};
//! use grand_stay_core::environment::SystemClock;
//! use grand_stay_runtime::Store;
//! use grand_stay_session::mediator::{SessionAction, SessionEnvironment, SessionReducer, SessionState};
//!
//! let catalog = Catalog::seeded();
//! let mut store = Store::new(
//!     SessionState::default(),
//!     SessionReducer::default(),
//!     SessionEnvironment::new(Arc::new(SystemClock)),
//! );
//!
//! let dal_makhani = catalog.menu_item(&MenuItemId::new("2")).cloned().unwrap();
//! store.send(SessionAction::AddToOrder { item: dal_makhani }).unwrap();
//! store.send(SessionAction::OpenCart).unwrap();
//!
//! let view = store.state(SessionState::view);
//! assert_eq!(view.cart.subtotal.rupees(), 425);
//! ```

pub mod booking;
pub mod cart;
pub mod mediator;
pub mod view;

pub use booking::{
    BookingAction, BookingEnvironment, BookingError, BookingFlow, BookingPhase, BookingReducer,
    BookingState, GuestDetails, GuestField,
};
pub use cart::{Cart, CartAction, CartLine, CartReducer};
pub use mediator::{SessionAction, SessionEnvironment, SessionReducer, SessionState};
pub use view::{BookingView, CartView, LineView, Overlay, RoomSummary, SessionView};
