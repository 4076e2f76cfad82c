//! Render-ready projections of session state
//!
//! Views are plain serializable data: no catalog lookups, no methods to
//! call, everything a template needs already computed. They are rebuilt
//! from state on demand and never stored.

use chrono::{DateTime, Utc};
use grand_stay_catalog::{MenuItemId, Money, Room, RoomId};
use serde::{Deserialize, Serialize};

use crate::booking::{BookingError, BookingFlow, BookingPhase, GuestDetails};
use crate::cart::CartLine;
use crate::mediator::SessionState;

/// Which top-level overlay the session presents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    /// Neither overlay is up
    #[default]
    None,
    /// The booking modal, always topmost
    BookingModal,
    /// The cart drawer
    CartDrawer,
}

/// One cart line prepared for the drawer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    /// Id of the line's dish
    pub item_id: MenuItemId,
    /// Dish name
    pub name: String,
    /// Price of one unit
    pub unit_price: Money,
    /// Units ordered
    pub quantity: u32,
    /// Unit price times quantity
    pub line_total: Money,
}

impl From<&CartLine> for LineView {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item.id.clone(),
            name: line.item.name.clone(),
            unit_price: line.item.price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Cart drawer data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    /// Lines in insertion order
    pub lines: Vec<LineView>,
    /// Sum of every line total
    pub subtotal: Money,
    /// Badge count on the cart button
    pub total_quantity: u32,
    /// Whether the cart has no lines
    pub is_empty: bool,
    /// Whether the drawer flag is set, independent of overlay precedence
    pub is_open: bool,
}

/// Room summary shown in the booking modal header
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// Room id
    pub id: RoomId,
    /// Room name
    pub name: String,
    /// Nightly rate
    pub price_per_night: Money,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            name: room.name.clone(),
            price_per_night: room.price_per_night,
        }
    }
}

/// Booking modal data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    /// Which step the modal shows
    pub phase: BookingPhase,
    /// The room under reservation, absent when closed
    pub room: Option<RoomSummary>,
    /// Guest details as typed so far, absent when closed
    pub details: Option<GuestDetails>,
    /// When the reservation was confirmed, present only once completed
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Guest-facing validation notice; phase misuse is logged, not shown
    pub notice: Option<String>,
}

/// Everything the presentation layer renders
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Topmost overlay, if any
    pub overlay: Overlay,
    /// Cart drawer data
    pub cart: CartView,
    /// Booking modal data
    pub booking: BookingView,
}

impl SessionState {
    /// Project the session into render-ready data
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            overlay: self.overlay(),
            cart: CartView {
                lines: self.cart.lines().iter().map(LineView::from).collect(),
                subtotal: self.cart.subtotal(),
                total_quantity: self.cart.total_quantity(),
                is_empty: self.cart.is_empty(),
                is_open: self.cart_open,
            },
            booking: BookingView {
                phase: self.booking.flow.phase(),
                room: self.booking.flow.room().map(RoomSummary::from),
                details: self.booking.flow.details().cloned(),
                confirmed_at: match &self.booking.flow {
                    BookingFlow::Completed { confirmed_at, .. } => Some(*confirmed_at),
                    _ => None,
                },
                notice: match &self.booking.last_error {
                    Some(error @ BookingError::ValidationFailed { .. }) => Some(error.to_string()),
                    _ => None,
                },
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::booking::{BookingFlow, GuestField};
    use grand_stay_catalog::{MenuCategory, MenuItem};

    fn dish(id: &str, name: &str, rupees: u64) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.into(),
            description: String::new(),
            price: Money::from_rupees(rupees),
            category: MenuCategory::Appetizer,
            image: String::new(),
        }
    }

    fn deluxe() -> Room {
        Room {
            id: RoomId::new("deluxe"),
            name: "Deluxe Room".into(),
            description: String::new(),
            price_per_night: Money::from_rupees(8_999),
            image: String::new(),
            amenities: vec![],
            size: "35 sqm".into(),
        }
    }

    #[test]
    fn test_view_of_the_default_session() {
        let view = SessionState::default().view();

        assert_eq!(view.overlay, Overlay::None);
        assert!(view.cart.is_empty);
        assert!(view.cart.lines.is_empty());
        assert_eq!(view.cart.subtotal, Money::ZERO);
        assert_eq!(view.booking.phase, BookingPhase::Closed);
        assert_eq!(view.booking.room, None);
        assert_eq!(view.booking.details, None);
        assert_eq!(view.booking.confirmed_at, None);
        assert_eq!(view.booking.notice, None);
    }

    #[test]
    fn test_cart_view_computes_line_totals() {
        let mut state = SessionState::default();
        state.cart.add_item(dish("2", "Dal Makhani", 425));
        state.cart.add_item(dish("2", "Dal Makhani", 425));

        let view = state.view();
        assert_eq!(view.cart.lines.len(), 1);
        assert_eq!(view.cart.lines[0].quantity, 2);
        assert_eq!(view.cart.lines[0].line_total, Money::from_rupees(850));
        assert_eq!(view.cart.subtotal, Money::from_rupees(850));
        assert_eq!(view.cart.total_quantity, 2);
    }

    #[test]
    fn test_completed_booking_still_owns_the_overlay() {
        let confirmed_at = Utc::now();
        let mut state = SessionState::default();
        state.cart_open = true;
        state.booking.flow = BookingFlow::Completed {
            room: deluxe(),
            details: GuestDetails::default(),
            confirmed_at,
        };

        let view = state.view();
        assert_eq!(view.overlay, Overlay::BookingModal);
        assert!(view.cart.is_open);
        assert_eq!(view.booking.room.unwrap().name, "Deluxe Room");
        assert_eq!(view.booking.confirmed_at, Some(confirmed_at));
    }

    #[test]
    fn test_notice_shows_only_validation_failures() {
        let mut state = SessionState::default();
        state.booking.flow = BookingFlow::DetailsEntry {
            room: deluxe(),
            details: GuestDetails::default(),
        };

        state.booking.last_error = Some(BookingError::ValidationFailed {
            missing: vec![GuestField::Email],
        });
        assert_eq!(
            state.view().booking.notice.as_deref(),
            Some("guest details incomplete: missing email")
        );

        state.booking.last_error = Some(BookingError::InvalidTransition {
            phase: BookingPhase::DetailsEntry,
            operation: "back",
        });
        assert_eq!(state.view().booking.notice, None);
    }

    #[test]
    fn test_view_serializes_for_the_presentation_layer() {
        let mut state = SessionState::default();
        state.cart.add_item(dish("2", "Dal Makhani", 425));
        state.cart_open = true;

        let value = serde_json::to_value(state.view()).unwrap();
        assert_eq!(value["overlay"], "cart_drawer");
        assert_eq!(value["cart"]["subtotal"], 425);
        assert_eq!(value["cart"]["lines"][0]["name"], "Dal Makhani");
        assert_eq!(value["cart"]["lines"][0]["item_id"], "2");
        assert_eq!(value["booking"]["phase"], "closed");
        assert_eq!(value["booking"]["room"], serde_json::Value::Null);
    }
}
