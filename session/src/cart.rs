//! Order cart for the dining menu
//!
//! The cart aggregates picks into quantity-bearing lines: adding a dish that
//! is already in the cart bumps its quantity instead of appending a duplicate
//! line. Lines keep the order in which their dish first entered the cart.
//! Operations that reference an identifier with no matching line are silent
//! no-ops.

use grand_stay_catalog::{MenuItem, MenuItemId, Money};
use grand_stay_core::{SmallVec, effect::Effect, reducer::Reducer};

/// One aggregated line in the cart: a dish and how many of it
///
/// The line carries a snapshot of the catalog item so the drawer can render
/// name and price without a catalog lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    /// The dish this line aggregates
    pub item: MenuItem,
    /// Units ordered, always at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity
    #[must_use]
    pub const fn line_total(&self) -> Money {
        self.item.price.times(self.quantity)
    }
}

/// The order cart: insertion-ordered aggregated lines
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a dish
    ///
    /// If a line for the same item id already exists its quantity goes up by
    /// one, saturating at `u32::MAX`; otherwise a new line with quantity 1 is
    /// appended at the end.
    pub fn add_item(&mut self, item: MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine { item, quantity: 1 });
        }
    }

    /// Set a line to an exact quantity
    ///
    /// A quantity of zero removes the line. Unknown ids are ignored.
    pub fn set_quantity(&mut self, item_id: &MenuItemId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item_id);
        } else if let Some(line) = self.lines.iter_mut().find(|line| &line.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line outright, whatever its quantity
    ///
    /// Unknown ids are ignored.
    pub fn remove_item(&mut self, item_id: &MenuItemId) {
        self.lines.retain(|line| &line.item.id != item_id);
    }

    /// Step a line's quantity down by one, removing it at zero
    ///
    /// Unknown ids are ignored.
    pub fn decrement(&mut self, item_id: &MenuItemId) {
        match self.quantity(item_id) {
            Some(quantity) if quantity > 1 => self.set_quantity(item_id, quantity - 1),
            Some(_) => self.remove_item(item_id),
            None => {}
        }
    }

    /// Sum of every line's total
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Whether the cart has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines, the badge count on the cart button
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Quantity of the line for `item_id`, if present
    #[must_use]
    pub fn quantity(&self, item_id: &MenuItemId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| &line.item.id == item_id)
            .map(|line| line.quantity)
    }

    /// The lines in insertion order
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

/// Visitor intents the cart understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a dish, aggregating with an existing line
    AddItem {
        /// The dish to add
        item: MenuItem,
    },
    /// Set a line to an exact quantity; zero removes the line
    SetQuantity {
        /// Id of the line's dish
        item_id: MenuItemId,
        /// The new quantity
        quantity: u32,
    },
    /// Remove a line outright
    RemoveItem {
        /// Id of the line's dish
        item_id: MenuItemId,
    },
    /// Step a line's quantity down by one, removing it at zero
    Decrement {
        /// Id of the line's dish
        item_id: MenuItemId,
    },
}

/// Reducer for the order cart
///
/// A leaf reducer: it needs no environment and produces no effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartReducer;

impl CartReducer {
    /// Create the reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CartReducer {
    type State = Cart;
    type Action = CartAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CartAction::AddItem { item } => state.add_item(item),
            CartAction::SetQuantity { item_id, quantity } => state.set_quantity(&item_id, quantity),
            CartAction::RemoveItem { item_id } => state.remove_item(&item_id),
            CartAction::Decrement { item_id } => state.decrement(&item_id),
        }
        SmallVec::new()
    }
}
