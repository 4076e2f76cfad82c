//! # Grand Stay Catalog
//!
//! Immutable display data for The Grand Stay, a heritage hotel in Jaipur:
//! rooms, restaurant menu, gallery images, and guest testimonials.
//!
//! The catalog is an external collaborator of the transactional core. It is
//! supplied once at startup as plain value types and never mutated. The
//! cart and booking flow hold snapshots of the items and rooms they work
//! with, keyed by the identifiers defined here.

use serde::{Deserialize, Serialize};

mod data;

/// Money amount in whole Indian rupees (avoids floating point issues)
///
/// Menu and room prices on the site are whole-rupee amounts, so the unit is
/// the rupee itself rather than a subunit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero rupees
    pub const ZERO: Self = Self(0);

    /// Creates a new `Money` amount from whole rupees
    #[must_use]
    pub const fn from_rupees(rupees: u64) -> Self {
        Self(rupees)
    }

    /// Returns the amount in whole rupees
    #[must_use]
    pub const fn rupees(&self) -> u64 {
        self.0
    }

    /// Checks if this amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the amount by a line quantity
    #[must_use]
    #[allow(clippy::cast_lossless)] // u64::from is not const
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as u64)
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl std::fmt::Display for Money {
    /// Renders with the rupee sign and en-IN digit grouping: the last group
    /// of three digits, then groups of two (`₹1,00,000`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rest = self.0;
        if rest < 1000 {
            return write!(f, "₹{rest}");
        }
        let mut groups = vec![format!("{:03}", rest % 1000)];
        rest /= 1000;
        while rest >= 100 {
            groups.push(format!("{:02}", rest % 100));
            rest /= 100;
        }
        groups.push(rest.to_string());
        groups.reverse();
        write!(f, "₹{}", groups.join(","))
    }
}

/// Identifier of a menu item, assigned by the catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(String);

impl MenuItemId {
    /// Creates a `MenuItemId` from a catalog key
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a room, assigned by the catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a `RoomId` from a catalog key
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Menu section a dish belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    /// Starters
    Appetizer,
    /// Main courses
    Entree,
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Appetizer => write!(f, "appetizer"),
            Self::Entree => write!(f, "entree"),
        }
    }
}

/// A dish on the restaurant menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identifier
    pub id: MenuItemId,
    /// Dish name
    pub name: String,
    /// Short description shown on the menu card
    pub description: String,
    /// Unit price
    pub price: Money,
    /// Menu section
    pub category: MenuCategory,
    /// Image reference
    pub image: String,
}

/// A bookable room
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Catalog identifier
    pub id: RoomId,
    /// Room name
    pub name: String,
    /// Short description shown on the room card
    pub description: String,
    /// Nightly price
    pub price_per_night: Money,
    /// Image reference
    pub image: String,
    /// Featured amenities
    pub amenities: Vec<String>,
    /// Size descriptor (e.g. `"35 sqm"`)
    pub size: String,
}

/// Gallery section an image belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryCategory {
    /// Lobby and common interiors
    Interior,
    /// Facade and grounds
    Exterior,
    /// Guest rooms
    Rooms,
    /// Restaurant and food
    Dining,
    /// Spa, pool, and services
    Amenities,
}

/// One image in the photo gallery
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image reference
    pub image: String,
    /// Alternative text
    pub alt: String,
    /// Gallery section
    pub category: GalleryCategory,
}

/// A guest testimonial
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Ordinal identifier
    pub id: u32,
    /// Guest name
    pub name: String,
    /// Guest home city
    pub location: String,
    /// Quoted review text
    pub quote: String,
    /// Star rating out of five
    pub rating: u8,
    /// Month label (e.g. `"October 2024"`)
    pub date: String,
}

/// The full display catalog, supplied to the core once at startup
///
/// Collections keep the order the site presents them in; the core relies on
/// that order only for display, never for lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    menu: Vec<MenuItem>,
    rooms: Vec<Room>,
    gallery: Vec<GalleryImage>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Assembles a catalog from externally supplied collections
    #[must_use]
    pub const fn new(
        menu: Vec<MenuItem>,
        rooms: Vec<Room>,
        gallery: Vec<GalleryImage>,
        testimonials: Vec<Testimonial>,
    ) -> Self {
        Self {
            menu,
            rooms,
            gallery,
            testimonials,
        }
    }

    /// The Grand Stay's own data: six dishes, three rooms, eight gallery
    /// images, four testimonials
    #[must_use]
    pub fn seeded() -> Self {
        data::seeded()
    }

    /// Menu items in presentation order
    #[must_use]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Rooms in presentation order
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Gallery images in presentation order
    #[must_use]
    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery
    }

    /// Testimonials in presentation order
    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Looks up a menu item by identifier
    #[must_use]
    pub fn menu_item(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.menu.iter().find(|item| &item.id == id)
    }

    /// Looks up a room by identifier
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Menu items in one section, in presentation order
    pub fn menu_by_category(&self, category: MenuCategory) -> impl Iterator<Item = &MenuItem> {
        self.menu.iter().filter(move |item| item.category == category)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn money_display_uses_indian_grouping() {
        assert_eq!(Money::from_rupees(425).to_string(), "₹425");
        assert_eq!(Money::from_rupees(1275).to_string(), "₹1,275");
        assert_eq!(Money::from_rupees(8999).to_string(), "₹8,999");
        assert_eq!(Money::from_rupees(24999).to_string(), "₹24,999");
        assert_eq!(Money::from_rupees(100_000).to_string(), "₹1,00,000");
        assert_eq!(Money::from_rupees(1_234_567).to_string(), "₹12,34,567");
        assert_eq!(Money::ZERO.to_string(), "₹0");
    }

    #[test]
    fn money_arithmetic() {
        let price = Money::from_rupees(425);
        assert_eq!(price.times(3), Money::from_rupees(1275));
        assert_eq!(price + Money::from_rupees(75), Money::from_rupees(500));

        let total: Money = [425, 495, 295]
            .into_iter()
            .map(Money::from_rupees)
            .sum();
        assert_eq!(total, Money::from_rupees(1215));
        assert!(Money::ZERO.is_zero());
        assert!(!price.is_zero());
    }

    #[test]
    fn seeded_catalog_shape() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.menu().len(), 6);
        assert_eq!(catalog.rooms().len(), 3);
        assert_eq!(catalog.gallery().len(), 8);
        assert_eq!(catalog.testimonials().len(), 4);

        let menu_ids: Vec<&str> = catalog.menu().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(menu_ids, vec!["1", "2", "3", "4", "5", "6"]);

        assert_eq!(catalog.menu_by_category(MenuCategory::Appetizer).count(), 3);
        assert_eq!(catalog.menu_by_category(MenuCategory::Entree).count(), 3);
    }

    #[test]
    fn seeded_catalog_lookups() {
        let catalog = Catalog::seeded();

        let dal = catalog
            .menu_item(&MenuItemId::from("2"))
            .expect("dal makhani is on the menu");
        assert_eq!(dal.name, "Dal Makhani");
        assert_eq!(dal.price, Money::from_rupees(425));
        assert_eq!(dal.category, MenuCategory::Appetizer);

        let suite = catalog
            .room(&RoomId::from("suite"))
            .expect("the maharaja suite exists");
        assert_eq!(suite.name, "Maharaja Suite");
        assert_eq!(suite.price_per_night, Money::from_rupees(24999));
        assert_eq!(suite.amenities.len(), 4);
        assert_eq!(suite.size, "85 sqm");

        assert!(catalog.menu_item(&MenuItemId::from("99")).is_none());
        assert!(catalog.room(&RoomId::from("penthouse")).is_none());
    }

    #[test]
    fn seeded_testimonials_are_five_star() {
        let catalog = Catalog::seeded();
        assert!(catalog.testimonials().iter().all(|t| t.rating == 5));
    }
}
