//! Demo binary walking through a browsing session
//!
//! Drives the session reducer through the same journey a visitor takes on
//! the site: picking dishes from the dining menu, adjusting the order in
//! the drawer, then booking the Maharaja Suite.

use std::sync::Arc;

use anyhow::Context;
use grand_stay_catalog::{Catalog, MenuCategory, MenuItemId, RoomId};
use grand_stay_core::environment::SystemClock;
use grand_stay_runtime::Store;
use grand_stay_session::booking::GuestField;
use grand_stay_session::mediator::{
    SessionAction, SessionEnvironment, SessionReducer, SessionState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grand_stay_session=debug,grand_stay_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== The Grand Stay: one browsing session ===\n");

    let catalog = Catalog::seeded();

    println!("Dining menu:");
    for category in [MenuCategory::Appetizer, MenuCategory::Entree] {
        for item in catalog.menu_by_category(category) {
            println!("  {} - {}", item.name, item.price);
        }
    }
    if let Some(word) = catalog.testimonials().first() {
        println!("\n\"{}\"\n  - {}, {}", word.quote, word.name, word.location);
    }
    println!();

    let dal_makhani = catalog
        .menu_item(&MenuItemId::new("2"))
        .cloned()
        .context("seeded catalog is missing Dal Makhani")?;
    let paneer_tikka = catalog
        .menu_item(&MenuItemId::new("1"))
        .cloned()
        .context("seeded catalog is missing Paneer Tikka")?;
    let suite = catalog
        .room(&RoomId::new("suite"))
        .cloned()
        .context("seeded catalog is missing the Maharaja Suite")?;

    let mut store = Store::new(
        SessionState::default(),
        SessionReducer::new(),
        SessionEnvironment::new(Arc::new(SystemClock)),
    );

    println!(">>> Adding {} to the order, twice", dal_makhani.name);
    store.send(SessionAction::AddToOrder {
        item: dal_makhani.clone(),
    })?;
    store.send(SessionAction::AddToOrder {
        item: dal_makhani.clone(),
    })?;
    println!("Cart subtotal: {}", store.state(|s| s.cart.subtotal()));

    println!("\n>>> Opening the drawer and taking the quantity to 3");
    store.send(SessionAction::OpenCart)?;
    store.send(SessionAction::SetQuantity {
        item_id: dal_makhani.id.clone(),
        quantity: 3,
    })?;
    let view = store.state(SessionState::view);
    println!("Overlay: {:?}", view.overlay);
    for line in &view.cart.lines {
        println!("  {} x{} = {}", line.name, line.quantity, line.line_total);
    }
    println!("Subtotal: {}", view.cart.subtotal);

    println!("\n>>> Pressing the minus button three times");
    for _ in 0..3 {
        store.send(SessionAction::DecrementItem {
            item_id: dal_makhani.id.clone(),
        })?;
    }
    println!("Cart is empty again: {}", store.state(|s| s.cart.is_empty()));

    println!("\n>>> Settling on {} and closing the drawer", paneer_tikka.name);
    store.send(SessionAction::AddToOrder { item: paneer_tikka })?;
    store.send(SessionAction::CloseCart)?;

    println!("\n>>> Booking the {}", suite.name);
    store.send(SessionAction::SelectRoom { room: suite })?;
    println!("Booking phase: {}", store.state(|s| s.booking.flow.phase()));

    println!("\n>>> Submitting the form before filling it in");
    store.send(SessionAction::Advance)?;
    if let Some(notice) = store.state(|s| s.view().booking.notice) {
        println!("Notice: {notice}");
    }

    println!("\n>>> Filling in guest details and advancing");
    for (field, value) in [
        (GuestField::Name, "Priya Sharma"),
        (GuestField::Email, "priya@example.com"),
        (GuestField::Phone, "+91 98200 12345"),
    ] {
        store.send(SessionAction::UpdateField {
            field,
            value: value.into(),
        })?;
    }
    store.send(SessionAction::Advance)?;
    println!("Booking phase: {}", store.state(|s| s.booking.flow.phase()));

    println!("\n>>> Confirming the reservation");
    store.send(SessionAction::Complete)?;
    let view = store.state(SessionState::view);
    println!("Booking phase: {}", view.booking.phase);
    if let Some(confirmed_at) = view.booking.confirmed_at {
        println!("Confirmed at: {confirmed_at}");
    }

    println!("\n>>> Dismissing the confirmation screen");
    store.send(SessionAction::CloseBooking)?;

    let view = store.state(SessionState::view);
    println!("\nFinal session view:\n{}", serde_json::to_string_pretty(&view)?);

    println!("\n=== Session complete ===");
    println!("\nEverything above ran synchronously through one reducer:");
    println!("  • Cart, booking flow and overlay policy are plain state");
    println!("  • Each intent was drained to completion before the next");
    println!("  • The confirmation was simulated; nothing left the process");

    Ok(())
}
