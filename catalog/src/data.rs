//! The Grand Stay's own catalog entries.

use crate::{
    Catalog, GalleryCategory, GalleryImage, MenuCategory, MenuItem, MenuItemId, Money, Room,
    RoomId, Testimonial,
};

fn dish(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: MenuCategory,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Money::from_rupees(price),
        category,
        image: image.to_owned(),
    }
}

fn room(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    image: &str,
    amenities: [&str; 4],
    size: &str,
) -> Room {
    Room {
        id: RoomId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price_per_night: Money::from_rupees(price),
        image: image.to_owned(),
        amenities: amenities.iter().map(|&a| a.to_owned()).collect(),
        size: size.to_owned(),
    }
}

fn photo(image: &str, alt: &str, category: GalleryCategory) -> GalleryImage {
    GalleryImage {
        image: image.to_owned(),
        alt: alt.to_owned(),
        category,
    }
}

fn review(id: u32, name: &str, location: &str, quote: &str, date: &str) -> Testimonial {
    Testimonial {
        id,
        name: name.to_owned(),
        location: location.to_owned(),
        quote: quote.to_owned(),
        rating: 5,
        date: date.to_owned(),
    }
}

pub(crate) fn seeded() -> Catalog {
    let menu = vec![
        dish(
            "1",
            "Paneer Tikka",
            "Marinated cottage cheese grilled in tandoor with mint chutney and onion rings",
            495,
            MenuCategory::Appetizer,
            "https://images.pexels.com/photos/2474661/pexels-photo-2474661.jpeg?auto=compress&cs=tinysrgb&w=800",
        ),
        dish(
            "2",
            "Dal Makhani",
            "Slow-cooked black lentils with tomato, butter, and aromatic spices",
            425,
            MenuCategory::Appetizer,
            "assets/dal-makhani.jpg",
        ),
        dish(
            "3",
            "Laal Maas",
            "Traditional Rajasthani mutton curry with fiery red chillies and garlic",
            895,
            MenuCategory::Entree,
            "assets/laal-maas.jpg",
        ),
        dish(
            "4",
            "Murgh Makhani",
            "Butter chicken in rich tomato-cream gravy with kasuri methi",
            695,
            MenuCategory::Entree,
            "assets/murgh-makhani.jpg",
        ),
        dish(
            "5",
            "Gatta Curry",
            "Gram flour dumplings in tangy yogurt gravy - authentic Rajasthani specialty",
            445,
            MenuCategory::Entree,
            "assets/gatta-curry.jpg",
        ),
        dish(
            "6",
            "Pyaaz Kachori",
            "Crispy pastry stuffed with spiced onions, served with tamarind chutney",
            295,
            MenuCategory::Appetizer,
            "assets/pyaaz-kachori.jpg",
        ),
    ];

    let rooms = vec![
        room(
            "deluxe",
            "Deluxe Room",
            "Elegant comfort with heritage courtyard views. Perfect for couples seeking a refined Rajasthani retreat.",
            8999,
            "assets/room-deluxe.jpg",
            ["King Bed", "Courtyard View", "Rain Shower", "Mini Bar"],
            "35 sqm",
        ),
        room(
            "super-deluxe",
            "Super Deluxe",
            "Spacious luxury with traditional Jaipur décor. Ideal for extended stays and business travelers.",
            13999,
            "assets/room-super-deluxe.jpg",
            ["King Bed", "Lounge Area", "Bathtub", "Workspace"],
            "50 sqm",
        ),
        room(
            "suite",
            "Maharaja Suite",
            "Ultimate royal indulgence with Aravalli views. The pinnacle of heritage luxury accommodation.",
            24999,
            "assets/room-suite.jpg",
            ["Master Suite", "Living Room", "Butler Service", "Private Terrace"],
            "85 sqm",
        ),
    ];

    let gallery = vec![
        photo("assets/hero-hotel.jpg", "Grand Lobby", GalleryCategory::Interior),
        photo(
            "assets/hotel-exterior.jpg",
            "Hotel Exterior",
            GalleryCategory::Exterior,
        ),
        photo("assets/room-suite.jpg", "Maharaja Suite", GalleryCategory::Rooms),
        photo(
            "assets/restaurant.jpg",
            "Heritage Restaurant",
            GalleryCategory::Dining,
        ),
        photo("assets/spa.jpg", "Ayurveda Spa", GalleryCategory::Amenities),
        photo("assets/pool.jpg", "Infinity Pool", GalleryCategory::Amenities),
        photo("assets/room-deluxe.jpg", "Deluxe Room", GalleryCategory::Rooms),
        photo(
            "assets/room-super-deluxe.jpg",
            "Super Deluxe Room",
            GalleryCategory::Rooms,
        ),
    ];

    let testimonials = vec![
        review(
            1,
            "Ananya & Vikram Mehta",
            "Mumbai, Maharashtra",
            "Our anniversary stay at The Grand Stay was absolutely magical. From the traditional \
             welcome to the impeccable room service, every moment was perfect. The Maharaja Suite \
             exceeded all our expectations. Truly royal treatment!",
            "October 2024",
        ),
        review(
            2,
            "Arun Krishnamurthy",
            "Bengaluru, Karnataka",
            "As a frequent business traveler, I've stayed at many luxury hotels. The Grand Stay \
             stands out for its genuine warmth and attention to detail. The Laal Maas alone is \
             worth the trip - best I've had!",
            "September 2024",
        ),
        review(
            3,
            "Meera Kapoor",
            "New Delhi",
            "Simply exquisite. The blend of Rajasthani heritage and modern luxury is masterfully \
             done. The Ayurveda spa treatments were heavenly, and the staff made us feel like \
             royalty. Bahut sundar!",
            "November 2024",
        ),
        review(
            4,
            "Suresh & Lakshmi Iyer",
            "Chennai, Tamil Nadu",
            "We've found our new favorite retreat. The culinary experience was outstanding, and \
             waking up to those Aravalli views from the Super Deluxe room was breathtaking. \
             We're already planning our return. Dhanyavaad!",
            "August 2024",
        ),
    ];

    Catalog::new(menu, rooms, gallery, testimonials)
}
