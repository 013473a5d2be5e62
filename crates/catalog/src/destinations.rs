//! Featured destinations.

use crate::same_destination;

/// A destination shown on the explore tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    pub name: &'static str,
    pub image: &'static str,
    pub rating: f32,
    /// Typical trip price in rupees.
    pub starting_price: u64,
}

const DESTINATIONS: &[Destination] = &[
    Destination { name: "Goa, India", image: "🏖️", rating: 4.8, starting_price: 45_000 },
    Destination { name: "Kerala, India", image: "🌴", rating: 4.9, starting_price: 38_000 },
    Destination { name: "Rajasthan, India", image: "🏰", rating: 4.7, starting_price: 42_000 },
    Destination { name: "Himachal Pradesh, India", image: "🏔️", rating: 4.6, starting_price: 35_000 },
    Destination { name: "Mumbai, India", image: "🏙️", rating: 4.5, starting_price: 28_000 },
];

/// All featured destinations.
pub fn all() -> &'static [Destination] {
    DESTINATIONS
}

/// Look up a destination by name.
pub fn find(name: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| same_destination(d.name, name))
}

/// Destinations whose name contains `query`, ignoring case.
pub fn search(query: &str) -> Vec<&'static Destination> {
    let query = query.trim().to_lowercase();
    DESTINATIONS
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&query))
        .collect()
}

/// Image for a destination, with a generic fallback for free-form names.
pub fn image_for(name: &str) -> &'static str {
    find(name).map(|d| d.image).unwrap_or("🧳")
}
