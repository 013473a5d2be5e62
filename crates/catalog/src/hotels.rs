//! Hotels offered on the hotel-booking step.

use crate::same_destination;

/// A bookable hotel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotel {
    pub id: &'static str,
    pub destination: &'static str,
    pub name: &'static str,
    /// Price per night in rupees.
    pub price_per_night: u64,
    pub rating: f32,
}

const HOTELS: &[Hotel] = &[
    Hotel { id: "goa-taj-fort", destination: "Goa, India", name: "Fort Aguada Beach Resort", price_per_night: 9_500, rating: 4.7 },
    Hotel { id: "goa-palm-stay", destination: "Goa, India", name: "Palm Grove Stay", price_per_night: 3_200, rating: 4.2 },
    Hotel { id: "kerala-lake-palace", destination: "Kerala, India", name: "Lake Palace Houseboat", price_per_night: 7_800, rating: 4.8 },
    Hotel { id: "kerala-spice-inn", destination: "Kerala, India", name: "Spice Valley Inn", price_per_night: 2_900, rating: 4.1 },
    Hotel { id: "rajasthan-haveli", destination: "Rajasthan, India", name: "Heritage Haveli", price_per_night: 6_400, rating: 4.6 },
    Hotel { id: "rajasthan-desert-camp", destination: "Rajasthan, India", name: "Thar Desert Camp", price_per_night: 4_100, rating: 4.4 },
    Hotel { id: "himachal-pine-lodge", destination: "Himachal Pradesh, India", name: "Pine Crest Lodge", price_per_night: 3_600, rating: 4.3 },
    Hotel { id: "mumbai-marine-view", destination: "Mumbai, India", name: "Marine Drive View", price_per_night: 8_200, rating: 4.5 },
];

/// Hotels at a destination.
pub fn for_destination(destination: &str) -> Vec<&'static Hotel> {
    HOTELS
        .iter()
        .filter(|h| same_destination(h.destination, destination))
        .collect()
}

/// Look up a hotel by id.
pub fn find(id: &str) -> Option<&'static Hotel> {
    HOTELS.iter().find(|h| h.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotels_for_destination() {
        let hotels = for_destination("GOA, INDIA");
        assert_eq!(hotels.len(), 2);
        assert!(for_destination("Atlantis").is_empty());
    }

    #[test]
    fn test_find_hotel() {
        assert_eq!(find("kerala-spice-inn").map(|h| h.price_per_night), Some(2_900));
        assert!(find("nope").is_none());
    }
}
