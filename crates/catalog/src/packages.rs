//! Pre-bundled trip packages.

use crate::same_destination;
use crate::Transport;

/// A package bundles hotel, itinerary, transport and a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelPackage {
    pub id: &'static str,
    pub destination: &'static str,
    pub name: &'static str,
    /// Total package price in rupees.
    pub price: u64,
    pub duration_days: u32,
    pub hotel: &'static str,
    pub activities: &'static [&'static str],
    pub transport: Transport,
}

impl TravelPackage {
    /// Whether the package is sold for `destination`.
    pub fn serves(&self, destination: &str) -> bool {
        same_destination(self.destination, destination)
    }
}

const PACKAGES: &[TravelPackage] = &[
    TravelPackage {
        id: "goa-beach-bliss",
        destination: "Goa, India",
        name: "Goa Beach Bliss",
        price: 32_000,
        duration_days: 5,
        hotel: "Fort Aguada Beach Resort",
        activities: &["Beach hopping", "Water sports", "Sunset cruise"],
        transport: Transport::Plane,
    },
    TravelPackage {
        id: "kerala-backwater-escape",
        destination: "Kerala, India",
        name: "Kerala Backwater Escape",
        price: 36_500,
        duration_days: 6,
        hotel: "Lake Palace Houseboat",
        activities: &["Houseboat cruise", "Spice plantation", "Ayurveda spa"],
        transport: Transport::Train,
    },
    TravelPackage {
        id: "rajasthan-royal-trail",
        destination: "Rajasthan, India",
        name: "Royal Rajasthan Trail",
        price: 41_000,
        duration_days: 7,
        hotel: "Heritage Haveli",
        activities: &["Amber Fort", "Camel safari", "Folk dance evening"],
        transport: Transport::Bus,
    },
    TravelPackage {
        id: "himachal-hills",
        destination: "Himachal Pradesh, India",
        name: "Himachal Hill Retreat",
        price: 27_500,
        duration_days: 4,
        hotel: "Pine Crest Lodge",
        activities: &["Paragliding", "Solang Valley", "Monastery visit"],
        transport: Transport::Bus,
    },
];

/// Packages available for a destination.
pub fn for_destination(destination: &str) -> Vec<&'static TravelPackage> {
    PACKAGES
        .iter()
        .filter(|p| p.serves(destination))
        .collect()
}

/// Look up a package by id.
pub fn find(id: &str) -> Option<&'static TravelPackage> {
    PACKAGES.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_serves_its_destination() {
        let goa = find("goa-beach-bliss").unwrap();
        assert!(goa.serves(" goa, INDIA "));
        assert!(!goa.serves("Kerala, India"));
    }

    #[test]
    fn test_package_lookup() {
        let package = find("kerala-backwater-escape").unwrap();
        assert_eq!(package.duration_days, 6);
        assert_eq!(package.transport, Transport::Train);
        assert_eq!(for_destination("kerala, india").len(), 1);
        assert!(for_destination("Mumbai, India").is_empty());
    }
}
