//! Points of interest for the spot-selection step.

use crate::same_destination;

/// A spot a traveller can add to their watch cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    pub id: &'static str,
    pub destination: &'static str,
    pub name: &'static str,
    /// Entry or activity cost in rupees. Fixed; there is no dynamic pricing.
    pub cost: u64,
}

const SPOTS: &[Spot] = &[
    Spot { id: "goa-baga-watersports", destination: "Goa, India", name: "Baga Beach water sports", cost: 2_500 },
    Spot { id: "goa-fort-aguada", destination: "Goa, India", name: "Fort Aguada", cost: 50 },
    Spot { id: "goa-dudhsagar", destination: "Goa, India", name: "Dudhsagar Falls jeep safari", cost: 1_800 },
    Spot { id: "goa-spice-farm", destination: "Goa, India", name: "Sahakari Spice Farm", cost: 600 },
    Spot { id: "kerala-backwater-cruise", destination: "Kerala, India", name: "Alleppey backwater cruise", cost: 3_000 },
    Spot { id: "kerala-periyar", destination: "Kerala, India", name: "Periyar wildlife safari", cost: 1_500 },
    Spot { id: "kerala-kathakali", destination: "Kerala, India", name: "Kathakali performance", cost: 400 },
    Spot { id: "rajasthan-amber-fort", destination: "Rajasthan, India", name: "Amber Fort", cost: 500 },
    Spot { id: "rajasthan-camel-safari", destination: "Rajasthan, India", name: "Jaisalmer camel safari", cost: 2_200 },
    Spot { id: "himachal-paragliding", destination: "Himachal Pradesh, India", name: "Bir Billing paragliding", cost: 3_500 },
    Spot { id: "himachal-solang", destination: "Himachal Pradesh, India", name: "Solang Valley ropeway", cost: 700 },
    Spot { id: "mumbai-elephanta", destination: "Mumbai, India", name: "Elephanta Caves ferry", cost: 650 },
    Spot { id: "mumbai-street-food", destination: "Mumbai, India", name: "Street food walk", cost: 900 },
];

/// Spots at a destination.
pub fn for_destination(destination: &str) -> Vec<&'static Spot> {
    SPOTS
        .iter()
        .filter(|s| same_destination(s.destination, destination))
        .collect()
}

/// Look up a spot by id.
pub fn find(id: &str) -> Option<&'static Spot> {
    SPOTS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_are_unique_by_id() {
        let mut ids: Vec<_> = SPOTS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SPOTS.len());
    }

    #[test]
    fn test_spots_for_destination() {
        assert_eq!(for_destination("Kerala, India").len(), 3);
        assert_eq!(find("mumbai-elephanta").map(|s| s.cost), Some(650));
    }
}
