//! Transport modes.

use serde::{Deserialize, Serialize};

/// How the traveller gets to and around the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Bike,
    Car,
    Cab,
    Bus,
    Plane,
    Train,
}

impl Transport {
    /// Every mode, in the order the transport step lists them.
    pub const ALL: [Transport; 6] = [
        Transport::Bike,
        Transport::Car,
        Transport::Cab,
        Transport::Bus,
        Transport::Plane,
        Transport::Train,
    ];

    /// Stable identifier used in persisted data.
    pub fn id(&self) -> &'static str {
        match self {
            Transport::Bike => "bike",
            Transport::Car => "car",
            Transport::Cab => "cab",
            Transport::Bus => "bus",
            Transport::Plane => "plane",
            Transport::Train => "train",
        }
    }

    /// Parse a transport id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Transport::Bike => "Bike",
            Transport::Car => "Car",
            Transport::Cab => "Cab",
            Transport::Bus => "Bus",
            Transport::Plane => "Flight",
            Transport::Train => "Train",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Transport::Bike => "🏍️",
            Transport::Car => "🚗",
            Transport::Cab => "🚕",
            Transport::Bus => "🚌",
            Transport::Plane => "✈️",
            Transport::Train => "🚆",
        }
    }

    /// Self-driven or hailed modes, which get a route to pick.
    pub fn is_self_driven(&self) -> bool {
        matches!(self, Transport::Bike | Transport::Car | Transport::Cab)
    }
}
