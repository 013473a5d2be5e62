//! Trip configuration accumulated by the wizard.
//!
//! The configuration is a tagged union over the trip type, so fields that
//! only make sense for one branch (an end date or hotel for own trips, a
//! package for package trips) do not exist on the other.

use catalog::{hotels, packages, routes, Hotel, SavedRoute, Spot, Transport, TravelPackage};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::WatchCart;

/// Package trip or self-configured trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Package,
    Own,
}

/// Configuration of a package trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageTripConfig {
    pub destination: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub package_id: Option<String>,
}

impl PackageTripConfig {
    /// The chosen package, if the id is known to the catalog.
    pub fn package(&self) -> Option<&'static TravelPackage> {
        self.package_id.as_deref().and_then(packages::find)
    }

    /// End date implied by the start date and the package duration.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let package = self.package()?;
        self.from_date?
            .checked_add_days(Days::new(u64::from(package.duration_days)))
    }
}

/// Configuration of a self-configured trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnTripConfig {
    pub destination: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub transport: Option<Transport>,
    pub route_id: Option<String>,
    pub selected_hotel: Option<String>,
    pub watch_cart: WatchCart,
}

impl OwnTripConfig {
    pub fn hotel(&self) -> Option<&'static Hotel> {
        self.selected_hotel.as_deref().and_then(hotels::find)
    }

    pub fn route(&self) -> Option<&'static SavedRoute> {
        self.route_id.as_deref().and_then(routes::find)
    }

    /// Whether the chosen transport gets the route-selection screen.
    pub fn needs_route_selection(&self) -> bool {
        self.transport.is_some_and(|t| t.is_self_driven())
    }

    /// Cart total plus one night at the selected hotel.
    ///
    /// The hotel is charged for a single night regardless of trip length.
    pub fn estimated_cost(&self) -> u64 {
        self.watch_cart.total() + self.hotel().map_or(0, |h| h.price_per_night)
    }
}

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TripConfiguration {
    /// No trip type chosen yet.
    #[default]
    Undecided,
    Package(PackageTripConfig),
    Own(OwnTripConfig),
}

/// Data submitted by a step's "Continue" action.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    TripType(TripType),
    Destination(String),
    /// Own trips: start and end date.
    Dates { from: NaiveDate, to: NaiveDate },
    /// Package trips: start date and the package that fixes the duration.
    PackageStart { from: NaiveDate, package_id: String },
    Transport(Transport),
    Route(String),
    Hotel(String),
}

impl TripConfiguration {
    pub fn trip_type(&self) -> Option<TripType> {
        match self {
            TripConfiguration::Undecided => None,
            TripConfiguration::Package(_) => Some(TripType::Package),
            TripConfiguration::Own(_) => Some(TripType::Own),
        }
    }

    pub fn destination(&self) -> Option<&str> {
        match self {
            TripConfiguration::Undecided => None,
            TripConfiguration::Package(c) => c.destination.as_deref(),
            TripConfiguration::Own(c) => c.destination.as_deref(),
        }
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        match self {
            TripConfiguration::Undecided => None,
            TripConfiguration::Package(c) => c.from_date,
            TripConfiguration::Own(c) => c.from_date,
        }
    }

    /// End date: chosen for own trips, derived from the package otherwise.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            TripConfiguration::Undecided => None,
            TripConfiguration::Package(c) => c.to_date(),
            TripConfiguration::Own(c) => c.to_date,
        }
    }

    /// Transport chosen on the transport step, or bundled with the package.
    pub fn transport(&self) -> Option<Transport> {
        match self {
            TripConfiguration::Undecided => None,
            TripConfiguration::Package(c) => c.package().map(|p| p.transport),
            TripConfiguration::Own(c) => c.transport,
        }
    }

    /// Running total shown on the summary step.
    pub fn estimated_cost(&self) -> u64 {
        match self {
            TripConfiguration::Undecided => 0,
            TripConfiguration::Package(c) => c.package().map_or(0, |p| p.price),
            TripConfiguration::Own(c) => c.estimated_cost(),
        }
    }

    pub fn as_own(&self) -> Option<&OwnTripConfig> {
        match self {
            TripConfiguration::Own(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_package(&self) -> Option<&PackageTripConfig> {
        match self {
            TripConfiguration::Package(c) => Some(c),
            _ => None,
        }
    }

    /// Switch trip type, carrying over destination and start date.
    fn set_trip_type(&mut self, trip_type: TripType) {
        if self.trip_type() == Some(trip_type) {
            return;
        }

        let destination = self.destination().map(str::to_string);
        let from_date = self.from_date();

        *self = match trip_type {
            TripType::Package => TripConfiguration::Package(PackageTripConfig {
                destination,
                from_date,
                package_id: None,
            }),
            TripType::Own => TripConfiguration::Own(OwnTripConfig {
                destination,
                from_date,
                ..OwnTripConfig::default()
            }),
        };
    }

    /// Merge a step's input into the configuration.
    ///
    /// Returns `false` when the input does not apply to the current trip
    /// type (or names something missing from the catalogs) and was dropped.
    pub fn apply(&mut self, input: StepInput) -> bool {
        match (&mut *self, input) {
            (config, StepInput::TripType(trip_type)) => {
                config.set_trip_type(trip_type);
                true
            }
            (TripConfiguration::Undecided, input) => {
                debug!("Dropping {:?}: no trip type chosen", input);
                false
            }
            (TripConfiguration::Package(c), StepInput::Destination(name)) => {
                let name = name.trim().to_string();
                if c.package().is_some_and(|p| !p.serves(&name)) {
                    debug!("Clearing package chosen for another destination");
                    c.package_id = None;
                }
                c.destination = Some(name);
                true
            }
            (TripConfiguration::Own(c), StepInput::Destination(name)) => {
                c.destination = Some(name.trim().to_string());
                true
            }
            (TripConfiguration::Own(c), StepInput::Dates { from, to }) => {
                c.from_date = Some(from);
                c.to_date = Some(to);
                true
            }
            (TripConfiguration::Package(c), StepInput::PackageStart { from, package_id }) => {
                let Some(package) = packages::find(&package_id) else {
                    debug!("Unknown package {}", package_id);
                    return false;
                };
                if c.destination.as_deref().is_some_and(|d| !package.serves(d)) {
                    debug!("Package {} is not sold for {:?}", package_id, c.destination);
                    return false;
                }
                c.from_date = Some(from);
                c.package_id = Some(package_id);
                true
            }
            (TripConfiguration::Own(c), StepInput::Transport(transport)) => {
                if c.transport != Some(transport) {
                    c.route_id = None;
                }
                c.transport = Some(transport);
                true
            }
            (TripConfiguration::Own(c), StepInput::Route(route_id)) => {
                if routes::find(&route_id).is_none() {
                    debug!("Unknown route {}", route_id);
                    return false;
                }
                c.route_id = Some(route_id);
                true
            }
            (TripConfiguration::Own(c), StepInput::Hotel(hotel_id)) => {
                if hotels::find(&hotel_id).is_none() {
                    debug!("Unknown hotel {}", hotel_id);
                    return false;
                }
                c.selected_hotel = Some(hotel_id);
                true
            }
            (_, input) => {
                debug!("Dropping {:?}: not used by this trip type", input);
                false
            }
        }
    }

    /// Add a spot to the watch cart of an own trip.
    pub fn add_spot(&mut self, spot: &Spot) -> bool {
        match self {
            TripConfiguration::Own(c) => c.watch_cart.add(spot),
            _ => false,
        }
    }

    /// Remove a spot from the watch cart of an own trip.
    pub fn remove_spot(&mut self, spot_id: &str) -> bool {
        match self {
            TripConfiguration::Own(c) => c.watch_cart.remove(spot_id),
            _ => false,
        }
    }
}
