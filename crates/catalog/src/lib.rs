//! Static mock catalogs for Roamly.
//!
//! Everything here is read-only lookup data. Destinations are matched by
//! name (case-insensitively), everything else by its string id.
//!
//! - [`destinations`] - featured destinations shown on the explore tab
//! - [`hotels`] / [`spots`] / [`packages`] - per-destination offerings
//! - [`Transport`] - the six transport modes a trip can use
//! - [`routes`] - saved routes offered for self-driven trips
//! - [`locale`] - the static language, region and currency lists

pub mod destinations;
pub mod hotels;
pub mod locale;
pub mod packages;
pub mod routes;
pub mod spots;
mod transport;

pub use destinations::Destination;
pub use hotels::Hotel;
pub use packages::TravelPackage;
pub use routes::SavedRoute;
pub use spots::Spot;
pub use transport::Transport;

/// Case-insensitive destination comparison used by every per-destination lookup.
pub(crate) fn same_destination(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
