//! Finished trip records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a trip.
///
/// New trips are created `Upcoming`; nothing moves them on automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "upcoming",
            TripStatus::Ongoing => "ongoing",
            TripStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished trip, as stored in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    /// Creation timestamp in milliseconds.
    pub id: String,
    pub name: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    /// Planned total cost in rupees.
    pub budget: u64,
    pub spent: u64,
    pub travelers: u32,
    /// Display duration, e.g. "7 days".
    pub duration: String,
    pub image: String,
    pub activities: Vec<String>,
    pub accommodation: String,
    pub transportation: String,
    pub created_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TripRecord {
    /// Share of the budget spent, as a percentage capped at 100.
    pub fn budget_used_percent(&self) -> f64 {
        if self.budget == 0 {
            return 0.0;
        }
        (self.spent as f64 / self.budget as f64 * 100.0).min(100.0)
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.destination.to_lowercase().contains(needle)
    }
}

/// Status filter used by the history screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripFilter {
    #[default]
    All,
    Upcoming,
    Ongoing,
    Completed,
}

impl TripFilter {
    pub fn matches(&self, status: TripStatus) -> bool {
        match self {
            TripFilter::All => true,
            TripFilter::Upcoming => status == TripStatus::Upcoming,
            TripFilter::Ongoing => status == TripStatus::Ongoing,
            TripFilter::Completed => status == TripStatus::Completed,
        }
    }
}

impl FromStr for TripFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TripFilter::All),
            "upcoming" => Ok(TripFilter::Upcoming),
            "ongoing" => Ok(TripFilter::Ongoing),
            "completed" => Ok(TripFilter::Completed),
            other => Err(format!("unknown trip filter: {}", other)),
        }
    }
}

/// Whether `record` passes both the status filter and the search text.
///
/// Search is a case-insensitive substring match on name or destination;
/// empty text matches everything.
pub fn record_matches(record: &TripRecord, filter: TripFilter, search: &str) -> bool {
    filter.matches(record.status) && record.matches_search(&search.trim().to_lowercase())
}

/// Per-status counts for the history screen's statistics row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripStats {
    pub upcoming: usize,
    pub ongoing: usize,
    pub completed: usize,
}

impl TripStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TripRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut stats, record| {
                match record.status {
                    TripStatus::Upcoming => stats.upcoming += 1,
                    TripStatus::Ongoing => stats.ongoing += 1,
                    TripStatus::Completed => stats.completed += 1,
                }
                stats
            })
    }

    pub fn total(&self) -> usize {
        self.upcoming + self.ongoing + self.completed
    }
}

/// "1 day" / "N days".
pub fn format_duration(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Ids of the built-in sample trips.
pub const SAMPLE_TRIP_IDS: [&str; 2] = ["1", "2"];

/// Built-in sample trips every history starts with.
pub fn sample_trips() -> Vec<TripRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

    vec![
        TripRecord {
            id: SAMPLE_TRIP_IDS[0].to_string(),
            name: "Goa Beach Adventure".to_string(),
            destination: "Goa, India".to_string(),
            start_date: date(2024, 6, 15),
            end_date: date(2024, 6, 22),
            status: TripStatus::Completed,
            budget: 45_000,
            spent: 42_000,
            travelers: 2,
            duration: "7 days".to_string(),
            image: "🏖️".to_string(),
            activities: strings(&["Beach hopping", "Water sports", "Nightlife", "Local cuisine"]),
            accommodation: "Beach Resort".to_string(),
            transportation: "Flight + Taxi".to_string(),
            created_date: date(2024, 5, 1),
            description: Some(
                "A relaxing beach vacation with water sports and local culture exploration."
                    .to_string(),
            ),
        },
        TripRecord {
            id: SAMPLE_TRIP_IDS[1].to_string(),
            name: "Kerala Backwaters".to_string(),
            destination: "Kerala, India".to_string(),
            start_date: date(2024, 7, 10),
            end_date: date(2024, 7, 17),
            status: TripStatus::Ongoing,
            budget: 38_000,
            spent: 28_000,
            travelers: 4,
            duration: "8 days".to_string(),
            image: "🌴".to_string(),
            activities: strings(&[
                "Houseboat cruise",
                "Spice plantation",
                "Ayurveda spa",
                "Wildlife safari",
            ]),
            accommodation: "Houseboat + Resort".to_string(),
            transportation: "Flight + Car rental".to_string(),
            created_date: date(2024, 6, 15),
            description: Some("Exploring the serene backwaters and rich culture of Kerala.".to_string()),
        },
    ]
}
