//! Saved routes, offered on the route-selection screen for self-driven trips.

/// A saved route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedRoute {
    pub id: &'static str,
    pub name: &'static str,
    pub distance_km: f32,
    pub duration_minutes: u32,
    pub stops: u32,
}

impl SavedRoute {
    /// Duration formatted like "2h 30m".
    pub fn duration_label(&self) -> String {
        format!("{}h {}m", self.duration_minutes / 60, self.duration_minutes % 60)
    }
}

const ROUTES: &[SavedRoute] = &[
    SavedRoute { id: "city-explorer", name: "City Explorer", distance_km: 15.2, duration_minutes: 150, stops: 8 },
    SavedRoute { id: "beach-route", name: "Beach Route", distance_km: 8.5, duration_minutes: 105, stops: 5 },
    SavedRoute { id: "mountain-trail", name: "Mountain Trail", distance_km: 22.1, duration_minutes: 255, stops: 12 },
];

pub fn all() -> &'static [SavedRoute] {
    ROUTES
}

pub fn find(id: &str) -> Option<&'static SavedRoute> {
    ROUTES.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_label() {
        assert_eq!(find("city-explorer").unwrap().duration_label(), "2h 30m");
        assert_eq!(find("mountain-trail").unwrap().duration_label(), "4h 15m");
    }
}
