//! Step sequencing for the trip-planning wizard.
//!
//! Sequencing is a pair of pure functions over the configuration and the
//! current screen, so every branch can be tested without a controller.
//!
//! ```text
//! own:      1 TripType → 2 Destination → 3 Dates → 4 Transport ─┬─────────────────→ 5 Hotel → 6 Spots → 7 Summary → 8 Confirmation
//!                                                               └→ RouteSelection ─┘   (car, bike, cab only)
//! package:  1 TripType → 2 Destination → 3 Start date + package → 7 Summary → 8 Confirmation
//! ```

use crate::config::TripConfiguration;

/// Number of steps shown to the user, whichever branch is taken.
pub const TOTAL_STEPS: u8 = 8;

/// A numbered wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepId {
    TripType = 1,
    Destination = 2,
    Dates = 3,
    Transport = 4,
    HotelBooking = 5,
    SpotSelection = 6,
    Summary = 7,
    Confirmation = 8,
}

impl StepId {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            StepId::TripType => "Trip type",
            StepId::Destination => "Destination",
            StepId::Dates => "Dates",
            StepId::Transport => "Transport",
            StepId::HotelBooking => "Hotel",
            StepId::SpotSelection => "Spots",
            StepId::Summary => "Summary",
            StepId::Confirmation => "Confirmation",
        }
    }
}

/// What the wizard is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Step(StepId),
    /// Route picker shown between transport and hotel for self-driven trips.
    RouteSelection,
}

impl Screen {
    pub const FIRST: Screen = Screen::Step(StepId::TripType);
    pub const LAST: Screen = Screen::Step(StepId::Confirmation);

    /// Step number displayed in the header. The route picker keeps the
    /// transport step's number.
    pub fn step_number(self) -> u8 {
        match self {
            Screen::Step(step) => step.number(),
            Screen::RouteSelection => StepId::Transport.number(),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Screen::LAST
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::FIRST
    }
}

/// The screen after `current`, or `None` on the terminal step (and on the
/// first step while no trip type has been chosen).
pub fn next_screen(config: &TripConfiguration, current: Screen) -> Option<Screen> {
    use StepId::*;

    if current.is_terminal() {
        return None;
    }

    let next = match config {
        TripConfiguration::Undecided => return None,
        TripConfiguration::Package(_) => match current {
            Screen::Step(TripType) => Screen::Step(Destination),
            Screen::Step(Destination) => Screen::Step(Dates),
            Screen::Step(Summary) => Screen::Step(Confirmation),
            // Dates, plus screens a package trip never visits.
            _ => Screen::Step(Summary),
        },
        TripConfiguration::Own(own) => match current {
            Screen::Step(TripType) => Screen::Step(Destination),
            Screen::Step(Destination) => Screen::Step(Dates),
            Screen::Step(Dates) => Screen::Step(Transport),
            Screen::Step(Transport) if own.needs_route_selection() => Screen::RouteSelection,
            Screen::Step(Transport) | Screen::RouteSelection => Screen::Step(HotelBooking),
            Screen::Step(HotelBooking) => Screen::Step(SpotSelection),
            Screen::Step(SpotSelection) => Screen::Step(Summary),
            Screen::Step(Summary) | Screen::Step(Confirmation) => Screen::Step(Confirmation),
        },
    };

    Some(next)
}

/// The screen before `current`, or `None` on the first step, meaning the
/// wizard should be closed.
pub fn previous_screen(config: &TripConfiguration, current: Screen) -> Option<Screen> {
    use StepId::*;

    if current == Screen::FIRST {
        return None;
    }

    let previous = match config {
        TripConfiguration::Undecided => Screen::FIRST,
        TripConfiguration::Package(_) => match current {
            Screen::Step(Destination) => Screen::Step(TripType),
            Screen::Step(Dates) => Screen::Step(Destination),
            Screen::Step(Confirmation) => Screen::Step(Summary),
            // Summary, plus screens a package trip never visits.
            _ => Screen::Step(Dates),
        },
        TripConfiguration::Own(own) => match current {
            Screen::Step(TripType) | Screen::Step(Destination) => Screen::Step(TripType),
            Screen::Step(Dates) => Screen::Step(Destination),
            Screen::Step(Transport) => Screen::Step(Dates),
            Screen::RouteSelection => Screen::Step(Transport),
            Screen::Step(HotelBooking) if own.needs_route_selection() => Screen::RouteSelection,
            Screen::Step(HotelBooking) => Screen::Step(Transport),
            Screen::Step(SpotSelection) => Screen::Step(HotelBooking),
            Screen::Step(Summary) => Screen::Step(SpotSelection),
            Screen::Step(Confirmation) => Screen::Step(Summary),
        },
    };

    Some(previous)
}

/// Whether the fields `screen` asks for are filled in, i.e. whether its
/// "Continue" button is enabled.
pub fn is_satisfied(config: &TripConfiguration, screen: Screen) -> bool {
    use StepId::*;

    match screen {
        Screen::Step(TripType) => config.trip_type().is_some(),
        Screen::Step(Destination) => config
            .destination()
            .is_some_and(|d| !d.trim().is_empty()),
        Screen::Step(Dates) => match config {
            TripConfiguration::Undecided => false,
            TripConfiguration::Package(c) => c.from_date.is_some() && c.package().is_some(),
            TripConfiguration::Own(c) => matches!(
                (c.from_date, c.to_date),
                (Some(from), Some(to)) if to >= from
            ),
        },
        Screen::Step(Transport) => config.as_own().is_some_and(|c| c.transport.is_some()),
        Screen::RouteSelection => true,
        Screen::Step(HotelBooking) => config.as_own().is_some_and(|c| c.hotel().is_some()),
        Screen::Step(SpotSelection) | Screen::Step(Summary) => true,
        Screen::Step(Confirmation) => false,
    }
}
