//! Tab and sub-screen routing.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Explore,
    Routes,
    Expenses,
    Chat,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Explore, Tab::Routes, Tab::Expenses, Tab::Chat, Tab::Settings];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Explore => "explore",
            Tab::Routes => "routes",
            Tab::Expenses => "expenses",
            Tab::Chat => "chat",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Explore => "Explore",
            Tab::Routes => "Routes",
            Tab::Expenses => "Expenses",
            Tab::Chat => "Chat",
            Tab::Settings => "Settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab: {s}"))
    }
}

/// Full-screen views layered over the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubScreen {
    Profile,
    TripPlanning,
    TripHistory,
    Notifications,
    PrivacySecurity,
    AppPreferences,
    LanguageRegion,
    ProfileInformation,
    PaymentMethods,
    HelpCenter,
}

impl SubScreen {
    /// Settings pages, in the order the settings tab lists them.
    pub const SETTINGS_PAGES: [SubScreen; 7] = [
        SubScreen::ProfileInformation,
        SubScreen::PrivacySecurity,
        SubScreen::PaymentMethods,
        SubScreen::Notifications,
        SubScreen::LanguageRegion,
        SubScreen::AppPreferences,
        SubScreen::HelpCenter,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SubScreen::Profile => "Profile",
            SubScreen::TripPlanning => "Plan a Trip",
            SubScreen::TripHistory => "Trip History",
            SubScreen::Notifications => "Notifications",
            SubScreen::PrivacySecurity => "Privacy & Security",
            SubScreen::AppPreferences => "App Preferences",
            SubScreen::LanguageRegion => "Language & Region",
            SubScreen::ProfileInformation => "Profile Information",
            SubScreen::PaymentMethods => "Payment Methods",
            SubScreen::HelpCenter => "Help Center",
        }
    }

    pub fn is_settings_page(&self) -> bool {
        Self::SETTINGS_PAGES.contains(self)
    }
}

/// Active tab plus a stack of open sub-screens.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    tab: Tab,
    stack: Vec<SubScreen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    /// Topmost sub-screen, if any is open.
    pub fn current_sub_screen(&self) -> Option<SubScreen> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Switch tabs. Any open sub-screens are closed.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!("Selecting tab {}", tab);
        self.stack.clear();
        self.tab = tab;
    }

    /// Open a sub-screen on top of the current view.
    ///
    /// Opening the screen that is already on top does nothing. Settings
    /// pages switch to the settings tab first.
    pub fn open(&mut self, screen: SubScreen) {
        if self.current_sub_screen() == Some(screen) {
            return;
        }
        if screen.is_settings_page() && self.tab != Tab::Settings {
            self.select_tab(Tab::Settings);
        }
        debug!("Opening {}", screen.title());
        self.stack.push(screen);
    }

    /// Close the topmost sub-screen. Returns `false` when already on a tab.
    pub fn back(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// Close a specific sub-screen and anything opened above it.
    pub fn close(&mut self, screen: SubScreen) -> bool {
        match self.stack.iter().rposition(|open| *open == screen) {
            Some(index) => {
                self.stack.truncate(index);
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self, screen: SubScreen) -> bool {
        self.stack.contains(&screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_explore() {
        let nav = Navigator::new();
        assert_eq!(nav.active_tab(), Tab::Explore);
        assert!(nav.current_sub_screen().is_none());
    }

    #[test]
    fn test_tab_parsing() {
        assert_eq!("chat".parse::<Tab>().unwrap(), Tab::Chat);
        assert_eq!(" Settings ".parse::<Tab>().unwrap(), Tab::Settings);
        assert!("profile".parse::<Tab>().is_err());
    }

    #[test]
    fn test_sub_screens_stack_and_back() {
        let mut nav = Navigator::new();
        nav.open(SubScreen::Profile);
        nav.open(SubScreen::TripHistory);
        nav.open(SubScreen::TripHistory);
        assert_eq!(nav.depth(), 2);

        assert!(nav.back());
        assert_eq!(nav.current_sub_screen(), Some(SubScreen::Profile));
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.active_tab(), Tab::Explore);
    }

    #[test]
    fn test_settings_page_switches_tab() {
        let mut nav = Navigator::new();
        nav.select_tab(Tab::Routes);
        nav.open(SubScreen::Notifications);

        assert_eq!(nav.active_tab(), Tab::Settings);
        assert_eq!(nav.current_sub_screen(), Some(SubScreen::Notifications));
    }

    #[test]
    fn test_select_tab_closes_sub_screens() {
        let mut nav = Navigator::new();
        nav.open(SubScreen::TripPlanning);
        nav.select_tab(Tab::Expenses);
        assert!(nav.current_sub_screen().is_none());
    }

    #[test]
    fn test_close_truncates_above() {
        let mut nav = Navigator::new();
        nav.open(SubScreen::Profile);
        nav.open(SubScreen::TripPlanning);
        assert!(nav.close(SubScreen::Profile));
        assert_eq!(nav.depth(), 0);
        assert!(!nav.close(SubScreen::HelpCenter));
    }
}
