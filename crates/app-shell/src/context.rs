//! The application context: owns every store and the navigation state.

use std::sync::Arc;

use chrono::Local;
use preferences::{ColorScheme, PreferenceStore};
use session::{MockAuthenticator, SessionStore};
use storage::Database;
use tokio::sync::watch;
use tracing::info;
use trip_planner::{StepInput, Transition, TripHistory, TripRecord, TripWizard};

use crate::chat::{ChatInbox, ChatMessage};
use crate::config::AppConfig;
use crate::error::{Result, ShellError};
use crate::expenses::ExpenseLedger;
use crate::navigation::{Navigator, SubScreen};
use crate::onboarding::Onboarding;
use crate::payments::PaymentMethods;

/// Which top-level flow the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStage {
    Onboarding,
    Auth,
    Main,
}

/// Everything the screens read from and write to.
///
/// Build one with [`AppContext::open`] and tear it down with
/// [`dispose`](Self::dispose).
pub struct AppContext {
    database: Database,
    host_scheme: watch::Sender<ColorScheme>,
    preferences: PreferenceStore,
    sessions: SessionStore,
    history: TripHistory,
    navigator: Navigator,
    onboarding: Onboarding,
    onboarding_finished: bool,
    ledger: ExpenseLedger,
    chat: ChatInbox,
    payments: PaymentMethods,
    wizard: Option<TripWizard>,
}

impl AppContext {
    /// Connect to the configured database, run migrations and load all stores.
    pub async fn open(config: &AppConfig) -> Result<Self> {
        let database = Database::connect_with_pool_size(&config.database_url, config.pool_size).await?;
        database.migrate().await?;
        Self::with_database(database, config).await
    }

    /// Load all stores from an already migrated database.
    pub async fn with_database(database: Database, config: &AppConfig) -> Result<Self> {
        let (host_scheme, scheme_rx) = watch::channel(ColorScheme::default());
        let preferences = PreferenceStore::open(database.clone(), scheme_rx).await?;

        let authenticator = Arc::new(MockAuthenticator::new(config.auth_delay));
        let sessions = SessionStore::open(database.clone(), authenticator).await?;
        let history = TripHistory::load(database.clone()).await?;

        // A returning user has already seen the carousel.
        let onboarding_finished = sessions.is_logged_in().await;
        let own_name = sessions
            .current_user()
            .await
            .map(|user| user.username)
            .unwrap_or_else(|| "You".to_string());

        info!(
            "App context ready ({} trips in history, signed in: {})",
            history.len().await,
            onboarding_finished
        );

        Ok(Self {
            database,
            host_scheme,
            preferences,
            sessions,
            history,
            navigator: Navigator::new(),
            onboarding: Onboarding::new(),
            onboarding_finished,
            ledger: ExpenseLedger::sample(Local::now().date_naive()),
            chat: ChatInbox::sample(&own_name),
            payments: PaymentMethods::sample(),
            wizard: None,
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn history(&self) -> &TripHistory {
        &self.history
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn onboarding(&self) -> &Onboarding {
        &self.onboarding
    }

    pub fn onboarding_mut(&mut self) -> &mut Onboarding {
        &mut self.onboarding
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ExpenseLedger {
        &mut self.ledger
    }

    pub fn chat(&self) -> &ChatInbox {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatInbox {
        &mut self.chat
    }

    /// Send a message to the open conversation as the signed-in user.
    pub async fn send_chat_message(&mut self, text: &str) -> Result<ChatMessage> {
        let sender = self
            .sessions
            .current_user()
            .await
            .map(|user| user.username)
            .unwrap_or_else(|| "You".to_string());
        let sent = self.chat.send(&sender, text, Local::now().time())?;
        Ok(sent.clone())
    }

    pub fn payments(&self) -> &PaymentMethods {
        &self.payments
    }

    pub fn payments_mut(&mut self) -> &mut PaymentMethods {
        &mut self.payments
    }

    /// Report a change in the host's light/dark setting.
    pub fn set_system_color_scheme(&self, scheme: ColorScheme) {
        self.host_scheme.send_replace(scheme);
    }

    /// Leave the carousel. Only possible from the last slide.
    pub fn finish_onboarding(&mut self) -> bool {
        if self.onboarding.is_complete() {
            self.onboarding_finished = true;
        }
        self.onboarding_finished
    }

    pub async fn stage(&self) -> AppStage {
        if !self.onboarding_finished {
            AppStage::Onboarding
        } else if self.sessions.is_logged_in().await {
            AppStage::Main
        } else {
            AppStage::Auth
        }
    }

    /// Sign out and return to a fresh main view.
    pub async fn logout(&mut self) -> Result<()> {
        self.sessions.logout().await?;
        self.wizard = None;
        self.navigator = Navigator::new();
        Ok(())
    }

    /// Open the trip-planning flow with a fresh wizard.
    pub fn start_trip_planning(&mut self) -> &mut TripWizard {
        if self.wizard.is_some() {
            info!("Discarding unfinished trip plan");
        }
        self.navigator.open(SubScreen::TripPlanning);
        self.wizard.insert(TripWizard::new())
    }

    pub fn trip_wizard(&self) -> Option<&TripWizard> {
        self.wizard.as_ref()
    }

    pub fn trip_wizard_mut(&mut self) -> Option<&mut TripWizard> {
        self.wizard.as_mut()
    }

    pub fn is_planning_trip(&self) -> bool {
        self.wizard.is_some()
    }

    pub fn advance_trip_planning(&mut self, input: Option<StepInput>) -> Result<Transition> {
        let wizard = self.wizard.as_mut().ok_or(ShellError::NotPlanning)?;
        Ok(wizard.advance(input))
    }

    /// Go back one step. Backing out of the first step closes the flow.
    pub fn retreat_trip_planning(&mut self) -> Result<Transition> {
        let wizard = self.wizard.as_mut().ok_or(ShellError::NotPlanning)?;
        let transition = wizard.retreat();
        if transition == Transition::Exit {
            self.cancel_trip_planning();
        }
        Ok(transition)
    }

    /// Close the flow without saving anything.
    pub fn cancel_trip_planning(&mut self) {
        self.wizard = None;
        self.navigator.close(SubScreen::TripPlanning);
    }

    /// Finalize the trip into history and close the flow.
    ///
    /// On failure the wizard stays open so the user can fix the trip.
    pub async fn finish_trip_planning(&mut self) -> Result<TripRecord> {
        let wizard = self.wizard.as_mut().ok_or(ShellError::NotPlanning)?;
        let record = wizard.finalize(&self.history).await?;
        self.cancel_trip_planning();
        Ok(record)
    }

    /// Stop background work and close the database.
    pub async fn dispose(self) {
        self.preferences.dispose();
        self.database.close().await;
        info!("App context disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Tab;

    async fn context() -> AppContext {
        let db = Database::in_memory().await.unwrap();
        AppContext::with_database(db, &AppConfig::for_tests()).await.unwrap()
    }

    #[tokio::test]
    async fn test_fresh_context_starts_in_onboarding() {
        let mut ctx = context().await;
        assert_eq!(ctx.stage().await, AppStage::Onboarding);

        assert!(!ctx.finish_onboarding());
        ctx.onboarding_mut().skip();
        assert!(ctx.finish_onboarding());
        assert_eq!(ctx.stage().await, AppStage::Auth);

        ctx.sessions().login("kavya@example.com", "pw", None).await.unwrap();
        assert_eq!(ctx.stage().await, AppStage::Main);
        ctx.dispose().await;
    }

    #[tokio::test]
    async fn test_planning_requires_open_wizard() {
        let mut ctx = context().await;
        assert!(matches!(ctx.retreat_trip_planning(), Err(ShellError::NotPlanning)));
        assert!(matches!(
            ctx.finish_trip_planning().await,
            Err(ShellError::NotPlanning)
        ));
    }

    #[tokio::test]
    async fn test_retreat_from_first_step_closes_flow() {
        let mut ctx = context().await;
        ctx.start_trip_planning();
        assert_eq!(
            ctx.navigator().current_sub_screen(),
            Some(SubScreen::TripPlanning)
        );

        assert_eq!(ctx.retreat_trip_planning().unwrap(), Transition::Exit);
        assert!(!ctx.is_planning_trip());
        assert!(ctx.navigator().current_sub_screen().is_none());
    }

    #[tokio::test]
    async fn test_chat_messages_use_signed_in_name() {
        let mut ctx = context().await;
        ctx.sessions().login("rohan@example.com", "pw", None).await.unwrap();

        ctx.chat_mut().open("1");
        let sent = ctx.send_chat_message("Count me in").await.unwrap();
        assert_eq!(sent.sender, "rohan");
        assert!(ctx.send_chat_message("  ").await.is_err());
        assert_eq!(ctx.chat().messages("1").len(), 1);
    }

    #[tokio::test]
    async fn test_logout_resets_navigation() {
        let mut ctx = context().await;
        ctx.sessions().signup("dev@example.com", "pw", "dev").await.unwrap();
        ctx.navigator_mut().select_tab(Tab::Chat);
        ctx.start_trip_planning();

        ctx.logout().await.unwrap();
        assert!(!ctx.is_planning_trip());
        assert_eq!(ctx.navigator().active_tab(), Tab::Explore);
        assert!(!ctx.sessions().is_logged_in().await);
    }
}
