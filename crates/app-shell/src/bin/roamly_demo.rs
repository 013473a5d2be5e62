//! Walks through a full Roamly session against the configured database.

use app_shell::{AppConfig, AppContext, ExpenseCategory, NewExpense, SubScreen, Tab};
use catalog::{spots, Transport};
use chrono::{Days, Local};
use preferences::{AppPreferences, Theme};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trip_planner::{StepInput, TripFilter, TripType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env()?;
    info!("Opening {}", config.database_url);
    let mut app = AppContext::open(&config).await?;

    app.onboarding_mut().skip();
    app.finish_onboarding();
    if !app.sessions().is_logged_in().await {
        let user = app.sessions().login("traveller@example.com", "demo", None).await?;
        info!("Signed in as {}", user.username);
    }
    info!("Stage: {:?}", app.stage().await);

    let start = Local::now().date_naive();
    let end = start.checked_add_days(Days::new(3)).unwrap_or(start);
    let destination = "Goa, India";

    app.start_trip_planning();
    for input in [
        StepInput::TripType(TripType::Own),
        StepInput::Destination(destination.to_string()),
        StepInput::Dates { from: start, to: end },
        StepInput::Transport(Transport::Car),
        StepInput::Route("city-explorer".to_string()),
        StepInput::Hotel("goa-palm-stay".to_string()),
    ] {
        app.advance_trip_planning(Some(input))?;
    }
    if let Some(wizard) = app.trip_wizard_mut() {
        for spot in spots::for_destination(destination).into_iter().take(2) {
            wizard.add_spot(spot);
        }
        info!("Estimated cost: {}", wizard.running_total());
    }
    app.advance_trip_planning(None)?;
    app.advance_trip_planning(None)?;

    let record = app.finish_trip_planning().await?;
    info!("Saved {} ({}), budget {}", record.name, record.id, record.budget);

    app.navigator_mut().open(SubScreen::TripHistory);
    for trip in app.history().list(TripFilter::Upcoming, "").await {
        info!("Upcoming: {} {} to {}", trip.name, trip.start_date, trip.end_date);
    }
    app.navigator_mut().back();

    app.preferences()
        .update::<AppPreferences, _>(|prefs| prefs.theme = Theme::Dark)
        .await?;
    info!("Dark mode: {}", app.preferences().dark_mode());

    app.navigator_mut().select_tab(Tab::Expenses);
    app.ledger_mut().add_expense(NewExpense {
        amount: "650".to_string(),
        category: ExpenseCategory::Food,
        trip: "Goa Trip".to_string(),
        date: start,
        description: "Fish thali".to_string(),
    })?;
    info!(
        "Spent {} of {} ({:.0}% used)",
        app.ledger().total_spent(),
        app.ledger().total_budget(),
        app.ledger().percentage_used()
    );

    app.navigator_mut().select_tab(Tab::Chat);
    let unread = app.chat().total_unread();
    if let Some(first) = app.chat().search("buddies").first().map(|c| c.id.clone()) {
        app.chat_mut().open(&first);
        app.send_chat_message("Just booked Goa, who's in?").await?;
    }
    info!("Chat: {} unread before reading", unread);

    app.navigator_mut().open(SubScreen::PaymentMethods);
    app.payments_mut().set_as_default("2");
    if let Some(card) = app.payments().default_method() {
        info!("Default card: {}", card.display_name());
    }

    app.dispose().await;
    Ok(())
}
