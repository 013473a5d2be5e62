//! End-to-end flows through the application context.

use std::time::Duration;

use app_shell::{AppConfig, AppContext, AppStage, SubScreen};
use catalog::{spots, Transport};
use chrono::NaiveDate;
use preferences::{AppPreferences, ColorScheme, PreferenceGroup, Preferences, Theme};
use serde_json::json;
use storage::Database;
use trip_planner::{Screen, StepId, StepInput, Transition, TripFilter, TripStatus, TripType};

async fn open(db: &Database) -> AppContext {
    AppContext::with_database(db.clone(), &AppConfig::for_tests())
        .await
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_package_trip_lands_in_history() {
    let db = Database::in_memory().await.unwrap();
    let mut app = open(&db).await;
    assert_eq!(app.history().list(TripFilter::All, "").await.len(), 2);

    app.start_trip_planning();
    app.advance_trip_planning(Some(StepInput::TripType(TripType::Package))).unwrap();
    app.advance_trip_planning(Some(StepInput::Destination("Kerala, India".into()))).unwrap();
    let moved = app
        .advance_trip_planning(Some(StepInput::PackageStart {
            from: date(2025, 4, 10),
            package_id: "kerala-backwater-escape".into(),
        }))
        .unwrap();
    assert_eq!(moved, Transition::Moved(Screen::Step(StepId::Summary)));
    app.advance_trip_planning(None).unwrap();

    let record = app.finish_trip_planning().await.unwrap();
    assert_eq!(record.name, "Kerala Backwater Escape");
    assert_eq!(record.budget, 36_500);
    assert_eq!(record.status, TripStatus::Upcoming);
    assert!(!app.is_planning_trip());
    assert!(!app.navigator().is_open(SubScreen::TripPlanning));

    assert_eq!(app.history().list(TripFilter::All, "").await.len(), 3);
    let upcoming = app.history().list(TripFilter::Upcoming, "").await;
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, record.id);

    app.dispose().await;
}

#[tokio::test]
async fn test_own_trip_with_route_and_cart() {
    let db = Database::in_memory().await.unwrap();
    let mut app = open(&db).await;

    app.start_trip_planning();
    for input in [
        StepInput::TripType(TripType::Own),
        StepInput::Destination("Goa, India".into()),
        StepInput::Dates {
            from: date(2025, 5, 1),
            to: date(2025, 5, 4),
        },
    ] {
        app.advance_trip_planning(Some(input)).unwrap();
    }

    let moved = app
        .advance_trip_planning(Some(StepInput::Transport(Transport::Car)))
        .unwrap();
    assert_eq!(moved, Transition::Moved(Screen::RouteSelection));
    assert_eq!(app.trip_wizard().unwrap().progress(), (4, 8));

    app.advance_trip_planning(Some(StepInput::Route("city-explorer".into()))).unwrap();
    app.advance_trip_planning(Some(StepInput::Hotel("goa-palm-stay".into()))).unwrap();

    let wizard = app.trip_wizard_mut().unwrap();
    let baga = spots::find("goa-baga-watersports").unwrap();
    let fort = spots::find("goa-fort-aguada").unwrap();
    assert!(wizard.add_spot(baga));
    assert!(!wizard.add_spot(baga));
    assert!(wizard.add_spot(fort));
    assert_eq!(wizard.running_total(), 3_200 + 2_500 + 50);

    app.advance_trip_planning(None).unwrap();
    app.advance_trip_planning(None).unwrap();
    let record = app.finish_trip_planning().await.unwrap();

    assert_eq!(record.name, "Trip to Goa, India");
    assert_eq!(record.transportation, "Car via City Explorer");
    assert_eq!(record.accommodation, "Palm Grove Stay");
    assert_eq!(record.duration, "3 days");

    let reopened = open(&db).await;
    assert!(reopened.history().contains(&record.id).await);
    assert_eq!(reopened.history().len().await, 3);
}

#[tokio::test]
async fn test_removing_a_trip_and_searching() {
    let db = Database::in_memory().await.unwrap();
    let app = open(&db).await;

    assert!(!app.history().remove("does-not-exist").await.unwrap());
    assert_eq!(app.history().len().await, 2);

    assert!(app.history().list(TripFilter::All, "antarctica").await.is_empty());
    assert_eq!(app.history().list(TripFilter::All, "goa").await.len(), 1);
}

#[tokio::test]
async fn test_preferences_persist_and_reset() {
    let db = Database::in_memory().await.unwrap();
    let app = open(&db).await;

    app.preferences()
        .merge_partial(PreferenceGroup::AppPreferences, json!({ "units": "imperial" }))
        .await
        .unwrap();
    app.preferences()
        .update::<AppPreferences, _>(|prefs| prefs.theme = Theme::Dark)
        .await
        .unwrap();
    assert!(app.preferences().dark_mode());

    let reopened = open(&db).await;
    let prefs = reopened.preferences().app_preferences().await;
    assert_eq!(prefs.theme, Theme::Dark);
    assert!(prefs.auto_sync);

    reopened.preferences().reset_to_defaults().await.unwrap();
    let after_reset = open(&db).await;
    assert_eq!(after_reset.preferences().snapshot().await, Preferences::default());
}

#[tokio::test]
async fn test_system_theme_follows_host() {
    let db = Database::in_memory().await.unwrap();
    let app = open(&db).await;
    assert!(app.preferences().is_following_system());
    assert!(!app.preferences().dark_mode());

    let mut dark = app.preferences().subscribe_dark_mode();
    app.set_system_color_scheme(ColorScheme::Dark);
    tokio::time::timeout(Duration::from_secs(1), dark.changed())
        .await
        .unwrap()
        .unwrap();
    assert!(*dark.borrow());

    app.dispose().await;
}

#[tokio::test]
async fn test_returning_user_skips_onboarding() {
    let db = Database::in_memory().await.unwrap();
    let mut app = open(&db).await;
    assert_eq!(app.stage().await, AppStage::Onboarding);

    app.onboarding_mut().skip();
    app.finish_onboarding();
    app.sessions()
        .signup("nisha@example.com", "pw", "nisha")
        .await
        .unwrap();

    let reopened = open(&db).await;
    assert_eq!(reopened.stage().await, AppStage::Main);
    assert_eq!(
        reopened.sessions().current_user().await.unwrap().username,
        "nisha"
    );
}
