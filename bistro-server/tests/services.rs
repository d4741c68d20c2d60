//! Service behaviour under simulated latency (virtual time)

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{MenuItemForm, StaffForm};
use tokio::time::Instant;

use bistro_server::utils::time::FixedClock;
use bistro_server::{Config, CrudService, Database, ServerState};

fn state(db: Database) -> ServerState {
    let config = Config::with_overrides(0, true);
    let today = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
    ServerState::new(config, db, Arc::new(FixedClock(today)))
}

fn staff_form(name: &str) -> StaffForm {
    let mut form = StaffForm::blank(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    form.first_name = name.into();
    form.last_name = "Tester".into();
    form.date_of_birth = NaiveDate::from_ymd_opt(2000, 6, 1).unwrap();
    form
}

#[tokio::test(start_paused = true)]
async fn test_operation_delays() {
    let state = state(Database::seeded());

    let start = Instant::now();
    state.staff.list().await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(800));

    let start = Instant::now();
    state.staff.get(1).await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(400));

    let start = Instant::now();
    state.menu.create(MenuItemForm::default()).await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(1000));

    let start = Instant::now();
    state.menu.delete(1).await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_millis(800));
}

#[tokio::test(start_paused = true)]
async fn test_sequential_creates_get_increasing_ids() {
    let state = state(Database::empty());
    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D", "E"] {
        ids.push(state.staff.create(staff_form(name)).await.unwrap().id);
    }
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_creates_get_unique_ids() {
    let state = state(Database::empty());
    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let staff = state.staff.clone();
            tokio::spawn(async move { staff.create(staff_form(&format!("S{i}"))).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[tokio::test(start_paused = true)]
async fn test_staff_age_is_year_difference() {
    let state = state(Database::empty());
    // born 2000-06-01, "today" is 2024-11-30
    let staff = state.staff.create(staff_form("Lucas")).await.unwrap();
    assert_eq!(staff.age, 24);
}

#[tokio::test(start_paused = true)]
async fn test_get_missing_is_none_and_delete_missing_is_noop() {
    let state = state(Database::seeded());
    assert!(state.staff.get(404).await.unwrap().is_none());

    let before = state.menu.list().await.unwrap();
    assert!(!state.menu.delete(404).await.unwrap());
    assert_eq!(state.menu.list().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn test_update_missing_changes_nothing() {
    let state = state(Database::empty());
    let form = MenuItemForm {
        item_name: "Ghost Tart".into(),
        ..MenuItemForm::default()
    };
    let echoed = state.menu.update(7, form.clone()).await.unwrap();
    assert_eq!(echoed.id, 7);
    assert_eq!(echoed.to_form(), form);
    assert!(state.menu.list().await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_menu_update_replaces_values() {
    let state = state(Database::seeded());
    let mut form = state.menu.get(2).await.unwrap().unwrap().to_form();
    form.price = Decimal::new(1250, 2);
    form.is_gluten_free = true;

    let updated = state.menu.update(2, form.clone()).await.unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.price, Decimal::new(1250, 2));
    assert_eq!(state.menu.get(2).await.unwrap().unwrap().to_form(), form);
}

#[tokio::test(start_paused = true)]
async fn test_console_and_api_share_one_store() {
    let state = state(Database::seeded());
    let other = state.clone();
    let created = state.staff.create(staff_form("Shared")).await.unwrap();
    assert_eq!(other.staff.get(created.id).await.unwrap(), Some(created));
}
