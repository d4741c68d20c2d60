//! REST API tests driving the router with `oneshot`

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::NaiveDate;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use bistro_server::api::build_app;
use bistro_server::utils::time::FixedClock;
use bistro_server::{Config, CrudService, Database, ServerState};

fn app_with(db: Database) -> Router {
    let config = Config::with_overrides(0, false);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let state = ServerState::new(config, db, Arc::new(FixedClock(today)));
    build_app(&state).with_state(state)
}

fn app() -> Router {
    app_with(Database::seeded())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn staff_form(first_name: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Lopez",
        "date_of_birth": "2000-06-01",
        "gender": "Female",
        "phone": "555-0199",
        "email": "ines@bistro.example",
        "department": "Service",
        "position": "Waiter",
        "salary": 28000,
        "hire_date": "2024-02-01"
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_staff_crud_round() {
    let app = app_with(Database::empty());

    let (status, created) = send(&app, "POST", "/api/staff", Some(staff_form("Ines"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["age"], 24);

    let (status, fetched) = send(&app, "GET", "/api/staff/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["first_name"], "Ines");

    let (status, updated) = send(&app, "PUT", "/api/staff/1", Some(staff_form("Inés"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["first_name"], "Inés");

    let (status, removed) = send(&app, "DELETE", "/api/staff/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, json!(true));

    let (status, body) = send(&app, "GET", "/api/staff/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
}

#[tokio::test]
async fn test_delete_missing_is_ok_false() {
    let (status, body) = send(&app(), "DELETE", "/api/menu/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));
}

#[tokio::test]
async fn test_update_missing_echoes_form() {
    let app = app();
    let (status, body) = send(&app, "PUT", "/api/staff/999", Some(staff_form("Ghost"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 999);
    assert_eq!(body["first_name"], "Ghost");
    assert_eq!(body["age"], 24);

    let (_, page) = send(&app, "GET", "/api/staff", None).await;
    assert_eq!(page["total"], 12);
    let (status, _) = send(&app, "GET", "/api/staff/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn test_slow_request_times_out() {
    let mut config = Config::with_overrides(0, true);
    config.request_timeout_ms = 50;
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let state = ServerState::new(config, Database::seeded(), Arc::new(FixedClock(today)));
    let app = build_app(&state).with_state(state.clone());

    let (status, _) = send(&app, "POST", "/api/staff", Some(staff_form("Late"))).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(state.staff.list().await.unwrap().len(), 12);
}

#[tokio::test]
async fn test_invalid_salary_is_rejected() {
    let mut form = staff_form("Ines");
    form["salary"] = json!(-5);
    let (status, body) = send(&app(), "POST", "/api/staff", Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8002);
}

#[tokio::test]
async fn test_menu_create_and_update_keeps_id() {
    let app = app();
    let form = json!({
        "item_name": "Gazpacho",
        "category": "Appetizer",
        "description": "Chilled tomato soup",
        "price": 6.5,
        "preparation_time": 5,
        "is_vegetarian": true,
        "is_vegan": true,
        "is_gluten_free": true,
        "availability": true
    });
    let (status, created) = send(&app, "POST", "/api/menu", Some(form.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(id, 13);

    let mut changed = form;
    changed["price"] = json!(7.25);
    changed["availability"] = json!(false);
    let (status, updated) = send(&app, "PUT", &format!("/api/menu/{id}"), Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["price"], 7.25);
    assert_eq!(updated["availability"], false);
}

#[tokio::test]
async fn test_menu_invalid_preparation_time() {
    let form = json!({
        "item_name": "Instant",
        "category": "Side Dish",
        "price": 1.0,
        "preparation_time": 0
    });
    let (status, body) = send(&app(), "POST", "/api/menu", Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);
}

#[tokio::test]
async fn test_list_search_and_page() {
    let app = app();

    let (status, page) = send(&app, "GET", "/api/staff?page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 12);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);

    let (_, found) = send(&app, "GET", "/api/staff?search=KITCHEN", None).await;
    assert_eq!(found["total"], 3);

    let (_, menu) = send(&app, "GET", "/api/menu?category=Dessert", None).await;
    assert_eq!(menu["total"], 2);
}

#[tokio::test]
async fn test_read_only_endpoints() {
    let app = app();

    let (status, orders) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders["data"][0]["customer"], "John Doe");

    let (status, reservation) = send(&app, "GET", "/api/reservations/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reservation["time"], "19:00");

    let (status, body) = send(&app, "GET", "/api/inventory/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5001);
}

#[tokio::test]
async fn test_dashboard_and_reports() {
    let app = app();

    let (status, dashboard) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["stats"]["staff_count"], 12);
    assert_eq!(dashboard["stats"]["order_count"], 2);

    let (status, reports) = send(&app, "GET", "/api/reports", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reports["monthly_sales"]["labels"][0], "Jan");
}
