//! HTTP-level tests for the `/api/v1/cars` endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_engine, delete, get, post_json, put_json, MemoryDb};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn car_body(name: &str, brand: &str, engine: &Value) -> Value {
    json!({
        "name": name,
        "year": "2020",
        "brand": brand,
        "fuel_type": "Petrol",
        "engine": engine,
        "price": 25000.0
    })
}

async fn create_car(db: &Arc<MemoryDb>, name: &str, brand: &str, engine: &Value) -> Value {
    let response = post_json(
        build_test_app(db.clone()),
        "/api/v1/cars",
        car_body(name, brand, engine),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_includes_engine() {
    let db = Arc::new(MemoryDb::default());
    let engine = create_engine(&db, 1500).await;
    let car = create_car(&db, "Corolla", "Toyota", &engine).await;

    assert_eq!(car["name"], "Corolla");
    assert_eq!(car["engine"], engine);
    assert!(car["created_at"].is_string());

    let id = car["id"].as_str().unwrap();
    let response = get(build_test_app(db), &format!("/api/v1/cars/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, car);
}

#[tokio::test]
async fn get_unknown_car_returns_404() {
    let db = Arc::new(MemoryDb::default());
    let id = uuid::Uuid::new_v4();
    let response = get(build_test_app(db), &format!("/api/v1/cars/{id}")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Car with id {id} not found")
    );
}

#[tokio::test]
async fn get_with_malformed_id_returns_400() {
    let db = Arc::new(MemoryDb::default());
    let response = get(build_test_app(db), "/api/v1/cars/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn create_with_unknown_fuel_type_is_rejected() {
    let db = Arc::new(MemoryDb::default());
    let engine = create_engine(&db, 1500).await;
    let mut body = car_body("Corolla", "Toyota", &engine);
    body["fuel_type"] = json!("petrol");

    let response = post_json(build_test_app(db), "/api/v1/cars", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "fuel type must be one of: Petrol, Diesel, Electric, Hybrid"
    );
}

#[tokio::test]
async fn create_reports_first_violated_rule() {
    let db = Arc::new(MemoryDb::default());
    let response = post_json(
        build_test_app(db),
        "/api/v1/cars",
        json!({ "year": "1700", "price": -1.0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "name is required");
}

#[tokio::test]
async fn create_with_future_year_is_rejected() {
    let db = Arc::new(MemoryDb::default());
    let engine = create_engine(&db, 1500).await;
    let mut body = car_body("Corolla", "Toyota", &engine);
    body["year"] = json!("3000");

    let response = post_json(build_test_app(db), "/api/v1/cars", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "year must be between 1886 and the current year"
    );
}

#[tokio::test]
async fn create_referencing_missing_engine_returns_500() {
    let db = Arc::new(MemoryDb::default());
    let ghost = json!({
        "engine_id": uuid::Uuid::new_v4(),
        "displacement": 1500,
        "noOfCylinders": 4,
        "carRange": 600
    });

    let response = post_json(
        build_test_app(db.clone()),
        "/api/v1/cars",
        car_body("Corolla", "Toyota", &ghost),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");

    let listed = body_json(get(build_test_app(db), "/api/v1/cars?brand=Toyota").await).await;
    assert_eq!(listed, json!([]));
}

// ---------------------------------------------------------------------------
// Listing by brand
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_by_brand_filters_and_honours_engine_flag() {
    let db = Arc::new(MemoryDb::default());
    let engine = create_engine(&db, 1500).await;
    create_car(&db, "Corolla", "Toyota", &engine).await;
    create_car(&db, "Camry", "Toyota", &engine).await;
    create_car(&db, "Civic", "Honda", &engine).await;

    let response = get(build_test_app(db.clone()), "/api/v1/cars?brand=Toyota").await;
    assert_eq!(response.status(), StatusCode::OK);
    let cars = body_json(response).await;
    let cars = cars.as_array().unwrap();
    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0]["name"], "Camry");
    assert_eq!(cars[1]["name"], "Corolla");
    assert!(cars.iter().all(|car| car.get("engine").is_none()));

    let cars = body_json(
        get(
            build_test_app(db),
            "/api/v1/cars?brand=Toyota&isEngine=true",
        )
        .await,
    )
    .await;
    let cars = cars.as_array().unwrap();
    assert_eq!(cars.len(), 2);
    assert!(cars.iter().all(|car| car["engine"] == engine));
}

#[tokio::test]
async fn list_unknown_brand_returns_empty_array() {
    let db = Arc::new(MemoryDb::default());
    let response = get(build_test_app(db), "/api/v1/cars?brand=Nobody").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn engine_flag_other_than_true_lists_without_engines() {
    let db = Arc::new(MemoryDb::default());
    let engine = create_engine(&db, 1500).await;
    create_car(&db, "Corolla", "Toyota", &engine).await;

    for flag in ["", "1", "TRUE", "false", "maybe"] {
        let uri = format!("/api/v1/cars?brand=Toyota&isEngine={flag}");
        let response = get(build_test_app(db.clone()), &uri).await;

        assert_eq!(response.status(), StatusCode::OK, "isEngine={flag}");
        let cars = body_json(response).await;
        let cars = cars.as_array().unwrap();
        assert_eq!(cars.len(), 1, "isEngine={flag}");
        assert!(cars[0].get("engine").is_none(), "isEngine={flag}");
    }
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_fields_and_engine() {
    let db = Arc::new(MemoryDb::default());
    let first = create_engine(&db, 1500).await;
    let second = create_engine(&db, 3000).await;
    let car = create_car(&db, "Corolla", "Toyota", &first).await;
    let id = car["id"].as_str().unwrap();

    let mut body = car_body("Corolla Hybrid", "Toyota", &second);
    body["fuel_type"] = json!("Hybrid");
    let response = put_json(build_test_app(db), &format!("/api/v1/cars/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Corolla Hybrid");
    assert_eq!(updated["fuel_type"], "Hybrid");
    assert_eq!(updated["engine"], second);
    assert_eq!(updated["created_at"], car["created_at"]);
}

#[tokio::test]
async fn update_unknown_car_returns_404() {
    let db = Arc::new(MemoryDb::default());
    let engine = create_engine(&db, 1500).await;
    let id = uuid::Uuid::new_v4();

    let response = put_json(
        build_test_app(db),
        &format!("/api/v1/cars/{id}"),
        car_body("Corolla", "Toyota", &engine),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_car_and_removes_it() {
    let db = Arc::new(MemoryDb::default());
    let engine = create_engine(&db, 1500).await;
    let car = create_car(&db, "Corolla", "Toyota", &engine).await;
    let id = car["id"].as_str().unwrap();

    let response = delete(build_test_app(db.clone()), &format!("/api/v1/cars/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id);

    let response = get(build_test_app(db), &format!("/api/v1/cars/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_malformed_id_returns_400() {
    let db = Arc::new(MemoryDb::default());
    let response = delete(build_test_app(db), "/api/v1/cars/42").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ARGUMENT");
}
