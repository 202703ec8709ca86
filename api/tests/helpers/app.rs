use api::app;
use axum::{Router, response::Response};
use chrono::NaiveTime;
use db::models::student;
use db::test_utils::{setup_file_test_db, setup_test_db};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use serde_json::Value;
use util::{state::AppState, ws::WebSocketManager};

/// The full router over a fresh in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db, WebSocketManager::new());
    (app(app_state.clone()), app_state)
}

/// The full router over a SQLite file in `dir` with a pool of `pool_size`
/// connections, so concurrent requests really contend for the database.
pub async fn make_pooled_test_app(dir: &std::path::Path, pool_size: u32) -> (Router, AppState) {
    let db = setup_file_test_db(&dir.join("attendance.db"), pool_size).await;
    let app_state = AppState::new(db, WebSocketManager::new());
    (app(app_state.clone()), app_state)
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Inserts a student with a fixed primary key.
pub async fn create_student_with_id(
    db: &DatabaseConnection,
    id: i64,
    first_name: &str,
    last_name: &str,
) -> student::Model {
    student::ActiveModel {
        id: Set(id),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        dob: Set(None),
        gender: Set("F".into()),
        address_line1: Set("12 Jacaranda Street".into()),
        address_line2: Set(String::new()),
        city: Set("Pretoria".into()),
        contact_number: Set("0821110000".into()),
        contact_number_guardian: Set("0822220000".into()),
        supervisor_id: Set(None),
        employer_id: Set(None),
        remarks: Set("Reliable".into()),
        home_lat: Set(-25.75),
        home_long: Set(28.23),
        check_in_time: Set(NaiveTime::from_hms_opt(8, 0, 0)),
        check_out_time: Set(NaiveTime::from_hms_opt(16, 0, 0)),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_student(db: &DatabaseConnection, first_name: &str) -> student::Model {
    student::Model::create(
        db,
        student::StudentFields {
            first_name: first_name.to_string(),
            last_name: "Trainee".into(),
            remarks: format!("{first_name} remarks"),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}
