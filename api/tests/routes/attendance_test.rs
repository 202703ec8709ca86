#[cfg(test)]
mod tests {
    use crate::helpers::{
        create_student_with_id, get_json_body, make_pooled_test_app, make_test_app,
    };
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use chrono::{DateTime, Utc};
    use db::models::attendance;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send_attendance(app: &Router, student_id: &str, payload: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/api/attendance")
            .header("student-id", student_id)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, get_json_body(response).await)
    }

    async fn list_attendance(app: &Router, student_id: &str, query: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/attendance{query}"))
            .header("student-id", student_id)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, get_json_body(response).await)
    }

    fn timestamp(value: &Value) -> DateTime<Utc> {
        value.as_str().unwrap().parse().unwrap()
    }

    /// Test Case: Check-in then check-out for student 7 lands on one record
    #[tokio::test]
    async fn test_check_in_then_out_for_student_7() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 7, "Gugu", "Mabaso").await;

        let (status, json) = send_attendance(
            &app,
            "7",
            json!({"check_in": true, "latitude": 1.0, "longitude": 2.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Checked in successfully");
        let record_id = json["data"]["id"].as_i64().unwrap();
        assert_eq!(json["data"]["check_in_lat"], 1.0);
        assert_eq!(json["data"]["check_in_long"], 2.0);
        assert!(json["data"]["check_out_at"].is_null());

        let (status, json) = send_attendance(
            &app,
            "7",
            json!({"check_in": false, "latitude": 1.1, "longitude": 2.1}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Checked out successfully");
        assert_eq!(json["data"]["id"].as_i64().unwrap(), record_id);
        assert_eq!(json["data"]["check_out_lat"], 1.1);
        assert_eq!(json["data"]["check_out_long"], 2.1);
        assert!(timestamp(&json["data"]["check_out_at"]) >= timestamp(&json["data"]["check_in_at"]));

        let rows = attendance::Entity::find().count(state.db()).await.unwrap();
        assert_eq!(rows, 1);
    }

    /// Test Case: Check-out for student 8 without a check-in is a 404 and writes nothing
    #[tokio::test]
    async fn test_check_out_without_check_in_for_student_8() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 8, "Hlengiwe", "Cele").await;

        let (status, json) = send_attendance(
            &app,
            "8",
            json!({"check_in": false, "latitude": 1.0, "longitude": 2.0}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "No check-in found for today");

        let rows = attendance::Entity::find().count(state.db()).await.unwrap();
        assert_eq!(rows, 0);
    }

    /// Test Case: Repeated check-ins keep one record per student per day
    #[tokio::test]
    async fn test_repeated_check_in_is_one_record() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 3, "Itumeleng", "Moloi").await;

        for lat in [1.0, 3.0, 5.0] {
            let (status, _) = send_attendance(
                &app,
                "3",
                json!({"check_in": true, "check_in_lat": lat, "check_in_long": 4.0}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, json) = list_attendance(&app, "3", "").await;
        assert_eq!(status, StatusCode::OK);
        let records = json["data"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["check_in_lat"], 5.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_check_ins_collapse() {
        let dir = tempfile::tempdir().unwrap();
        let (app, state) = make_pooled_test_app(dir.path(), 8).await;
        create_student_with_id(state.db(), 4, "Jabu", "Khoza").await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let app = app.clone();
            handles.push(tokio::spawn(async move {
                send_attendance(&app, "4", json!({"check_in": true, "latitude": 0.5, "longitude": 0.5}))
                    .await
                    .0
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), StatusCode::OK);
        }

        let rows = attendance::Entity::find().count(state.db()).await.unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_unknown_student_is_404() {
        let (app, _) = make_test_app().await;
        let (status, json) = send_attendance(
            &app,
            "999",
            json!({"check_in": true, "latitude": 1.0, "longitude": 2.0}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Student not found");
    }

    #[tokio::test]
    async fn test_bad_input_is_400() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 6, "Karabo", "Lekota").await;

        let (status, json) = send_attendance(
            &app,
            "0",
            json!({"check_in": true, "latitude": 1.0, "longitude": 2.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid student-id header");

        let (status, _) = send_attendance(
            &app,
            "6",
            json!({"check_in": true, "latitude": "north", "longitude": 2.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send_attendance(&app, "6", json!({"latitude": 1.0})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_coordinates_are_stored_as_reported() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 11, "Mpho", "Radebe").await;

        let (status, json) = send_attendance(
            &app,
            "11",
            json!({"check_in": true, "latitude": 91.5, "longitude": -200.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["check_in_lat"], 91.5);
        assert_eq!(json["data"]["check_in_long"], -200.0);
    }

    #[tokio::test]
    async fn test_list_range_validation() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 10, "Lindiwe", "Ngcobo").await;

        let (status, json) = list_attendance(&app, "10", "?from=2024-10-01&to=2024-10-31").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 0);

        let (status, _) = list_attendance(&app, "10", "?from=2024-10-31&to=2024-10-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = list_attendance(&app, "10", "?from=yesterday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
