#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Test Case: Create, read, update and delete a student
    #[tokio::test]
    async fn test_student_crud_cycle() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({
                "first_name": "Mpho",
                "last_name": "Radebe",
                "dob": "2003-07-21 00:00:00",
                "gender": "M",
                "city": "Soweto",
                "check_in_time": "07:30",
                "check_out_time": "15:30:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Student created successfully");
        let id = json["data"]["id"].as_i64().unwrap();
        assert_eq!(json["data"]["dob"], "2003-07-21");
        assert_eq!(json["data"]["check_in_time"], "07:30:00");
        assert_eq!(json["data"]["home_lat"], 0.0);

        let (status, json) = send(&app, "GET", &format!("/api/students/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["first_name"], "Mpho");

        let (status, json) = send(
            &app,
            "PUT",
            &format!("/api/students/{id}"),
            Some(json!({"first_name": "Mpho", "last_name": "Sibiya"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["last_name"], "Sibiya");
        assert!(json["data"]["dob"].is_null());
        assert_eq!(json["data"]["city"], "");

        let (status, json) = send(&app, "GET", "/api/students", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        let (status, _) = send(&app, "DELETE", &format!("/api/students/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, json) = send(&app, "DELETE", &format!("/api/students/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Student not found");

        let (status, _) = send(&app, "GET", &format!("/api/students/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_student_validation() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({"first_name": "", "last_name": "Radebe"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);

        let (status, _) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({"first_name": "A", "last_name": "B", "dob": "21/07/2003"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_student() {
        let (app, _) = make_test_app().await;
        let (status, _) = send(
            &app,
            "PUT",
            "/api/students/404",
            Some(json!({"first_name": "A", "last_name": "B"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// Test Case: A non-numeric id is rejected with the JSON error envelope
    #[tokio::test]
    async fn test_non_numeric_id_is_json_400() {
        let (app, _) = make_test_app().await;

        for method in ["GET", "DELETE"] {
            let (status, json) = send(&app, method, "/api/students/abc", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["success"], false);
            assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
        }
    }
}
