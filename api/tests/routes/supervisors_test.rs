#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, make_test_app};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send_json(app: &Router, method: &str, uri: &str, payload: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, get_json_body(response).await)
    }

    fn supervisor(email: &str) -> Value {
        json!({
            "first_name": "Naledi",
            "last_name": "Sithole",
            "email_address": email,
            "contact_number": "0821234567"
        })
    }

    /// Test Case: Email addresses are unique, but a supervisor may keep their own
    #[tokio::test]
    async fn test_supervisor_email_uniqueness() {
        let (app, _) = make_test_app().await;

        let (status, json) =
            send_json(&app, "POST", "/api/supervisors", supervisor("naledi@example.com")).await;
        assert_eq!(status, StatusCode::CREATED);
        let first = json["data"]["id"].as_i64().unwrap();

        let (status, json) =
            send_json(&app, "POST", "/api/supervisors", supervisor("NALEDI@example.com")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Email address already in use");

        let (status, json) =
            send_json(&app, "POST", "/api/supervisors", supervisor("thabo@example.com")).await;
        assert_eq!(status, StatusCode::CREATED);
        let second = json["data"]["id"].as_i64().unwrap();

        let (status, _) = send_json(
            &app,
            "PUT",
            &format!("/api/supervisors/{first}"),
            supervisor("naledi@example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send_json(
            &app,
            "PUT",
            &format!("/api/supervisors/{second}"),
            supervisor("naledi@example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_supervisor_invalid_email_and_missing_row() {
        let (app, _) = make_test_app().await;

        let (status, _) = send_json(&app, "POST", "/api/supervisors", supervisor("not-an-email")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = send_json(
            &app,
            "PUT",
            "/api/supervisors/77",
            supervisor("someone@example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Supervisor not found");

        let req = Request::builder()
            .method("DELETE")
            .uri("/api/supervisors/77")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
