#[cfg(test)]
mod tests {
    use crate::helpers::{create_student, get_json_body, make_test_app};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(req.body(body).unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn test_employer_crud_cycle() {
        let (app, state) = make_test_app().await;
        let trainee = create_student(state.db(), "Nandi").await;

        let response = send(
            &app,
            "POST",
            "/api/employers",
            Some(json!({
                "name": "Acme Logistics",
                "student_id": trainee.id,
                "address_line1": "1 Main Road",
                "latitude": -26.1,
                "longitude": 28.05
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = get_json_body(response).await;
        let id = json["data"]["id"].as_i64().unwrap();
        assert_eq!(json["data"]["student_id"], trainee.id);

        let response = send(
            &app,
            "PUT",
            &format!("/api/employers/{id}"),
            Some(json!({"name": "Acme Freight"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Acme Freight");
        assert!(json["data"]["student_id"].is_null());

        let response = send(&app, "GET", "/api/employers", None).await;
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        let response = send(&app, "DELETE", &format!("/api/employers/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", &format!("/api/employers/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Employer not found");
    }

    #[tokio::test]
    async fn test_employer_requires_name() {
        let (app, _) = make_test_app().await;
        let response = send(&app, "POST", "/api/employers", Some(json!({"name": ""}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "DELETE", "/api/employers/12", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
