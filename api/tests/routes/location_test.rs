#[cfg(test)]
mod tests {
    use crate::helpers::{create_student_with_id, get_json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn location_request(student_id: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/location")
            .header("student-id", student_id)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_location_update_is_cached() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 12, "Wandile", "Dube").await;

        let response = app
            .oneshot(location_request(
                "12",
                json!({"latitude": -26.2, "longitude": 28.04, "address": "Braamfontein"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Location updated");
        assert_eq!(json["data"]["student_id"], 12);

        let cached = state.location().snapshot().await.unwrap();
        assert_eq!(cached.student_id, 12);
        assert_eq!(cached.address.as_deref(), Some("Braamfontein"));
    }

    #[tokio::test]
    async fn test_location_rejections() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 13, "Xolani", "Hadebe").await;

        let response = app
            .clone()
            .oneshot(location_request("99", json!({"latitude": 1.0, "longitude": 1.0})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(location_request("13", json!({"latitude": 1.0})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert!(state.location().snapshot().await.is_none());
    }
}
