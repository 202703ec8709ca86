#[cfg(test)]
mod tests {
    use crate::helpers::{create_student_with_id, get_json_body, make_test_app};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use chrono::{DateTime, Duration, Utc};
    use db::models::otp;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    async fn post(app: &Router, uri: &str, headers: &[(&str, &str)], body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method("POST").uri(uri);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let body = match body {
            Some(v) => {
                req = req.header(CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = response.status();
        (status, get_json_body(response).await)
    }

    /// Test Case: OTP for student 42 is 4 digits, lives 30 minutes and is single use
    #[tokio::test]
    #[serial]
    async fn test_otp_lifecycle_for_student_42() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 42, "Amahle", "Zulu").await;

        let before = Utc::now();
        let (status, json) = post(&app, "/api/generate-otp", &[("student-id", "42")], None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["student_id"], 42);

        let code = json["data"]["otp_code"].as_str().unwrap().to_string();
        assert_eq!(code.len(), 4);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let expires: DateTime<Utc> = json["data"]["expires_at"].as_str().unwrap().parse().unwrap();
        let ttl = expires - before;
        assert!(ttl >= Duration::minutes(30) - Duration::seconds(1));
        assert!(ttl <= Duration::minutes(30) + Duration::seconds(5));

        let (status, json) = post(&app, "/api/validate-otp", &[("otp-code", code.as_str())], None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Authentication successful");
        assert_eq!(json["data"]["student_id"], 42);

        let (status, json) = post(&app, "/api/validate-otp", &[("otp-code", code.as_str())], None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "OTP has already been used");
    }

    /// Test Case: Student id and OTP code may travel in the JSON body
    #[tokio::test]
    #[serial]
    async fn test_body_fallbacks() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 5, "Bongani", "Ndlovu").await;

        let (status, json) =
            post(&app, "/api/generate-otp", &[], Some(json!({"student_id": 5}))).await;
        assert_eq!(status, StatusCode::OK);
        let code = json["data"]["otp_code"].as_str().unwrap().to_string();

        let (status, json) =
            post(&app, "/api/validate-otp", &[], Some(json!({"otp_code": code}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["student_id"], 5);
    }

    /// Test Case: Generating again invalidates the previous code
    #[tokio::test]
    #[serial]
    async fn test_regenerate_supersedes_previous_code() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 9, "Chipo", "Banda").await;

        let mut codes = Vec::new();
        for _ in 0..2 {
            let (_, json) = post(&app, "/api/generate-otp", &[("student-id", "9")], None).await;
            codes.push(json["data"]["otp_code"].as_str().unwrap().to_string());
        }

        // Identical draws are possible with 4 digits; the newest row then wins.
        if codes[0] != codes[1] {
            let (status, json) =
                post(&app, "/api/validate-otp", &[("otp-code", codes[0].as_str())], None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(json["message"], "OTP has already been used");
        }

        let (status, _) = post(&app, "/api/validate-otp", &[("otp-code", codes[1].as_str())], None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_for_unknown_student() {
        let (app, _) = make_test_app().await;
        let (status, json) =
            post(&app, "/api/generate-otp", &[("student-id", "777")], None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Student not found");
    }

    #[tokio::test]
    async fn test_generate_without_student() {
        let (app, _) = make_test_app().await;

        let (status, _) = post(&app, "/api/generate-otp", &[], None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = post(&app, "/api/generate-otp", &[("student-id", "abc")], None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid student-id header");
    }

    #[tokio::test]
    #[serial]
    async fn test_validate_unknown_and_missing_code() {
        let (app, _) = make_test_app().await;

        let (status, json) = post(&app, "/api/validate-otp", &[("otp-code", "0000")], None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Invalid OTP");

        let (status, _) = post(&app, "/api/validate-otp", &[], None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    /// Test Case: An expired code reports expiry on every attempt
    #[tokio::test]
    #[serial]
    async fn test_expired_code() {
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 11, "Dineo", "Mahlangu").await;

        let (_, json) = post(&app, "/api/generate-otp", &[("student-id", "11")], None).await;
        let code = json["data"]["otp_code"].as_str().unwrap().to_string();

        let row = otp::Entity::find().one(state.db()).await.unwrap().unwrap();
        let mut active = row.into_active_model();
        active.expires_at = Set(Utc::now() - Duration::minutes(1));
        active.update(state.db()).await.unwrap();

        for _ in 0..2 {
            let (status, json) =
                post(&app, "/api/validate-otp", &[("otp-code", code.as_str())], None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(json["message"], "OTP has expired");
        }
    }

    /// Test Case: Pairing issues a secret that verify-device-auth accepts
    #[tokio::test]
    #[serial]
    async fn test_device_pairing_round_trip() {
        AppConfig::set_device_pairing(true);
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 21, "Esethu", "Mthembu").await;

        let (_, json) = post(&app, "/api/generate-otp", &[("student-id", "21")], None).await;
        let code = json["data"]["otp_code"].as_str().unwrap().to_string();

        let (status, json) = post(&app, "/api/validate-otp", &[("otp-code", code.as_str())], None).await;
        assert_eq!(status, StatusCode::OK);
        let secret = json["data"]["secret_code"].as_str().unwrap().to_string();
        assert_eq!(secret.len(), 64);

        let (status, json) = post(
            &app,
            "/api/verify-device-auth",
            &[],
            Some(json!({"student_id": 21, "secret_code": secret})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["authorized"], true);

        let (status, json) = post(
            &app,
            "/api/verify-device-auth",
            &[],
            Some(json!({"student_id": 21, "secret_code": "deadbeef"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Device not authorized");
    }

    #[tokio::test]
    #[serial]
    async fn test_pairing_disabled_omits_secret() {
        AppConfig::set_device_pairing(false);
        let (app, state) = make_test_app().await;
        create_student_with_id(state.db(), 22, "Fikile", "Shabalala").await;

        let (_, json) = post(&app, "/api/generate-otp", &[("student-id", "22")], None).await;
        let code = json["data"]["otp_code"].as_str().unwrap().to_string();
        let (status, json) = post(&app, "/api/validate-otp", &[("otp-code", code.as_str())], None).await;
        AppConfig::set_device_pairing(true);

        assert_eq!(status, StatusCode::OK);
        assert!(json["data"].get("secret_code").is_none());
    }

    #[tokio::test]
    async fn test_verify_device_rejects_bad_body() {
        let (app, _) = make_test_app().await;
        let (status, json) = post(
            &app,
            "/api/verify-device-auth",
            &[],
            Some(json!({"student_id": 0, "secret_code": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }
}
