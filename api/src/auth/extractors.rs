use axum::{
    Json,
    body::Bytes,
    extract::{
        FromRequest, FromRequestParts, OptionalFromRequestParts, Path, Query, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderMap, request::Parts},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

pub const STUDENT_ID_HEADER: &str = "student-id";
pub const OTP_CODE_HEADER: &str = "otp-code";

/// The subject of the request, taken from the `student-id` header.
///
/// Missing, non-numeric and non-positive values are rejected with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(pub i64);

/// Parses `student-id`. `Ok(None)` when the header is absent.
pub fn student_id_from_headers(headers: &HeaderMap) -> Result<Option<i64>, ApiError> {
    let Some(raw) = headers.get(STUDENT_ID_HEADER) else {
        return Ok(None);
    };
    raw.to_str()
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .map(Some)
        .ok_or_else(|| ApiError::Validation("Invalid student-id header".into()))
}

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        student_id_from_headers(&parts.headers)?
            .map(StudentId)
            .ok_or_else(|| ApiError::Validation("Missing student-id header".into()))
    }
}

impl<S> OptionalFromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(student_id_from_headers(&parts.headers)?.map(StudentId))
    }
}

/// The `otp-code` header, trimmed. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpCodeHeader(pub Option<String>);

impl<S> FromRequestParts<S> for OtpCodeHeader
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let code = parts
            .headers
            .get(OTP_CODE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(OtpCodeHeader(code))
    }
}

/// JSON body that also passes its `validator` rules.
///
/// Malformed JSON and failed rules both surface as [`ApiError::Validation`].
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Validation(rejection.body_text()))?;
        value
            .validate()
            .map_err(|e| ApiError::Validation(common::format_validation_errors(&e)))?;
        Ok(ValidJson(value))
    }
}

/// Path parameters. A segment that does not parse is an [`ApiError::Validation`].
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = <Path<T> as FromRequestParts<S>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| ApiError::Validation(rejection.body_text()))?;
        Ok(PathParam(value))
    }
}

/// Query string parameters, rejected the same way as [`PathParam`].
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| ApiError::Validation(rejection.body_text()))?;
        Ok(QueryParams(value))
    }
}

/// Decodes an optional JSON body: an empty body is `None`, anything else must parse.
pub fn optional_json<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, ApiError> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ApiError::Validation(format!("Invalid JSON body: {e}")))
}
