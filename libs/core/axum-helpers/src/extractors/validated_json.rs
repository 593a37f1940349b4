//! JSON body extractor that runs `validator` rules before the handler.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the body as `T` and calls [`Validate::validate`] on it.
///
/// Malformed JSON, a missing `Content-Type`, unknown or mistyped fields, and
/// failed rules all reject with 400. Rule failures carry the per-field
/// `details` map.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateCar {
///     #[validate(length(min = 1, max = 100))]
///     model: String,
/// }
///
/// async fn create_car(ValidatedJson(input): ValidatedJson<CreateCar>) -> String {
///     input.model
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    struct Payload {
        #[validate(length(min = 1, max = 10))]
        model: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/cars",
            post(|ValidatedJson(p): ValidatedJson<Payload>| async move { p.model }),
        )
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("POST").uri("/cars");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let response = app()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let (status, _) = send(r#"{"model":"Gol"}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_failure_has_field_details() {
        let (status, body) = send(r#"{"model":""}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["model"].is_array());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = send(r#"{"model":"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "JSON_EXTRACTION");
    }

    #[tokio::test]
    async fn test_unknown_field_is_bad_request() {
        let (status, _) = send(r#"{"model":"Gol","wheels":4}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let (status, _) = send(r#"{"model":"Gol"}"#, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
