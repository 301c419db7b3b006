use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use shared::domain::response::ErrorResponse;
use validator::Validate;

/// JSON extractor that runs `validator` rules after deserializing. Both a
/// malformed body and a failed validation reject with 400.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: rejection.body_text(),
                }),
            )
                .into_response()
        })?;

        if let Err(errors) = value.validate() {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: format!("Validation error: {errors}"),
                }),
            )
                .into_response());
        }

        Ok(SimpleValidatedJson(value))
    }
}
