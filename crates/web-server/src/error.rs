use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] database::DbError),
    #[error("{0}")]
    BadRequest(#[from] serde_json::Error),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// The underlying error text is echoed to the client unchanged.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (StatusCode::INTERNAL_SERVER_ERROR, db_err.to_string())
            }
            AppError::BadRequest(parse_err) => {
                tracing::warn!(error = %parse_err, "Rejected request body.");
                (StatusCode::BAD_REQUEST, parse_err.to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::CoreError;
    use database::DbError;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Should read body");
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    }

    #[tokio::test]
    async fn not_found_is_an_internal_error() {
        let response = AppError::from(DbError::NotFound(3)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "No album found with id 3");
    }

    #[tokio::test]
    async fn invalid_id_is_an_internal_error_with_message() {
        let err = DbError::from(CoreError::InvalidId("abc".to_string()));
        let response = AppError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn unparsable_body_is_a_bad_request_with_parser_message() {
        let parse_err = serde_json::from_str::<Value>("{\"Title\": ").unwrap_err();
        let expected = parse_err.to_string();
        let response = AppError::from(parse_err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], expected.as_str());
    }
}
