use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("{} not found", entity)))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let detail = Some(e.detail());
        match e {
            ServiceError::Model(ModelError::Validation(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", detail)
            }
            // duplicate names and still-referenced products both surface as 400
            ServiceError::Conflict(_) | ServiceError::Model(ModelError::Conflict(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "Conflict", detail)
            }
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", detail),
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                error!(err = %e, "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::not_found("Order"), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("Product already exists".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::Validation("price must be a finite number".into())), StatusCode::BAD_REQUEST),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn db_failures_hide_detail() {
        let e = JsonApiError::from(ServiceError::Db("connection refused".into()));
        assert!(e.detail.is_none());
    }
}
