use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body sent to the browser for every failed page.
///
/// The same text covers store and template failures; details only go to
/// the server log.
pub const FAILURE_MESSAGE: &str = "An error occurred while executing the database queries.";

/// Error type for every page handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Render error: {0}")]
    Render(#[from] tera::Error),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error (log field only).
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.error_code(), error = ?self, "page request failed");
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            FAILURE_MESSAGE,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn every_kind_maps_to_internal_server_error() {
        let db = AppError::from(DbErr::Custom("connection refused".into()));
        let render = AppError::from(tera::Error::msg("template blew up"));
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(render.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.error_code(), "DATABASE_ERROR");
        assert_eq!(render.error_code(), "RENDER_ERROR");
    }

    #[test]
    fn response_hides_error_detail() {
        let res = AppError::from(DbErr::Custom("secret dsn".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
