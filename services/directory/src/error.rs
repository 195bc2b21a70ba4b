use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Directory service error variants.
///
/// Client-facing bodies only ever carry `kind` and the fixed `message` below;
/// `Internal` details go to the log.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("restaurant not found")]
    RestaurantNotFound,
    #[error("flagship dish not found")]
    FlagshipDishNotFound,
    #[error("avis not found")]
    AvisNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("type user not found")]
    TypeUserNotFound,
    #[error("restaurant already exists")]
    RestaurantAlreadyExists,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("star rating must be between 0 and 5")]
    InvalidStarNb,
    #[error("malformed request body")]
    MalformedBody,
    #[error("invalid id")]
    InvalidId,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl DirectoryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RestaurantNotFound => "RESTAURANT_NOT_FOUND",
            Self::FlagshipDishNotFound => "FLAGSHIP_DISH_NOT_FOUND",
            Self::AvisNotFound => "AVIS_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TypeUserNotFound => "TYPE_USER_NOT_FOUND",
            Self::RestaurantAlreadyExists => "RESTAURANT_ALREADY_EXISTS",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidStarNb => "INVALID_STAR_NB",
            Self::MalformedBody => "MALFORMED_BODY",
            Self::InvalidId => "INVALID_ID",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::RestaurantNotFound
            | Self::FlagshipDishNotFound
            | Self::AvisNotFound
            | Self::UserNotFound
            | Self::TypeUserNotFound => StatusCode::NOT_FOUND,
            Self::RestaurantAlreadyExists
            | Self::InvalidStarNb
            | Self::MalformedBody
            | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for DirectoryError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        Self::MalformedBody
    }
}

impl From<PathRejection> for DirectoryError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected path parameter");
        Self::InvalidId
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status();
        // TraceLayer records every status; only 500s are logged with detail here.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
