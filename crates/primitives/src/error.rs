use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2;
use http::StatusCode;
use serde_json::{json, Value};
use std::fmt;

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidFormat,
    InvalidToken(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingHeader => write!(f, "Authorization header required"),
            AuthError::InvalidFormat => write!(f, "Invalid Authorization format"),
            AuthError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
        }
    }
}

/// Business-rule rejections. These carry enough structure for the client to
/// render an informative message (shortfall, limit, current status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessError {
    InsufficientBalance { balance: i64, required: i64 },
    LimitExceeded { annual_income: i64, max_percentage: i16, max_amount: i64, requested: i64 },
    DuplicateRequest,
    SelfInvestment,
    AlreadyReviewed { status: String },
    ProjectNotOpen,
    AccountSuspended,
}

impl BusinessError {
    pub fn details(&self) -> Option<Value> {
        match self {
            BusinessError::InsufficientBalance { balance, required } => Some(json!({
                "balance": balance,
                "required": required,
                "shortfall": required - balance,
            })),
            BusinessError::LimitExceeded {
                annual_income,
                max_percentage,
                max_amount,
                requested,
            } => Some(json!({
                "annual_income": annual_income,
                "max_percentage": max_percentage,
                "max_amount": max_amount,
                "requested": requested,
            })),
            BusinessError::AlreadyReviewed { status } => Some(json!({ "status": status })),
            _ => None,
        }
    }
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::InsufficientBalance { balance, required } => write!(
                f,
                "Insufficient wallet balance: have {}, need {}",
                balance, required
            ),
            BusinessError::LimitExceeded { max_amount, requested, .. } => write!(
                f,
                "Investment limit exceeded: requested {}, maximum {}",
                requested, max_amount
            ),
            BusinessError::DuplicateRequest => {
                write!(f, "An investment request for this project already exists")
            }
            BusinessError::SelfInvestment => {
                write!(f, "Borrowers cannot invest in their own project")
            }
            BusinessError::AlreadyReviewed { status } => {
                write!(f, "Request has already been reviewed ({})", status)
            }
            BusinessError::ProjectNotOpen => write!(f, "Project is not open for funding"),
            BusinessError::AccountSuspended => write!(f, "Account is suspended"),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Auth(AuthError),
    Forbidden(String),
    Validation(validator::ValidationErrors),
    NotFound(String),
    Business(BusinessError),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::NotFound(what) => write!(f, "{} not found", what),
            ApiError::Business(e) => write!(f, "{}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<BusinessError> for ApiError {
    fn from(err: BusinessError) -> Self {
        ApiError::Business(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Database(diesel::result::Error::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Database(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            )) => StatusCode::CONFLICT,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DatabaseConnection(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Business(e) => match e {
                BusinessError::DuplicateRequest | BusinessError::AlreadyReviewed { .. } => {
                    StatusCode::CONFLICT
                }
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({ "error": self.to_string() });
        if let ApiError::Business(ref e) = self {
            if let Some(details) = e.details() {
                body["details"] = details;
            }
        }
        (status, Json(body)).into_response()
    }
}
