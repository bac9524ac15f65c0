use crate::db::dao::DaoLayerError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) | Self::Internal(message) => {
                message.as_str()
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// The operation a handler was performing when the data layer failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOp {
    Create,
    List,
    Find,
    Update,
    Delete,
    Remove,
}

impl CrudOp {
    /// Create failures surface as 500 and every other operation as 404,
    /// whatever the underlying cause. Clients rely on this mapping.
    pub fn map_error(self, err: DaoLayerError) -> AppError {
        let message = err.to_string();
        match self {
            CrudOp::Create => AppError::internal(message),
            CrudOp::List | CrudOp::Find | CrudOp::Update | CrudOp::Delete | CrudOp::Remove => {
                AppError::not_found(message)
            }
        }
    }
}
