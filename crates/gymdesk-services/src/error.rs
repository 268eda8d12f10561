use thiserror::Error;

/// Service-level error type.
///
/// Storage and password failures pass through unchanged; the variants added
/// here are the domain-validation failures the service layer itself detects
/// before any data access happens.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Underlying storage failure
    #[error(transparent)]
    Storage(#[from] gymdesk_storage::StorageError),

    /// Password hashing or verification failure
    #[error(transparent)]
    Password(#[from] gymdesk_core::Error),

    /// Role string did not normalize to Admin/Trainer/Member
    #[error("Invalid role '{0}' (expected Admin, Trainer, or Member)")]
    InvalidRole(String),

    /// Purchase referenced a catalog plan that does not exist
    #[error("Membership plan not found: {0}")]
    PlanNotFound(i64),
}

/// Specialized result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
