//! Service layer for the gymdesk management system.
//!
//! Thin pass-through services over the storage repositories, adding
//! structured logging and the handful of derived computations the console
//! needs: revenue and expense sums, the merchandise stock report, and the
//! transactional plan purchase flow. Registration and login live here too,
//! so the console never touches password hashing directly.

pub mod classes;
pub mod error;
pub mod memberships;
pub mod merch;
pub mod users;

pub use classes::WorkoutClassService;
pub use error::{ServiceError, ServiceResult};
pub use memberships::MembershipService;
pub use merch::{MerchService, StockLine};
pub use users::{Registration, UserService};
