//! Storage layer for the gymdesk management system.
//!
//! This crate provides SQLite-backed persistence for users (with their
//! Admin/Trainer/Member role views), memberships, the membership plan
//! catalog, workout classes, and gym merchandise.
//!
//! # Architecture
//!
//! The storage layer uses a repository pattern with the following components:
//!
//! - [`Database`] - Connection pool manager with automatic migrations
//! - [`UserRepository`], [`RoleUserRepository`], [`MembershipRepository`],
//!   [`PlanRepository`], [`WorkoutClassRepository`], [`MerchRepository`] -
//!   Data access traits
//! - [`transaction`] - Transaction-aware operations for atomic multi-step
//!   flows such as plan purchase
//!
//! # Core Concepts
//!
//! ## Shared-Table Role Discrimination
//!
//! Admin, Trainer and Member are not separate tables or types: they are
//! `users` rows distinguished by the [`Role`](models::Role) tag. Role-scoped
//! repositories add an `AND role = ?` filter to every query, so each view
//! only ever sees its own rows.
//!
//! ## Typed Errors Instead of Sentinels
//!
//! Lookups return `Ok(None)` for absence. Failures are
//! [`StorageError`] values with distinct causes (not found, conflict,
//! referential integrity, database), so callers never have to guess what a
//! `false` meant.
//!
//! # Examples
//!
//! ```no_run
//! use gymdesk_storage::{Database, DatabaseConfig};
//! use gymdesk_storage::models::{Role, User};
//! use gymdesk_storage::repositories::{SqliteUserRepository, UserRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatabaseConfig::new("gymdesk.db")
//!     .max_connections(10)
//!     .auto_migrate(true);
//!
//! let db = Database::new(config).await?;
//! let users = SqliteUserRepository::new(db.pool().clone());
//!
//! let user = User::new(
//!     "alice",
//!     "alice@example.com",
//!     "555-0100",
//!     "1 Gym Way",
//!     Role::Member,
//!     "$2b$12$...",
//! );
//! let id = users.create(&user).await?;
//!
//! if let Some(found) = users.find_by_id(id).await? {
//!     println!("Created {} with role {}", found.username, found.role);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Security Considerations
//!
//! All queries use parameterized statements via SQLx; no query text is ever
//! assembled from user input. Password hashes are opaque strings here -
//! hashing and verification live in `gymdesk-core::password`.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod transaction;

pub use connection::{Database, DatabaseConfig};
pub use error::{StorageError, StorageResult};
pub use models::{GymMerch, Membership, MembershipPlan, Role, User, WorkoutClass};
pub use repositories::{
    MembershipRepository, MerchRepository, PlanRepository, RoleUserRepository,
    SqliteMembershipRepository, SqliteMerchRepository, SqlitePlanRepository,
    SqliteRoleUserRepository, SqliteUserRepository, SqliteWorkoutClassRepository, UserRepository,
    WorkoutClassRepository,
};
