pub mod membership;
pub mod merch;
pub mod plan;
pub mod user;
pub mod workout_class;

pub use membership::{MembershipRepository, SqliteMembershipRepository};
pub use merch::{MerchRepository, SqliteMerchRepository};
pub use plan::{PlanRepository, SqlitePlanRepository};
pub use user::{
    RoleUserRepository, SqliteRoleUserRepository, SqliteUserRepository, UserRepository,
};
pub use workout_class::{SqliteWorkoutClassRepository, WorkoutClassRepository};
