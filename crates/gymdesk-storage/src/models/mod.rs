pub mod membership;
pub mod merch;
pub mod plan;
pub mod user;
pub mod workout_class;

pub use membership::Membership;
pub use merch::GymMerch;
pub use plan::MembershipPlan;
pub use user::{Role, User};
pub use workout_class::WorkoutClass;
