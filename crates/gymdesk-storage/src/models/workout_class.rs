use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workout class entity run by one trainer.
///
/// # Fields
///
/// * `id` - Auto-increment primary key
/// * `class_type` - Class name/type (e.g. "Yoga")
/// * `description` - Human-readable description
/// * `trainer_id` - Owning `users` row; by convention a row with role Trainer
/// * `created_at` - Record creation timestamp
/// * `updated_at` - Record last modification timestamp
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutClass {
    /// Auto-increment primary key
    pub id: i64,

    /// Class name/type
    pub class_type: String,

    /// Class description
    pub description: String,

    /// Owning users row
    pub trainer_id: i64,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Record last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl WorkoutClass {
    /// Build a workout class record ready for insertion.
    pub fn new(
        class_type: impl Into<String>,
        description: impl Into<String>,
        trainer_id: i64,
    ) -> Self {
        Self {
            id: 0,
            class_type: class_type.into(),
            description: description.into(),
            trainer_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
