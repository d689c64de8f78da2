use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::NutritionGoals;

/// Trait for nutrition-goals repository operations.
///
/// Implemented by the embedding application's persistence layer. Targets are
/// owned by the user's profile; a user without stored targets is not an
/// error (callers fall back to `NutritionGoals::default()`).
#[async_trait]
pub trait NutritionGoalsRepositoryTrait: Send + Sync {
    async fn get_goals(&self, user_id: &str) -> Result<Option<NutritionGoals>>;
    async fn save_goals(&self, user_id: &str, goals: &NutritionGoals) -> Result<NutritionGoals>;
}

/// Trait for nutrition-goals service operations.
#[async_trait]
pub trait NutritionGoalsServiceTrait: Send + Sync {
    /// Returns the user's targets, or the app defaults if none are stored.
    async fn get_goals(&self, user_id: &str) -> Result<NutritionGoals>;

    /// Validates and stores new targets for the user.
    async fn update_goals(&self, user_id: &str, goals: NutritionGoals) -> Result<NutritionGoals>;
}
