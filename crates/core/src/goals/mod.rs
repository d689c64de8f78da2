//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

// Re-export the public interface
pub use goals_model::{GoalKind, NutritionGoals};
pub use goals_service::GoalService;
pub use goals_traits::{NutritionGoalsRepositoryTrait, NutritionGoalsServiceTrait};
