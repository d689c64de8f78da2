use log::debug;
use std::sync::Arc;

use super::goals_model::NutritionGoals;
use super::goals_traits::{NutritionGoalsRepositoryTrait, NutritionGoalsServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for managing a user's daily nutrition targets.
pub struct GoalService {
    repository: Arc<dyn NutritionGoalsRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    /// Creates a new GoalService instance
    pub fn new(
        repository: Arc<dyn NutritionGoalsRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl NutritionGoalsServiceTrait for GoalService {
    async fn get_goals(&self, user_id: &str) -> Result<NutritionGoals> {
        let goals = self.repository.get_goals(user_id).await?;
        Ok(goals.unwrap_or_default())
    }

    async fn update_goals(&self, user_id: &str, goals: NutritionGoals) -> Result<NutritionGoals> {
        goals.validate()?;
        debug!("Updating nutrition goals for user {}", user_id);

        let saved = self.repository.save_goals(user_id, &goals).await?;
        self.event_sink
            .emit(DomainEvent::goals_updated(user_id.to_string()));
        Ok(saved)
    }
}
