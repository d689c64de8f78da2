use chrono::NaiveDate;
use dashmap::DashMap;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::evaluator::evaluate;
use super::gamification_model::{Evaluation, GamificationRecord, GoalFlags, GoalProgress, Rank};
use super::gamification_traits::{GamificationRepositoryTrait, GamificationServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::NutritionGoalsRepositoryTrait;
use crate::nutrition::DailyTotalsProviderTrait;
use crate::utils::time_utils::utc_today;

/// Orchestrates the read-evaluate-write cycle around the goal engine.
///
/// Two concurrent evaluations for the same user racing an unserialized
/// read-modify-write can lose an award, so the service keeps one async mutex
/// per user and holds it across the whole load/evaluate/persist sequence.
/// Evaluations for different users share no state and run in parallel.
pub struct GamificationService {
    record_repository: Arc<dyn GamificationRepositoryTrait>,
    goals_repository: Arc<dyn NutritionGoalsRepositoryTrait>,
    totals_provider: Arc<dyn DailyTotalsProviderTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    user_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl GamificationService {
    /// Creates a new GamificationService instance
    pub fn new(
        record_repository: Arc<dyn GamificationRepositoryTrait>,
        goals_repository: Arc<dyn NutritionGoalsRepositoryTrait>,
        totals_provider: Arc<dyn DailyTotalsProviderTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            record_repository,
            goals_repository,
            totals_provider,
            event_sink,
            user_locks: DashMap::new(),
        }
    }

    fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.user_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[async_trait::async_trait]
impl GamificationServiceTrait for GamificationService {
    async fn check_daily_goals(&self, user_id: &str) -> Result<Evaluation> {
        self.evaluate_for_date(user_id, utc_today()).await
    }

    async fn evaluate_for_date(&self, user_id: &str, today: NaiveDate) -> Result<Evaluation> {
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;

        let stored = self.record_repository.get_record(user_id).await?;
        let record = stored.clone().unwrap_or_default();
        let targets = self
            .goals_repository
            .get_goals(user_id)
            .await?
            .unwrap_or_default();
        let totals = self.totals_provider.daily_totals(user_id, today).await?;

        let evaluation = evaluate(&record, &targets, &totals, today)?;

        // Conditional write: an unchanged record is not persisted. Repeat
        // checks within a day are the common case.
        if stored.as_ref() != Some(&evaluation.record) {
            self.record_repository
                .save_record(user_id, &evaluation.record)
                .await?;
            debug!(
                "Persisted gamification record for user {}: {} award(s), streak {}",
                user_id,
                evaluation.events.len(),
                evaluation.record.daily_streak
            );

            if !evaluation.events.is_empty() {
                self.event_sink.emit(DomainEvent::awards_granted(
                    user_id.to_string(),
                    evaluation.events.clone(),
                ));
            }
            if record.current_rank != evaluation.record.current_rank {
                self.event_sink.emit(DomainEvent::rank_changed(
                    user_id.to_string(),
                    record.current_rank,
                    evaluation.record.current_rank,
                ));
            }
        }

        Ok(evaluation)
    }

    async fn get_progress(&self, user_id: &str) -> Result<GoalProgress> {
        let date = utc_today();
        let record = self
            .record_repository
            .get_record(user_id)
            .await?
            .unwrap_or_default();
        let targets = self
            .goals_repository
            .get_goals(user_id)
            .await?
            .unwrap_or_default();
        let totals = self.totals_provider.daily_totals(user_id, date).await?;
        let satisfied = GoalFlags::satisfied(&targets, &totals);

        Ok(GoalProgress {
            date,
            record,
            targets,
            totals,
            satisfied,
        })
    }

    async fn override_record(
        &self,
        user_id: &str,
        mut record: GamificationRecord,
    ) -> Result<GamificationRecord> {
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;

        // The rank invariant holds even across the engine bypass.
        record.current_rank = Rank::for_streak(record.daily_streak);

        warn!(
            "Admin override of gamification record for user {}: streak {}, points {}",
            user_id, record.daily_streak, record.point_total
        );
        let saved = self.record_repository.save_record(user_id, &record).await?;
        self.event_sink
            .emit(DomainEvent::record_overridden(user_id.to_string()));
        Ok(saved)
    }
}
