use async_trait::async_trait;
use chrono::NaiveDate;

use super::gamification_model::{Evaluation, GamificationRecord, GoalProgress};
use crate::errors::Result;

/// Trait for gamification-record repository operations.
///
/// Implemented by the embedding application's persistence layer. The record
/// is keyed by user identity; a user without a stored record is not an
/// error (callers fall back to `GamificationRecord::default()`).
#[async_trait]
pub trait GamificationRepositoryTrait: Send + Sync {
    async fn get_record(&self, user_id: &str) -> Result<Option<GamificationRecord>>;
    async fn save_record(
        &self,
        user_id: &str,
        record: &GamificationRecord,
    ) -> Result<GamificationRecord>;
}

/// Trait for gamification service operations.
#[async_trait]
pub trait GamificationServiceTrait: Send + Sync {
    /// Evaluates the user's goals for the current UTC day and persists any
    /// state change. The one operation the web layer calls after every meal
    /// or water log and on dashboard loads.
    async fn check_daily_goals(&self, user_id: &str) -> Result<Evaluation>;

    /// Same as `check_daily_goals` but with an explicit evaluation date.
    async fn evaluate_for_date(&self, user_id: &str, today: NaiveDate) -> Result<Evaluation>;

    /// Read-only goal progress for the current UTC day. Never writes.
    async fn get_progress(&self, user_id: &str) -> Result<GoalProgress>;

    /// Replaces a user's record wholesale, bypassing the engine.
    ///
    /// Audited admin path only. The rank is re-derived from the incoming
    /// streak before persisting so the rank invariant survives the bypass.
    async fn override_record(
        &self,
        user_id: &str,
        record: GamificationRecord,
    ) -> Result<GamificationRecord>;
}
