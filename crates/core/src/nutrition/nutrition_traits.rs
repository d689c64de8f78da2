use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::nutrition::nutrition_model::DailyTotals;

/// Trait for the meal/water aggregation collaborator.
///
/// Implemented outside this crate by whatever layer owns the meal and water
/// logs. The `date` argument is a UTC calendar day and must use the same day
/// boundary as `utils::time_utils::utc_today`; a local-time aggregator here
/// silently corrupts day-rollover detection.
#[async_trait]
pub trait DailyTotalsProviderTrait: Send + Sync {
    /// Returns the user's aggregated nutrient and water totals for the day.
    ///
    /// A day with no logged entries is all zeros, not an error.
    async fn daily_totals(&self, user_id: &str, date: NaiveDate) -> Result<DailyTotals>;
}
