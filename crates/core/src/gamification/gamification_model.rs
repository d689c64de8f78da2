//! Gamification domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::gamification_constants::{GOLD_MIN_STREAK, SILVER_MIN_STREAK};
use crate::goals::{GoalKind, NutritionGoals};
use crate::nutrition::DailyTotals;

// =============================================================================
// Rank
// =============================================================================

/// Rank tiers derived from the daily streak.
///
/// Ordered from lowest to highest. A rank is never stored authoritatively;
/// it is recomputed from the streak on every evaluation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl Rank {
    /// Derives the rank for a given daily streak.
    pub fn for_streak(streak: u32) -> Rank {
        if streak >= GOLD_MIN_STREAK {
            Rank::Gold
        } else if streak >= SILVER_MIN_STREAK {
            Rank::Silver
        } else {
            Rank::Bronze
        }
    }

    /// Returns the string representation of this rank.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Bronze => "BRONZE",
            Rank::Silver => "SILVER",
            Rank::Gold => "GOLD",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Goal flags
// =============================================================================

/// One boolean per tracked goal.
///
/// Used both for the per-day award latches on the record and for "satisfied
/// right now" snapshots in progress views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalFlags {
    pub calories: bool,
    pub protein: bool,
    pub carbs: bool,
    pub fat: bool,
    pub water: bool,
}

impl GoalFlags {
    /// Computes which goals are currently satisfied (`total >= target`,
    /// non-strict).
    pub fn satisfied(targets: &NutritionGoals, totals: &DailyTotals) -> GoalFlags {
        let mut flags = GoalFlags::default();
        for goal in GoalKind::ALL {
            if totals.total(goal) >= targets.target(goal) {
                flags.set(goal);
            }
        }
        flags
    }

    /// Returns the flag for the given goal.
    pub fn is_set(&self, goal: GoalKind) -> bool {
        match goal {
            GoalKind::Calories => self.calories,
            GoalKind::Protein => self.protein,
            GoalKind::Carbs => self.carbs,
            GoalKind::Fat => self.fat,
            GoalKind::Water => self.water,
        }
    }

    /// Sets the flag for the given goal.
    pub fn set(&mut self, goal: GoalKind) {
        match goal {
            GoalKind::Calories => self.calories = true,
            GoalKind::Protein => self.protein = true,
            GoalKind::Carbs => self.carbs = true,
            GoalKind::Fat => self.fat = true,
            GoalKind::Water => self.water = true,
        }
    }

    /// True when every flag is set.
    pub fn all_set(&self) -> bool {
        GoalKind::ALL.iter().all(|goal| self.is_set(*goal))
    }

    /// Number of set flags (0-5).
    pub fn count_set(&self) -> usize {
        GoalKind::ALL.iter().filter(|goal| self.is_set(**goal)).count()
    }
}

// =============================================================================
// Gamification record
// =============================================================================

/// Per-user gamification state, owned by the user aggregate.
///
/// Mutated only by the evaluation engine (plus the audited admin override)
/// and deleted only with the user. `Default` is the engine-defined fresh
/// state used when no record is stored yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationRecord {
    /// Consecutive UTC calendar days on which all five goals were met.
    pub daily_streak: u32,
    /// Monotonically non-decreasing lifetime score.
    pub point_total: u64,
    /// Derived from `daily_streak`; recomputed on every evaluation.
    pub current_rank: Rank,
    /// True once the all-five-goals bonus has been awarded today.
    pub goals_completed_today: bool,
    /// Per-goal award latch for the current day.
    pub individual_goals_completed_today: GoalFlags,
    /// UTC calendar date the all-goals bonus was last awarded.
    pub last_goals_completed_date: Option<NaiveDate>,
    /// UTC calendar date the daily latches were last cleared.
    pub last_daily_reset: Option<NaiveDate>,
}

// =============================================================================
// Engine output
// =============================================================================

/// A single award granted by the evaluation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AwardEvent {
    /// An individual goal was met for the first time today.
    GoalCompleted { goal: GoalKind, points: u64 },
    /// All five goals were met together for the first time today.
    AllGoalsCompleted { points: u64, streak: u32 },
}

impl AwardEvent {
    /// Points carried by this award.
    pub fn points(&self) -> u64 {
        match self {
            AwardEvent::GoalCompleted { points, .. } => *points,
            AwardEvent::AllGoalsCompleted { points, .. } => *points,
        }
    }
}

/// Result of one engine evaluation: the updated record plus the awards
/// granted by this call. The event list is empty when nothing changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub record: GamificationRecord,
    pub events: Vec<AwardEvent>,
}

// =============================================================================
// Progress view
// =============================================================================

/// Read-only snapshot of a user's goal progress for the current day.
///
/// `satisfied` is computed fresh from totals vs. targets; `record` is the
/// stored state and may predate today's rollover until the next evaluation
/// runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub date: NaiveDate,
    pub record: GamificationRecord,
    pub targets: NutritionGoals,
    pub totals: DailyTotals,
    pub satisfied: GoalFlags,
}
