//! The daily-goal evaluation engine.
//!
//! A pure function of (record, targets, totals, today). No I/O, no clock
//! access, no side effects; safe to call any number of times per day because
//! awards latch. The service layer owns loading, locking, and persistence.

use chrono::NaiveDate;

use super::gamification_constants::{ALL_GOALS_BONUS_POINTS, GOAL_POINTS};
use super::gamification_model::{AwardEvent, Evaluation, GamificationRecord, GoalFlags, Rank};
use crate::errors::Result;
use crate::goals::{GoalKind, NutritionGoals};
use crate::nutrition::DailyTotals;
use crate::utils::time_utils::previous_day;

/// Evaluates a user's daily goals and updates their gamification state.
///
/// Rejects non-positive targets and negative totals before touching the
/// record. Otherwise runs five steps:
///
/// 1. Day rollover: clear the daily latches when `today` differs from the
///    stored reset date, and reset the streak only on positive evidence
///    that the previous day was missed.
/// 2. Per-goal satisfaction (`total >= target`, non-strict).
/// 3. Award 10 points per goal newly satisfied today.
/// 4. Award the 50-point bonus and advance the streak when all five goals
///    are met and the bonus has not yet fired today.
/// 5. Re-derive the rank from the streak.
pub fn evaluate(
    record: &GamificationRecord,
    targets: &NutritionGoals,
    totals: &DailyTotals,
    today: NaiveDate,
) -> Result<Evaluation> {
    targets.validate()?;
    totals.validate()?;

    let mut record = record.clone();
    let mut events = Vec::new();

    // Step 1: day rollover. The latches are scoped to one calendar day and
    // cleared exactly once per day.
    if record.last_daily_reset != Some(today) {
        record.individual_goals_completed_today = GoalFlags::default();
        record.goals_completed_today = false;
        record.last_daily_reset = Some(today);

        // Streak continuity: reset only on positive evidence that the
        // previous day was missed. A missing completion date, or one equal
        // to yesterday or today, leaves the streak alone.
        if let Some(completed) = record.last_goals_completed_date {
            if completed < previous_day(today) {
                record.daily_streak = 0;
            }
        }
    }

    // Steps 2-3: per-goal satisfaction and award latching. Each latch
    // transitions false -> true at most once per day, so points are granted
    // incrementally as the user logs meals without re-awarding.
    let satisfied = GoalFlags::satisfied(targets, totals);
    for goal in GoalKind::ALL {
        if satisfied.is_set(goal) && !record.individual_goals_completed_today.is_set(goal) {
            record.individual_goals_completed_today.set(goal);
            record.point_total += GOAL_POINTS;
            events.push(AwardEvent::GoalCompleted {
                goal,
                points: GOAL_POINTS,
            });
        }
    }

    // Step 4: all-goals bonus, at most once per calendar day. `satisfied` is
    // recomputed fresh above rather than read from the latches, so stale
    // latch state can never make or break the bonus.
    if satisfied.all_set() && !record.goals_completed_today {
        record.point_total += ALL_GOALS_BONUS_POINTS;
        record.daily_streak += 1;
        record.goals_completed_today = true;
        record.last_goals_completed_date = Some(today);
        events.push(AwardEvent::AllGoalsCompleted {
            points: ALL_GOALS_BONUS_POINTS,
            streak: record.daily_streak,
        });
    }

    // Step 5: rank is always re-derived from the streak, which also corrects
    // any externally tampered or stale stored rank.
    record.current_rank = Rank::for_streak(record.daily_streak);

    Ok(Evaluation { record, events })
}
