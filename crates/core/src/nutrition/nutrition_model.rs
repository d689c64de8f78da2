//! Nutrition domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalKind;

/// A user's accumulated nutrition for one UTC calendar day.
///
/// Computed by the meal/water aggregation layer from the day's logged
/// entries; the goal engine treats it as a read-only fact. Units match
/// `NutritionGoals`: kcal, grams, milliliters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub water: f64,
}

impl DailyTotals {
    /// Returns the accumulated total for the given goal.
    pub fn total(&self, goal: GoalKind) -> f64 {
        match goal {
            GoalKind::Calories => self.calories,
            GoalKind::Protein => self.protein,
            GoalKind::Carbs => self.carbs,
            GoalKind::Fat => self.fat,
            GoalKind::Water => self.water,
        }
    }

    /// Validates that every total is a finite, non-negative number.
    ///
    /// A negative total indicates a malformed aggregation upstream and is
    /// rejected before it can produce nonsensical awards.
    pub fn validate(&self) -> Result<()> {
        for goal in GoalKind::ALL {
            let total = self.total(goal);
            if !total.is_finite() || total < 0.0 {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{} total must be a non-negative number, got {}",
                    goal.label(),
                    total
                ))));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_totals_are_zero_and_valid() {
        let totals = DailyTotals::default();
        for goal in GoalKind::ALL {
            assert_eq!(totals.total(goal), 0.0);
        }
        assert!(totals.validate().is_ok());
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let totals = DailyTotals {
            protein: -1.0,
            ..DailyTotals::default()
        };
        assert!(totals.validate().is_err());
    }

    #[test]
    fn test_non_finite_total_is_rejected() {
        let totals = DailyTotals {
            water: f64::NAN,
            ..DailyTotals::default()
        };
        assert!(totals.validate().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let totals = DailyTotals {
            calories: 1500.0,
            ..DailyTotals::default()
        };
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["calories"], 1500.0);
        assert!(json.get("carbs").is_some());
    }
}
