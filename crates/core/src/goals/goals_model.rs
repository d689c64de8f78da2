//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// The five daily goals a user tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalKind {
    Calories,
    Protein,
    Carbs,
    Fat,
    Water,
}

impl GoalKind {
    /// All tracked goals, in display order.
    pub const ALL: [GoalKind; 5] = [
        GoalKind::Calories,
        GoalKind::Protein,
        GoalKind::Carbs,
        GoalKind::Fat,
        GoalKind::Water,
    ];

    /// Returns the string representation of this goal kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Calories => "CALORIES",
            GoalKind::Protein => "PROTEIN",
            GoalKind::Carbs => "CARBS",
            GoalKind::Fat => "FAT",
            GoalKind::Water => "WATER",
        }
    }

    /// Returns a human-friendly label for this goal kind.
    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Calories => "Calories",
            GoalKind::Protein => "Protein",
            GoalKind::Carbs => "Carbs",
            GoalKind::Fat => "Fat",
            GoalKind::Water => "Water",
        }
    }
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's daily nutrition targets.
///
/// Units follow the app convention: kcal for calories, grams for the
/// macronutrients, milliliters for water. Every target must be a positive,
/// finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub water: f64,
}

impl Default for NutritionGoals {
    /// The app's standard starter plan, applied until the user edits their
    /// profile.
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 100.0,
            carbs: 250.0,
            fat: 60.0,
            water: 2000.0,
        }
    }
}

impl NutritionGoals {
    /// Returns the target for the given goal.
    pub fn target(&self, goal: GoalKind) -> f64 {
        match goal {
            GoalKind::Calories => self.calories,
            GoalKind::Protein => self.protein,
            GoalKind::Carbs => self.carbs,
            GoalKind::Fat => self.fat,
            GoalKind::Water => self.water,
        }
    }

    /// Validates that every target is a positive, finite number.
    ///
    /// A non-positive target indicates a malformed upstream record and is
    /// rejected before it can produce nonsensical awards.
    pub fn validate(&self) -> Result<()> {
        for goal in GoalKind::ALL {
            let target = self.target(goal);
            if !target.is_finite() || target <= 0.0 {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{} target must be a positive number, got {}",
                    goal.label(),
                    target
                ))));
            }
        }
        Ok(())
    }
}
