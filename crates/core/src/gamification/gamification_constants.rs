/// Points awarded the first time an individual goal is met on a given day.
pub const GOAL_POINTS: u64 = 10;

/// Bonus points awarded once per day when all five goals are met together.
pub const ALL_GOALS_BONUS_POINTS: u64 = 50;

/// Minimum daily streak for the Silver rank.
pub const SILVER_MIN_STREAK: u32 = 15;

/// Minimum daily streak for the Gold rank.
pub const GOLD_MIN_STREAK: u32 = 30;
