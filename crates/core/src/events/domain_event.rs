//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::gamification::{AwardEvent, Rank};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions (push notifications,
/// telemetry counters, activity feeds, etc.).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// The goal engine granted one or more awards to a user.
    AwardsGranted {
        user_id: String,
        awards: Vec<AwardEvent>,
    },

    /// A user's rank tier changed during evaluation.
    RankChanged {
        user_id: String,
        old_rank: Rank,
        new_rank: Rank,
    },

    /// A user's gamification record was replaced through the audited admin
    /// override, bypassing the goal engine.
    RecordOverridden { user_id: String },

    /// A user updated their daily nutrition targets.
    GoalsUpdated { user_id: String },
}

impl DomainEvent {
    /// Creates an AwardsGranted event.
    pub fn awards_granted(user_id: String, awards: Vec<AwardEvent>) -> Self {
        Self::AwardsGranted { user_id, awards }
    }

    /// Creates a RankChanged event.
    pub fn rank_changed(user_id: String, old_rank: Rank, new_rank: Rank) -> Self {
        Self::RankChanged {
            user_id,
            old_rank,
            new_rank,
        }
    }

    /// Creates a RecordOverridden event.
    pub fn record_overridden(user_id: String) -> Self {
        Self::RecordOverridden { user_id }
    }

    /// Creates a GoalsUpdated event.
    pub fn goals_updated(user_id: String) -> Self {
        Self::GoalsUpdated { user_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_type_tag() {
        let event = DomainEvent::rank_changed("user-1".to_string(), Rank::Silver, Rank::Gold);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "rank_changed");
        assert_eq!(json["old_rank"], "SILVER");
        assert_eq!(json["new_rank"], "GOLD");
    }

    #[test]
    fn test_awards_granted_round_trip() {
        let event = DomainEvent::awards_granted(
            "user-1".to_string(),
            vec![AwardEvent::AllGoalsCompleted {
                points: 50,
                streak: 3,
            }],
        );
        let json = serde_json::to_string(&event).unwrap();
        let back: DomainEvent = serde_json::from_str(&json).unwrap();
        match back {
            DomainEvent::AwardsGranted { user_id, awards } => {
                assert_eq!(user_id, "user-1");
                assert_eq!(awards.len(), 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
