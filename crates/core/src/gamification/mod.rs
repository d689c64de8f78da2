//! Gamification module - the daily-goal evaluation and streak/rank engine.
//!
//! # Architecture
//!
//! ```text
//! GamificationService ──▶ evaluator::evaluate (pure)
//!        │                        │
//!   repositories /           Evaluation
//!   totals provider     (record + award events)
//!        │                        │
//!   conditional write        DomainEventSink
//! ```
//!
//! - **Model** (`gamification_model.rs`) - `GamificationRecord`, `Rank`,
//!   `GoalFlags`, `AwardEvent`, `Evaluation`, `GoalProgress`
//! - **Constants** (`gamification_constants.rs`) - point values and rank
//!   thresholds
//! - **Evaluator** (`evaluator.rs`) - the pure evaluation engine
//! - **Traits** (`gamification_traits.rs`) - repository and service seams
//! - **Service** (`gamification_service.rs`) - per-user serialized
//!   read-evaluate-write orchestration
//!
//! The engine is a pure function of (record, targets, totals, today). All
//! I/O, defaulting of missing state, locking, and event emission live in the
//! service; nothing else in the application is allowed to mutate a
//! gamification record except the explicitly-audited admin override.

mod evaluator;
mod gamification_constants;
mod gamification_model;
mod gamification_service;
mod gamification_traits;




// Re-export the public interface
pub use evaluator::evaluate;
pub use gamification_constants::*;
pub use gamification_model::{
    AwardEvent, Evaluation, GamificationRecord, GoalFlags, GoalProgress, Rank,
};
pub use gamification_service::GamificationService;
pub use gamification_traits::{GamificationRepositoryTrait, GamificationServiceTrait};
