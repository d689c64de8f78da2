//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Core services emit an event through this trait after each successful
/// mutation. The embedding application decides what an event becomes: a push
/// notification, a telemetry counter, an activity-feed row.
///
/// `emit` must be fast and non-blocking (no network calls, no DB writes) and
/// is best-effort: a sink that drops an event must not fail the domain
/// operation that produced it.
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);
}

/// Discards every event. For tests and embedders that don't consume events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Test sink that records every emitted event in order.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events emitted so far, oldest first.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of events emitted so far.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// True when nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_discards_silently() {
        let sink = NoOpDomainEventSink;
        sink.emit(DomainEvent::goals_updated("user-1".to_string()));
    }

    #[test]
    fn test_mock_sink_records_in_order() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::goals_updated("user-1".to_string()));
        sink.emit(DomainEvent::record_overridden("user-2".to_string()));

        assert_eq!(sink.len(), 2);
        assert!(matches!(
            sink.events().as_slice(),
            [
                DomainEvent::GoalsUpdated { .. },
                DomainEvent::RecordOverridden { .. }
            ]
        ));
    }
}
