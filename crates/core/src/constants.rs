/// Canonical string form for calendar dates exchanged with collaborators.
///
/// The totals aggregator and the goal engine must agree on what "today"
/// means; both sides use this UTC calendar-date format.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";
