//! Daily aggregator
//!
//! Buckets event attendance counters by the weekday of the event date.

use chrono::Datelike;
use eventhub_core::entities::Event;
use eventhub_core::{WeekdayLabels, DAYS_IN_WEEK};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Attendance totals per weekday, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyAssistanceTally {
    labels: WeekdayLabels,
    totals: [i64; DAYS_IN_WEEK],
}

impl DailyAssistanceTally {
    /// All seven buckets at zero
    pub fn empty(labels: WeekdayLabels) -> Self {
        Self {
            labels,
            totals: [0; DAYS_IN_WEEK],
        }
    }

    pub fn labels(&self) -> WeekdayLabels {
        self.labels
    }

    /// Total for a label of this tally's label set
    pub fn get(&self, label: &str) -> Option<i64> {
        self.labels
            .labels()
            .iter()
            .position(|l| *l == label)
            .map(|i| self.totals[i])
    }

    /// `(label, total)` pairs, Sunday first
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.labels.labels().iter().copied().zip(self.totals)
    }

    /// Sum across all buckets
    pub fn total(&self) -> i64 {
        self.totals.iter().sum()
    }
}

impl Serialize for DailyAssistanceTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DAYS_IN_WEEK))?;
        for (label, total) in self.iter() {
            map.serialize_entry(label, &total)?;
        }
        map.end()
    }
}

/// Sum `assistance` per weekday of `event_date`
///
/// Events without a date are skipped. The result depends only on the
/// `(event_date, assistance)` pairs, never on their order.
pub fn compute_daily_tally<'a, I>(events: I, labels: WeekdayLabels) -> DailyAssistanceTally
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut tally = DailyAssistanceTally::empty(labels);

    for event in events {
        let Some(at) = event.event_date else {
            warn!(event_id = %event.id, "Event has no date, skipped in daily tally");
            continue;
        };

        let day = at.weekday().num_days_from_sunday();
        if labels.label(day).is_none() {
            warn!(event_id = %event.id, day, "No weekday label, skipped in daily tally");
            continue;
        }

        tally.totals[day as usize] += i64::from(event.assistance.max(0));
    }

    tally
}

/// Daily tally service
pub struct TallyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TallyService<'a> {
    /// Create a new TallyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Tally over a snapshot of every event
    #[instrument(skip(self))]
    pub async fn daily_tally(&self) -> ServiceResult<DailyAssistanceTally> {
        let events = self.ctx.event_repo().find_all().await?;
        let tally = compute_daily_tally(&events, self.ctx.tally_labels());

        info!(events = events.len(), total = tally.total(), "Daily tally computed");
        Ok(tally)
    }
}
