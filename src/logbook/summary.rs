//! Day and month aggregation over a flat list of trips

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::types::*;

/// Totals for every trip recorded on exactly `date`.
///
/// An empty result is a valid summary with zero totals.
pub fn day_summary(trips: &[Trip], date: NaiveDate) -> DaySummary {
    let day_trips: Vec<Trip> = trips.iter().filter(|t| t.date == date).cloned().collect();

    let total_collection: BigDecimal = day_trips.iter().map(|t| &t.collection_weight).sum();
    let total_discharge: BigDecimal = day_trips.iter().map(|t| &t.discharge_weight).sum();
    let difference = &total_collection - &total_discharge;

    DaySummary {
        date,
        trip_count: day_trips.len(),
        trips: day_trips,
        total_collection,
        total_discharge,
        difference,
    }
}

/// Per-date totals for every trip within `month`, in first-seen order
pub fn month_summary(trips: &[Trip], month: Month) -> MonthSummary {
    trips
        .iter()
        .filter(|t| month.contains(t.date))
        .fold(MonthSummary::new(month), |mut summary, trip| {
            summary.entry(trip.date).record(trip);
            summary
        })
}
