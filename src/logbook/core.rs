//! Main logbook orchestrator that coordinates trips, summaries and reports

use chrono::{Local, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::config::ReportConfig;
use crate::logbook::summary::{day_summary, month_summary};
use crate::logbook::TripManager;
use crate::report::{ReportDocument, ReportRenderer};
use crate::traits::*;
use crate::types::*;

/// Session logbook: the trip store plus everything derived from it
pub struct Logbook<S: TripStorage> {
    trip_manager: TripManager<S>,
    renderer: ReportRenderer,
}

impl<S: TripStorage> Logbook<S> {
    /// Create a new logbook with the default validator and report config
    pub fn new(storage: S) -> Self {
        Self {
            trip_manager: TripManager::new(storage),
            renderer: ReportRenderer::default(),
        }
    }

    /// Create a new logbook with a custom report configuration
    pub fn with_config(storage: S, config: ReportConfig) -> LogbookResult<Self> {
        config.validate()?;
        Ok(Self {
            trip_manager: TripManager::new(storage),
            renderer: ReportRenderer::new(config),
        })
    }

    /// Create a new logbook with a custom validator and report configuration
    pub fn with_validator(
        storage: S,
        validator: Box<dyn TripValidator>,
        config: ReportConfig,
    ) -> LogbookResult<Self> {
        config.validate()?;
        Ok(Self {
            trip_manager: TripManager::with_validator(storage, validator),
            renderer: ReportRenderer::new(config),
        })
    }

    pub fn config(&self) -> &ReportConfig {
        self.renderer.config()
    }

    // Trip operations
    /// Validate and record a trip
    pub fn add_trip(&mut self, input: &NewTrip) -> LogbookResult<Trip> {
        self.trip_manager.add_trip(input)
    }

    /// Get a trip by ID
    pub fn get_trip(&self, trip_id: &Uuid) -> LogbookResult<Option<Trip>> {
        self.trip_manager.get_trip(trip_id)
    }

    /// All trips, in insertion order
    pub fn list_trips(&self) -> LogbookResult<Vec<Trip>> {
        self.trip_manager.list_trips()
    }

    /// Delete a trip
    pub fn delete_trip(&mut self, trip_id: &Uuid) -> LogbookResult<()> {
        self.trip_manager.delete_trip(trip_id)
    }

    /// Delete all trips of one day, returning how many were removed
    pub fn delete_day(&mut self, date: NaiveDate) -> LogbookResult<usize> {
        self.trip_manager.delete_day(date)
    }

    // Summaries
    pub fn day_summary(&self, date: NaiveDate) -> LogbookResult<DaySummary> {
        let trips = self.trip_manager.trips_on(date)?;
        let summary = day_summary(&trips, date);
        debug!(date = %date, trips = summary.trip_count, "day summary computed");
        Ok(summary)
    }

    pub fn month_summary(&self, month: Month) -> LogbookResult<MonthSummary> {
        let trips = self.trip_manager.list_trips()?;
        let summary = month_summary(&trips, month);
        debug!(month = %month, days = summary.len(), "month summary computed");
        Ok(summary)
    }

    // Reports
    /// Printable report for one day; fails with [`LogbookError::NoData`]
    /// when the day has no trips
    pub fn daily_report(&self, date: NaiveDate) -> LogbookResult<ReportDocument> {
        let summary = self.day_summary(date)?;
        self.renderer
            .render_daily(&summary, Local::now().naive_local())
    }

    /// Printable report for one month; fails with [`LogbookError::NoData`]
    /// when no day of the month has trips
    pub fn monthly_report(&self, month: Month) -> LogbookResult<ReportDocument> {
        let summary = self.month_summary(month)?;
        self.renderer
            .render_monthly(&summary, Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;
    use bigdecimal::BigDecimal;

    fn input(date: NaiveDate, collection: &str, discharge: &str) -> NewTrip {
        NewTrip {
            collection_time: "06:45".to_string(),
            collection_weight: collection.to_string(),
            origin_farm: "Granja Boa Vista".to_string(),
            discharge_weight: discharge.to_string(),
            destination_farm: "Fazenda Santa Luzia".to_string(),
            ..NewTrip::for_date(date)
        }
    }

    #[test]
    fn test_logbook_basic_operations() {
        let mut logbook = Logbook::new(MemoryStorage::new());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        logbook.add_trip(&input(date, "100", "95")).unwrap();
        logbook.add_trip(&input(date, "50", "48")).unwrap();

        let summary = logbook.day_summary(date).unwrap();
        assert_eq!(summary.trip_count, 2);
        assert_eq!(summary.total_collection, BigDecimal::from(150));
        assert_eq!(summary.total_discharge, BigDecimal::from(143));
        assert_eq!(summary.difference, BigDecimal::from(7));

        let month = logbook.month_summary(Month::of(date)).unwrap();
        assert_eq!(month.len(), 1);

        let report = logbook.daily_report(date).unwrap();
        assert!(report.html.contains("150 kg"));

        let report = logbook.monthly_report(Month::of(date)).unwrap();
        assert!(report.html.contains("143 kg"));
    }

    #[test]
    fn test_reports_need_data() {
        let logbook = Logbook::new(MemoryStorage::new());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert!(matches!(
            logbook.daily_report(date),
            Err(LogbookError::NoData(_))
        ));
        assert!(matches!(
            logbook.monthly_report(Month::of(date)),
            Err(LogbookError::NoData(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ReportConfig {
            positive_color: "green".to_string(),
            ..ReportConfig::default()
        };
        assert!(Logbook::with_config(MemoryStorage::new(), config).is_err());
    }
}
