//! Trip recording and removal

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// Trip manager for handling store mutations
pub struct TripManager<S: TripStorage> {
    pub(crate) storage: S,
    validator: Box<dyn TripValidator>,
}

impl<S: TripStorage> TripManager<S> {
    /// Create a new trip manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultTripValidator),
        }
    }

    /// Create a new trip manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn TripValidator>) -> Self {
        Self { storage, validator }
    }

    /// Validate form input and record the resulting trip.
    ///
    /// Nothing is stored when validation fails.
    pub fn add_trip(&mut self, input: &NewTrip) -> LogbookResult<Trip> {
        let trip = match self.validator.validate_new_trip(input) {
            Ok(trip) => trip,
            Err(err) => {
                warn!(date = %input.date, error = %err, "trip rejected");
                return Err(err);
            }
        };

        self.storage.save_trip(&trip)?;
        info!(
            trip_id = %trip.id,
            ticket = %trip.collection_ticket,
            date = %trip.date,
            "trip added"
        );

        Ok(trip)
    }

    /// Get a trip by ID
    pub fn get_trip(&self, trip_id: &Uuid) -> LogbookResult<Option<Trip>> {
        self.storage.get_trip(trip_id)
    }

    /// Get a trip by ID, returning an error if not found
    pub fn get_trip_required(&self, trip_id: &Uuid) -> LogbookResult<Trip> {
        self.storage
            .get_trip(trip_id)?
            .ok_or_else(|| LogbookError::TripNotFound(trip_id.to_string()))
    }

    /// All recorded trips, in insertion order
    pub fn list_trips(&self) -> LogbookResult<Vec<Trip>> {
        self.storage.list_trips()
    }

    /// Trips recorded on a date
    pub fn trips_on(&self, date: NaiveDate) -> LogbookResult<Vec<Trip>> {
        self.storage.get_trips_by_date(date)
    }

    /// Delete a single trip
    pub fn delete_trip(&mut self, trip_id: &Uuid) -> LogbookResult<()> {
        self.storage.delete_trip(trip_id)?;
        info!(trip_id = %trip_id, "trip deleted");
        Ok(())
    }

    /// Delete every trip recorded on `date`; other days are untouched
    pub fn delete_day(&mut self, date: NaiveDate) -> LogbookResult<usize> {
        let removed = self.storage.delete_trips_by_date(date)?;
        info!(date = %date, removed, "trips for day deleted");
        Ok(removed)
    }
}
