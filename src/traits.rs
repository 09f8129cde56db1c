//! Traits for storage abstraction and extensibility

use chrono::NaiveDate;
use uuid::Uuid;

use crate::types::*;
use crate::utils::validation::{parse_optional_time, parse_required_time, parse_weight};

/// Storage abstraction for the trip logbook
///
/// Implementations must keep trips in insertion order; summaries and
/// reports list trips in the order the store returns them.
pub trait TripStorage {
    /// Append a trip
    fn save_trip(&mut self, trip: &Trip) -> LogbookResult<()>;

    /// Get a trip by ID
    fn get_trip(&self, trip_id: &Uuid) -> LogbookResult<Option<Trip>>;

    /// All trips, in insertion order
    fn list_trips(&self) -> LogbookResult<Vec<Trip>>;

    /// Trips recorded on a specific date, in insertion order
    fn get_trips_by_date(&self, date: NaiveDate) -> LogbookResult<Vec<Trip>>;

    /// Delete a single trip
    fn delete_trip(&mut self, trip_id: &Uuid) -> LogbookResult<()>;

    /// Delete every trip recorded on `date`, returning how many were removed
    fn delete_trips_by_date(&mut self, date: NaiveDate) -> LogbookResult<usize>;
}

/// Trait for implementing trip acceptance rules
pub trait TripValidator {
    /// Validate raw form input and build the trip it describes
    fn validate_new_trip(&self, input: &NewTrip) -> LogbookResult<Trip>;
}

/// Default validator: collection time required, both weights strictly positive
pub struct DefaultTripValidator;

impl TripValidator for DefaultTripValidator {
    fn validate_new_trip(&self, input: &NewTrip) -> LogbookResult<Trip> {
        let collection_time = parse_required_time(
            &input.collection_time,
            "Por favor, preencha o horário da coleta.",
        )?;
        let collection_weight = parse_weight(
            &input.collection_weight,
            "Por favor, preencha um peso coletado válido (maior que zero).",
        )?;
        let discharge_weight = parse_weight(
            &input.discharge_weight,
            "Por favor, preencha um peso descarregado válido (maior que zero).",
        )?;
        let discharge_time = parse_optional_time(
            &input.discharge_time,
            "Por favor, preencha um horário de descarga válido.",
        )?;

        let mut trip = Trip::new(input.date, collection_time, collection_weight, discharge_weight);
        trip.discharge_time = discharge_time;
        trip.origin_farm = input.origin_farm.clone();
        trip.destination_farm = input.destination_farm.clone();
        Ok(trip)
    }
}
