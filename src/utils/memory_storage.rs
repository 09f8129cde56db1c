//! In-memory trip storage

use chrono::NaiveDate;
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// Session-lifetime storage; everything is lost when it is dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    trips: Vec<Trip>,
}

impl MemoryStorage {
    /// Create a new, empty memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl TripStorage for MemoryStorage {
    fn save_trip(&mut self, trip: &Trip) -> LogbookResult<()> {
        if self.trips.iter().any(|t| t.id == trip.id) {
            return Err(LogbookError::Validation(format!(
                "Viagem com ID '{}' já existe",
                trip.id
            )));
        }
        self.trips.push(trip.clone());
        Ok(())
    }

    fn get_trip(&self, trip_id: &Uuid) -> LogbookResult<Option<Trip>> {
        Ok(self.trips.iter().find(|t| &t.id == trip_id).cloned())
    }

    fn list_trips(&self) -> LogbookResult<Vec<Trip>> {
        Ok(self.trips.clone())
    }

    fn get_trips_by_date(&self, date: NaiveDate) -> LogbookResult<Vec<Trip>> {
        Ok(self
            .trips
            .iter()
            .filter(|t| t.date == date)
            .cloned()
            .collect())
    }

    fn delete_trip(&mut self, trip_id: &Uuid) -> LogbookResult<()> {
        let before = self.trips.len();
        self.trips.retain(|t| &t.id != trip_id);
        if self.trips.len() == before {
            Err(LogbookError::TripNotFound(trip_id.to_string()))
        } else {
            Ok(())
        }
    }

    fn delete_trips_by_date(&mut self, date: NaiveDate) -> LogbookResult<usize> {
        let before = self.trips.len();
        self.trips.retain(|t| t.date != date);
        Ok(before - self.trips.len())
    }
}
