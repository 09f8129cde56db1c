//! Core types and data structures for the trip logbook

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A recorded truck movement: feed leftovers collected at one farm and
/// discharged at another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier, time-ordered (UUID v7)
    pub id: Uuid,
    /// Calendar day the trip belongs to
    pub date: NaiveDate,
    /// When the load was collected
    pub collection_time: NaiveTime,
    /// Collected weight in kilograms
    pub collection_weight: BigDecimal,
    /// Farm the load was collected from
    pub origin_farm: String,
    /// When the load was discharged, if recorded
    pub discharge_time: Option<NaiveTime>,
    /// Discharged weight in kilograms
    pub discharge_weight: BigDecimal,
    /// Farm the load was discharged at
    pub destination_farm: String,
    /// Short display id printed on collection tickets
    pub collection_ticket: String,
    /// When the record was created
    pub created_at: NaiveDateTime,
}

impl Trip {
    /// Create a new trip stamped with the current time.
    ///
    /// Weights are taken as given; use a [`crate::TripValidator`] on a
    /// [`NewTrip`] to get checked values.
    pub fn new(
        date: NaiveDate,
        collection_time: NaiveTime,
        collection_weight: BigDecimal,
        discharge_weight: BigDecimal,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::now_v7(),
            date,
            collection_time,
            collection_weight,
            origin_farm: String::new(),
            discharge_time: None,
            discharge_weight,
            destination_farm: String::new(),
            collection_ticket: ticket_for(now),
            created_at: now,
        }
    }

    /// Collected minus discharged weight for this trip
    pub fn difference(&self) -> BigDecimal {
        &self.collection_weight - &self.discharge_weight
    }
}

/// Derive the display ticket from a creation timestamp: `T` followed by the
/// last six digits of its millisecond value.
pub fn ticket_for(created_at: NaiveDateTime) -> String {
    let millis = created_at.and_utc().timestamp_millis().unsigned_abs();
    format!("T{:06}", millis % 1_000_000)
}

/// Raw trip input as typed into the entry form.
///
/// Every field except the date is kept as text; validation turns it into a
/// [`Trip`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTrip {
    pub date: NaiveDate,
    pub collection_time: String,
    pub collection_weight: String,
    pub origin_farm: String,
    pub discharge_time: String,
    pub discharge_weight: String,
    pub destination_farm: String,
}

impl NewTrip {
    /// Start an empty form for the given day
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }
}

/// A calendar month, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month, checking that `month` is in 1..=12
    pub fn new(year: i32, month: u32) -> LogbookResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(LogbookError::Validation(format!(
                "O mês deve estar entre 1 e 12, recebido {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // year/month are checked on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Whether `date` falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = LogbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LogbookError::Validation(format!("Mês inválido '{}', esperado AAAA-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// Aggregated totals for all trips on one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Trips recorded on the date, in store order
    pub trips: Vec<Trip>,
    pub trip_count: usize,
    pub total_collection: BigDecimal,
    pub total_discharge: BigDecimal,
    /// `total_collection - total_discharge`
    pub difference: BigDecimal,
}

impl DaySummary {
    pub fn is_empty(&self) -> bool {
        self.trip_count == 0
    }
}

/// Per-date totals inside a month summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    pub date: NaiveDate,
    pub trip_count: usize,
    pub collection: BigDecimal,
    pub discharge: BigDecimal,
}

impl DayTotals {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            trip_count: 0,
            collection: BigDecimal::from(0),
            discharge: BigDecimal::from(0),
        }
    }

    /// Add one trip's weights to the totals
    pub fn record(&mut self, trip: &Trip) {
        self.trip_count += 1;
        self.collection += &trip.collection_weight;
        self.discharge += &trip.discharge_weight;
    }

    pub fn difference(&self) -> BigDecimal {
        &self.collection - &self.discharge
    }
}

/// Per-date totals for every recorded day within one month.
///
/// Days are kept in the order they were first seen in the trip list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: Month,
    pub days: Vec<DayTotals>,
}

impl MonthSummary {
    pub fn new(month: Month) -> Self {
        Self {
            month,
            days: Vec::new(),
        }
    }

    /// Totals for a date, if any trip was recorded on it
    pub fn get(&self, date: NaiveDate) -> Option<&DayTotals> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Totals for a date, inserting an empty entry on first sight
    pub fn entry(&mut self, date: NaiveDate) -> &mut DayTotals {
        let index = match self.days.iter().position(|d| d.date == date) {
            Some(index) => index,
            None => {
                self.days.push(DayTotals::new(date));
                self.days.len() - 1
            }
        };
        &mut self.days[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayTotals> {
        self.days.iter()
    }

    /// Number of days with at least one trip
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn trip_count(&self) -> usize {
        self.days.iter().map(|d| d.trip_count).sum()
    }

    pub fn total_collection(&self) -> BigDecimal {
        self.days.iter().map(|d| &d.collection).sum()
    }

    pub fn total_discharge(&self) -> BigDecimal {
        self.days.iter().map(|d| &d.discharge).sum()
    }

    pub fn difference(&self) -> BigDecimal {
        self.total_collection() - self.total_discharge()
    }
}

/// Errors that can occur in the logbook
#[derive(Debug, thiserror::Error)]
pub enum LogbookError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NoData(String),
    #[error("Viagem não encontrada: {0}")]
    TripNotFound(String),
    #[error("Erro de configuração: {0}")]
    Config(String),
    #[error("Falha ao gerar o relatório: {0}")]
    Render(#[from] askama::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for logbook operations
pub type LogbookResult<T> = Result<T, LogbookError>;
