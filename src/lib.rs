//! # Feed Logbook
//!
//! Trip logbook for feed-leftover collection: record truck trips, aggregate
//! them per day and per month, and produce printable reports.
//!
//! ## Features
//!
//! - **Trip recording**: form input validation with user-facing messages
//! - **Aggregation**: exact day and month totals of collected and discharged weight
//! - **Reports**: self-contained, print-ready HTML for a day or a month
//! - **Delivery**: display a report, or save it for download when no display is available
//! - **Storage abstraction**: trait-based store with an in-memory implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use feed_logbook::utils::MemoryStorage;
//! use feed_logbook::{Logbook, NewTrip};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut logbook = Logbook::new(MemoryStorage::new());
//!
//! logbook
//!     .add_trip(&NewTrip {
//!         collection_time: "07:30".to_string(),
//!         collection_weight: "100".to_string(),
//!         discharge_weight: "95".to_string(),
//!         ..NewTrip::for_date(date)
//!     })
//!     .unwrap();
//!
//! let summary = logbook.day_summary(date).unwrap();
//! assert_eq!(summary.trip_count, 1);
//! ```

pub mod config;
pub mod logbook;
pub mod report;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::ReportConfig;
pub use logbook::{day_summary, month_summary, Logbook, TripManager};
pub use report::{
    deliver, Delivery, DisplayError, DisplaySurface, Headless, ReportDocument, ReportKind,
    ReportRenderer,
};
pub use traits::*;
pub use types::*;
