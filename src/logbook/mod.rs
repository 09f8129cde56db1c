//! Logbook module containing trip management and aggregation

pub mod core;
pub mod summary;
pub mod trip;

pub use self::core::*;
pub use summary::*;
pub use trip::*;
