//! Report rendering and delivery

pub mod delivery;
pub mod format;
pub mod renderer;

pub use delivery::*;
pub use renderer::*;
