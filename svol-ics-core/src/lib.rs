//! SVol ICS Core Library
//!
//! This library provides core functionality for turning exported
//! volunteer schedules into ICS calendar files.

pub mod calendar;
pub mod error;
pub mod ics;
pub mod schedule;
pub mod time;
pub mod types;

// Re-export core types and error handling
pub use error::{Error, Result};
pub use types::*;

/// Commonly used items
pub mod prelude {
    pub use crate::{calendar::*, ics::*, schedule::*, time::*, types::*};
}
