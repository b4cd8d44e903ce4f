//! Hour:minute time of day for small embedded loggers.
//!
//! [`ClockTime`] keeps hours and minutes only, with wrapping or clamping
//! arithmetic and an explicit invalid state. The other modules render it as
//! text, onto LED matrices, and into log timestamps.
#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod display;
mod error;
mod font;
pub mod format;
pub mod logtime;

pub use clock::{ClockTime, Overflow};
pub use error::Error;
pub use logtime::{CalendarSource, CalendarTime, LogTime};
