//! Hour:minute clock-of-day value with selectable rollover policy.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// What arithmetic and setters do when a result leaves the clock face.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Roll past 24:00 back to 00:00 (and below 00:00 back to 23:59).
    #[default]
    Wrap,
    /// Saturate arithmetic at 00:00 / 23:59; out-of-range setters invalidate.
    Clamp,
}

impl From<bool> for Overflow {
    fn from(wrap: bool) -> Self {
        if wrap {
            Overflow::Wrap
        } else {
            Overflow::Clamp
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Valid { hours: u8, mins: u8 },
    Invalid,
}

/// Time of day stored as hours and minutes.
///
/// A value is either a valid `00:00..=23:59` time or invalid. Invalid values
/// read back as midnight through [`hours`](Self::hours) and
/// [`mins`](Self::mins), so check [`is_valid`](Self::is_valid) first.
/// Clamped subtraction is the one operation that can leave the minute
/// outside `0..=59`; see [`subtract_time`](Self::subtract_time).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy)]
pub struct ClockTime {
    state: State,
    overflow: Overflow,
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ClockTime {
    /// Builds a valid time. Minutes past 59 carry into the hour and the hour
    /// wraps at 24, whatever policy is set later.
    pub fn new(hours: u8, mins: u8) -> Self {
        let hours = (u16::from(hours) + u16::from(mins) / 60) % 24;
        Self {
            state: State::Valid {
                hours: hours as u8,
                mins: mins % 60,
            },
            overflow: Overflow::Wrap,
        }
    }

    pub const fn invalid() -> Self {
        Self {
            state: State::Invalid,
            overflow: Overflow::Wrap,
        }
    }

    pub fn hours(&self) -> u8 {
        match self.state {
            State::Valid { hours, .. } => hours,
            State::Invalid => 0,
        }
    }

    pub fn mins(&self) -> u8 {
        match self.state {
            State::Valid { mins, .. } => mins,
            State::Invalid => 0,
        }
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Changes the policy for later operations. The current value is kept
    /// as is.
    pub fn set_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
    }

    /// Sets the hour. An invalid value becomes valid at `h:00`.
    pub fn set_hours(&mut self, hours: u8) {
        let hours = match self.overflow {
            Overflow::Wrap => hours % 24,
            Overflow::Clamp if hours < 24 => hours,
            Overflow::Clamp => {
                #[cfg(feature = "defmt")]
                defmt::trace!("hour {} out of range, invalidating", hours);
                self.set_invalid();
                return;
            }
        };
        let mins = self.mins();
        self.state = State::Valid { hours, mins };
    }

    /// Sets the minute. Under [`Overflow::Wrap`] minutes past 59 carry into
    /// the hour. An invalid value stays invalid.
    pub fn set_mins(&mut self, mins: u8) {
        let State::Valid { hours, .. } = self.state else {
            return;
        };

        match self.overflow {
            Overflow::Wrap => {
                self.state = State::Valid {
                    hours,
                    mins: mins % 60,
                };
                if mins >= 60 {
                    self.set_hours(hours + mins / 60);
                }
            }
            Overflow::Clamp if mins < 60 => self.state = State::Valid { hours, mins },
            Overflow::Clamp => {
                #[cfg(feature = "defmt")]
                defmt::trace!("minute {} out of range, invalidating", mins);
                self.set_invalid();
            }
        }
    }

    /// Adds `other` in place. An invalid `other` adds nothing; an invalid
    /// receiver stays invalid.
    pub fn add_time(&mut self, other: &ClockTime) {
        let State::Valid { hours, mins } = self.state else {
            return;
        };
        let sum_mins = u16::from(mins) + u16::from(other.mins());
        let sum_hours = u16::from(hours) + u16::from(other.hours());
        let carried = sum_hours + sum_mins / 60;

        self.state = match self.overflow {
            Overflow::Wrap => State::Valid {
                hours: (carried % 24) as u8,
                mins: (sum_mins % 60) as u8,
            },
            Overflow::Clamp if carried <= 23 => State::Valid {
                hours: carried as u8,
                mins: (sum_mins % 60) as u8,
            },
            Overflow::Clamp => {
                #[cfg(feature = "defmt")]
                defmt::trace!("sum past 23:59, saturating");
                State::Valid { hours: 23, mins: 59 }
            }
        };
    }

    /// Subtracts `other` in place. An invalid `other` subtracts nothing; an
    /// invalid receiver stays invalid.
    ///
    /// Under [`Overflow::Clamp`] the difference is not borrowed: when the
    /// hours stay non-negative it is committed as is, so a smaller minute
    /// on the receiver leaves [`mins`](Self::mins) outside `0..=59`.
    pub fn subtract_time(&mut self, other: &ClockTime) {
        let State::Valid { hours, mins } = self.state else {
            return;
        };
        let mut diff_mins = i16::from(mins) - i16::from(other.mins());
        let mut diff_hours = i16::from(hours) - i16::from(other.hours());

        self.state = match self.overflow {
            Overflow::Wrap => {
                if diff_mins < 0 {
                    diff_mins += 60;
                    diff_hours -= 1;
                }
                State::Valid {
                    hours: diff_hours.rem_euclid(24) as u8,
                    mins: diff_mins as u8,
                }
            }
            // Committed unborrowed: a negative minute difference is stored
            // as its two's complement byte.
            Overflow::Clamp if diff_hours + diff_mins / 60 >= 0 => State::Valid {
                hours: (diff_hours + diff_mins / 60) as u8,
                mins: (diff_mins % 60) as u8,
            },
            Overflow::Clamp => {
                #[cfg(feature = "defmt")]
                defmt::trace!("difference below 00:00, flooring");
                State::Valid { hours: 0, mins: 0 }
            }
        };
    }

    /// Advances by one minute under the current policy.
    pub fn add_minute(&mut self) {
        self.add_time(&ClockTime::new(0, 1));
    }

    /// Reversed ordering: true when both values are valid and `self` is
    /// strictly later in the day than `other`.
    ///
    /// Not a chronological "less than"; `ClockTime` has no `PartialOrd` so
    /// `<` cannot be mistaken for one.
    pub fn is_later_than(&self, other: &ClockTime) -> bool {
        match (self.state, other.state) {
            (
                State::Valid { hours, mins },
                State::Valid {
                    hours: other_hours,
                    mins: other_mins,
                },
            ) => (hours, mins) > (other_hours, other_mins),
            _ => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.state, State::Valid { .. })
    }

    pub fn set_invalid(&mut self) {
        self.state = State::Invalid;
    }
}

/// Compares the time only; the overflow policy is ignored.
impl PartialEq for ClockTime {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for ClockTime {}

impl Add for ClockTime {
    type Output = ClockTime;

    fn add(mut self, other: ClockTime) -> ClockTime {
        self.add_time(&other);
        self
    }
}

impl Sub for ClockTime {
    type Output = ClockTime;

    fn sub(mut self, other: ClockTime) -> ClockTime {
        self.subtract_time(&other);
        self
    }
}

impl AddAssign for ClockTime {
    fn add_assign(&mut self, other: ClockTime) {
        self.add_time(&other);
    }
}

impl SubAssign for ClockTime {
    fn sub_assign(&mut self, other: ClockTime) {
        self.subtract_time(&other);
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_time(f, self, crate::format::TIME_SEPARATOR)
    }
}
