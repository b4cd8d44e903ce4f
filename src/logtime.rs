//! Timestamps and monthly filenames for data loggers.
//!
//! [`LogTime`] does not talk to clock hardware itself. It asks a
//! [`CalendarSource`] (typically an RTC driver wrapper) for the current
//! calendar time and formats that.

use core::fmt::Write;

use heapless::String;

use crate::{ClockTime, Error};

/// Separator between fields of a CSV log line.
pub const CSV_SEPARATOR: char = ';';

/// Calendar date and time as read from a real-time clock.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarTime {
    pub year: u16,
    /// Month within the year, from 1 to 12.
    pub month: u8,
    /// Day within the month, from 1 to 31.
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Provider of the current calendar time.
pub trait CalendarSource {
    fn now(&self) -> CalendarTime;
}

impl<T: CalendarSource + ?Sized> CalendarSource for &T {
    fn now(&self) -> CalendarTime {
        (**self).now()
    }
}

/// Formats the time of a [`CalendarSource`] for log lines and file names.
pub struct LogTime<S> {
    source: S,
    prefix: Option<char>,
}

impl<S: CalendarSource> LogTime<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            prefix: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Sets the character prepended to [`current_filename`](Self::current_filename).
    pub fn set_prefix(&mut self, prefix: Option<char>) {
        self.prefix = prefix;
    }

    /// `YYYY-MM-DD HH:MM:SS` of the current time.
    ///
    /// With `filesys` the time fields are joined by `-` so the result can be
    /// part of a file name. With `brackets` the timestamp is wrapped in `[]`.
    pub fn iso_now(&self, filesys: bool, brackets: bool) -> Result<String<24>, Error> {
        let now = self.source.now();
        let sep = if filesys { '-' } else { ':' };
        let mut out = String::new();

        if brackets {
            out.push('[').map_err(|_| Error::Capacity)?;
        }
        write!(
            out,
            "{:04}-{:02}-{:02} {:02}{sep}{:02}{sep}{:02}",
            now.year, now.month, now.day, now.hour, now.minute, now.second
        )?;
        if brackets {
            out.push(']').map_err(|_| Error::Capacity)?;
        }
        Ok(out)
    }

    /// Name of the log file for the current month, `[prefix]YYYY-MM.csv`.
    pub fn current_filename(&self) -> Result<String<16>, Error> {
        let now = self.source.now();
        let mut out = String::new();
        if let Some(prefix) = self.prefix {
            out.push(prefix).map_err(|_| Error::Capacity)?;
        }
        write!(out, "{:04}-{:02}.csv", now.year, now.month)?;
        Ok(out)
    }

    pub fn year_month(&self) -> Result<String<8>, Error> {
        let now = self.source.now();
        let mut out = String::new();
        write!(out, "{:04}-{:02}", now.year, now.month)?;
        Ok(out)
    }

    pub fn year(&self) -> Result<String<5>, Error> {
        let mut out = String::new();
        write!(out, "{:04}", self.source.now().year)?;
        Ok(out)
    }

    /// Current time of day, without the date. Invalid if the source reports
    /// an hour or minute off the clock face.
    pub fn clock_time(&self) -> ClockTime {
        let now = self.source.now();
        if now.hour >= 24 || now.minute >= 60 {
            #[cfg(feature = "defmt")]
            defmt::warn!("calendar source reported {}:{}", now.hour, now.minute);
            return ClockTime::invalid();
        }
        ClockTime::new(now.hour, now.minute)
    }
}

/// Ends a CSV field.
pub fn append_separator<const N: usize>(text: &mut String<N>) -> Result<(), Error> {
    text.push(CSV_SEPARATOR).map_err(|_| Error::Capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FixedRtc(Cell<CalendarTime>);

    impl FixedRtc {
        fn at(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
            FixedRtc(Cell::new(CalendarTime {
                year,
                month,
                day,
                hour,
                minute,
                second,
            }))
        }
    }

    impl CalendarSource for FixedRtc {
        fn now(&self) -> CalendarTime {
            self.0.get()
        }
    }

    #[test]
    fn iso_timestamp_layouts() {
        let lt = LogTime::new(FixedRtc::at(2022, 11, 8, 7, 5, 9));
        assert_eq!(lt.iso_now(false, false).unwrap(), "2022-11-08 07:05:09");
        assert_eq!(lt.iso_now(true, false).unwrap(), "2022-11-08 07-05-09");
        assert_eq!(lt.iso_now(false, true).unwrap(), "[2022-11-08 07:05:09]");
        assert_eq!(lt.iso_now(true, true).unwrap(), "[2022-11-08 07-05-09]");
    }

    #[test]
    fn monthly_filename() {
        let mut lt = LogTime::new(FixedRtc::at(2023, 3, 31, 23, 59, 59));
        assert_eq!(lt.current_filename().unwrap(), "2023-03.csv");
        lt.set_prefix(Some('T'));
        assert_eq!(lt.current_filename().unwrap(), "T2023-03.csv");
        lt.set_prefix(None);
        assert_eq!(lt.current_filename().unwrap(), "2023-03.csv");
    }

    #[test]
    fn year_fields_are_zero_filled() {
        let lt = LogTime::new(FixedRtc::at(987, 1, 1, 0, 0, 0));
        assert_eq!(lt.year().unwrap(), "0987");
        assert_eq!(lt.year_month().unwrap(), "0987-01");
    }

    #[test]
    fn clock_time_follows_source() {
        let rtc = FixedRtc::at(2024, 6, 1, 18, 42, 30);
        let lt = LogTime::new(&rtc);
        assert_eq!(lt.clock_time(), ClockTime::new(18, 42));

        rtc.0.set(CalendarTime {
            hour: 6,
            minute: 3,
            ..rtc.0.get()
        });
        assert_eq!(lt.clock_time(), ClockTime::new(6, 3));
        assert_eq!(lt.source().now().hour, 6);
    }

    #[test]
    fn out_of_range_reading_is_invalid() {
        let rtc = FixedRtc::at(2024, 6, 1, 25, 10, 0);
        let lt = LogTime::new(&rtc);
        assert!(!lt.clock_time().is_valid());
        assert_eq!(crate::format::to_string(&lt.clock_time(), ':'), "--:--");

        rtc.0.set(CalendarTime {
            hour: 12,
            minute: 60,
            ..rtc.0.get()
        });
        assert!(!lt.clock_time().is_valid());

        rtc.0.set(CalendarTime {
            hour: 23,
            minute: 59,
            ..rtc.0.get()
        });
        assert_eq!(lt.clock_time(), ClockTime::new(23, 59));
    }

    #[test]
    fn builds_csv_line() {
        let lt = LogTime::new(FixedRtc::at(2022, 11, 18, 9, 30, 0));
        let mut line: String<48> = String::new();
        line.push_str(&lt.iso_now(false, false).unwrap()).unwrap();
        append_separator(&mut line).unwrap();
        line.push_str(&crate::format::to_string(&lt.clock_time(), ':')).unwrap();
        append_separator(&mut line).unwrap();
        assert_eq!(line, "2022-11-18 09:30:00;09:30;");
    }

    #[test]
    fn separator_reports_full_buffer() {
        let mut full: String<2> = String::new();
        full.push_str("ab").unwrap();
        assert_eq!(append_separator(&mut full), Err(Error::Capacity));
    }
}
