//! Text rendering of [`ClockTime`] into fixed-size buffers.

use core::fmt::{self, Write};

use heapless::String;

use crate::{ClockTime, Error};

/// Separator between hours and minutes of a time of day.
pub const TIME_SEPARATOR: char = ':';
/// Separator used when a `ClockTime` holds a duration.
pub const DURATION_SEPARATOR: char = '!';

pub(crate) fn write_time<W: Write>(out: &mut W, time: &ClockTime, separator: char) -> fmt::Result {
    if time.is_valid() {
        write!(out, "{:02}{}{:02}", time.hours(), separator, time.mins())
    } else {
        write!(out, "--{}--", separator)
    }
}

/// Renders `HH<sep>MM`, or `--<sep>--` for an invalid time.
pub fn to_string(time: &ClockTime, separator: char) -> String<9> {
    let mut out = String::new();
    // Two hour digits, at most three minute digits and a four-byte separator.
    let written = write_time(&mut out, time, separator);
    debug_assert!(written.is_ok());
    out
}

/// Like [`to_string`], writing into a caller-owned buffer.
pub fn write_into<'a>(buf: &'a mut [u8], time: &ClockTime, separator: char) -> Result<&'a str, Error> {
    let text = if time.is_valid() {
        format_no_std::show(
            buf,
            format_args!("{:02}{}{:02}", time.hours(), separator, time.mins()),
        )?
    } else {
        format_no_std::show(buf, format_args!("--{}--", separator))?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_two_digits() {
        assert_eq!(to_string(&ClockTime::new(7, 5), TIME_SEPARATOR), "07:05");
        assert_eq!(to_string(&ClockTime::new(23, 59), TIME_SEPARATOR), "23:59");
        assert_eq!(to_string(&ClockTime::new(0, 0), '-'), "00-00");
    }

    #[test]
    fn invalid_renders_dashes() {
        assert_eq!(to_string(&ClockTime::invalid(), TIME_SEPARATOR), "--:--");
        assert_eq!(to_string(&ClockTime::invalid(), DURATION_SEPARATOR), "--!--");
    }

    #[test]
    fn display_uses_time_separator() {
        assert_eq!(format!("{}", ClockTime::new(13, 7)), "13:07");
        assert_eq!(format!("{}", ClockTime::default()), "--:--");
    }

    #[test]
    fn unborrowed_clamped_difference_still_fits() {
        let mut t = ClockTime::new(2, 10);
        t.set_overflow(crate::Overflow::Clamp);
        let diff = t - ClockTime::new(2, 30);
        assert_eq!(to_string(&diff, '→'), "00→236");
    }

    #[test]
    fn wide_separator_fits() {
        assert_eq!(to_string(&ClockTime::new(1, 2), 'ø'), "01ø02");
        assert_eq!(to_string(&ClockTime::invalid(), '→'), "--→--");
    }

    #[test]
    fn writes_into_byte_buffer() {
        let mut buf = [0u8; 16];
        let text = write_into(&mut buf, &ClockTime::new(9, 41), DURATION_SEPARATOR).unwrap();
        assert_eq!(text, "09!41");

        let mut buf = [0u8; 16];
        assert_eq!(write_into(&mut buf, &ClockTime::invalid(), ':').unwrap(), "--:--");
    }

    #[test]
    fn short_buffer_is_a_capacity_error() {
        let mut buf = [0u8; 3];
        assert_eq!(
            write_into(&mut buf, &ClockTime::new(9, 41), TIME_SEPARATOR),
            Err(Error::Capacity)
        );
    }
}
