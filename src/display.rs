use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::clock::ClockTime;
use crate::font::{COLON, DASH, FONT};
use crate::format::{self, TIME_SEPARATOR};

/// Font indices for `HH:MM`, or `--:--` when the time is invalid.
pub fn glyphs(clock: &ClockTime) -> [u8; 5] {
    if !clock.is_valid() {
        return [DASH, DASH, COLON, DASH, DASH];
    }
    let (hours, mins) = (clock.hours(), clock.mins());
    [hours / 10, hours % 10, COLON, mins / 10, mins % 10]
}

/// Prepares the 8x8 buffers for the 4 chained MAX7219 devices using FC16 layout.
///
/// Entry `n` goes to device `n` of the chain, leftmost first.
pub fn prepare_buffer(clock: &ClockTime) -> [[u8; 8]; 4] {
    let mut fb_rows = [0u32; 8];
    let mut cursor: usize = 0; // Start at col 0

    for &d in glyphs(clock).iter() {
        for (r, row) in fb_rows.iter_mut().enumerate() {
            for c in 0..3 {
                if (FONT[d as usize][r] >> (2 - c)) & 1 != 0 {
                    *row |= 1 << (31 - (cursor + c));
                }
            }
        }
        // 3 columns per glyph, 1 blank
        cursor += 4;
    }

    let mut device_buffers = [[0u8; 8]; 4];
    for (dev_idx, buffer) in device_buffers.iter_mut().enumerate() {
        let shift = 24 - (dev_idx * 8);
        for (r, byte) in buffer.iter_mut().enumerate() {
            *byte = ((fb_rows[r] >> shift) & 0xFF) as u8;
        }
    }

    device_buffers
}

/// Draws the time with a 6x10 mono font, top-left at `origin`.
///
/// Returns the position following the text.
pub fn draw<D>(clock: &ClockTime, target: &mut D, origin: Point) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text = format::to_string(clock, TIME_SEPARATOR);
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    Text::with_baseline(&text, origin, style, Baseline::Top).draw(target)
}
