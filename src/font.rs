/// Glyph index of the colon.
pub const COLON: u8 = 10;
/// Glyph index of the dash shown for invalid digits.
pub const DASH: u8 = 11;

/// 3x8 glyphs for a single 8x8 matrix row band.
///
/// Each row is a 3-bit mask, bit 2 being the leftmost column. Glyphs occupy
/// rows 1 to 5.
pub const FONT: [[u8; 8]; 12] = [
    [0, 0b111, 0b101, 0b101, 0b101, 0b111, 0, 0], // 0
    [0, 0b010, 0b110, 0b010, 0b010, 0b111, 0, 0], // 1
    [0, 0b111, 0b001, 0b111, 0b100, 0b111, 0, 0], // 2
    [0, 0b111, 0b001, 0b111, 0b001, 0b111, 0, 0], // 3
    [0, 0b101, 0b101, 0b111, 0b001, 0b001, 0, 0], // 4
    [0, 0b111, 0b100, 0b111, 0b001, 0b111, 0, 0], // 5
    [0, 0b111, 0b100, 0b111, 0b101, 0b111, 0, 0], // 6
    [0, 0b111, 0b001, 0b001, 0b001, 0b001, 0, 0], // 7
    [0, 0b111, 0b101, 0b111, 0b101, 0b111, 0, 0], // 8
    [0, 0b111, 0b101, 0b111, 0b001, 0b111, 0, 0], // 9
    [0, 0b000, 0b010, 0b000, 0b010, 0b000, 0, 0], // :
    [0, 0b000, 0b000, 0b111, 0b000, 0b000, 0, 0], // -
];
