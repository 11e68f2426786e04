//! Classic 5x7 character cell font, limited to what barcodes print.

/// Width of a character cell, glyph plus one column of spacing.
pub const CELL_WIDTH: u32 = 6;
/// Height of a character cell, glyph plus one row of spacing.
pub const CELL_HEIGHT: u32 = 8;

/// Columns of a glyph from left to right, the least significant bit being the top row.
pub type Glyph = [u8; 5];

#[rustfmt::skip]
const DIGITS: [Glyph; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x72, 0x49, 0x49, 0x49, 0x46], // 2
    [0x21, 0x41, 0x49, 0x4D, 0x33], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x31], // 6
    [0x41, 0x21, 0x11, 0x09, 0x07], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x46, 0x49, 0x49, 0x29, 0x1E], // 9
];

/// Get the glyph of `c`. Characters without a glyph print as blank cells.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let digit = c.to_digit(10)?;
    DIGITS.get(digit as usize)
}
