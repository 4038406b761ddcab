//! Bitmap font atlas layout.
//!
//! `font.png` holds the 95 printable ASCII glyphs (32..=126) in a grid of 32
//! columns by 4 rows, left to right and top to bottom. Each glyph has a fixed
//! horizontal advance expressed in units of a 48-unit em.

use raylib::prelude::Rectangle;

pub const FIRST_GLYPH: u8 = 32;
pub const LAST_GLYPH: u8 = 126;
pub const ATLAS_COLUMNS: usize = 32;
pub const ATLAS_ROWS: usize = 4;
/// Advances are divided by this to get a fraction of the glyph quad width.
pub const EM_ADVANCE: f32 = 48.0;

#[rustfmt::skip]
const ADVANCES: [f32; 95] = [
    32.5156, 26.0312, 38.2344, 72.9531, 53.125, 86.625, 65.8281, 21.2344, 42.7188, 42.7188, 54.25, 53.9062, 19.2031, 57.125, 20.5156, 63.9219,
    91.7031, 35.4531, 75.25, 71.9219, 77.3438, 75.0469, 73.2031, 62.75, 74.125, 74.4219, 24.3125, 25.1406, 52.5469, 59.125, 52.5469, 66.5469,
    66.1094, 83.4531, 80.9062, 74.7031, 82.3281, 75.5312, 73.8281, 82.3281, 84.9062, 27.6406, 73.4375, 81.3438, 73.6406, 96.2344, 84.7188, 86.0312,
    80.6094, 86.0312, 82.7188, 77.0938, 72.6094, 83.3438, 77.25, 100.25, 78.7188, 78.125, 71.3438, 36.5312, 65.9219, 36.5312, 43.0156, 68.1094,
    55.7188, 65.3281, 69.0469, 61.2344, 70.0156, 65.3281, 54.7812, 69.0469, 70.3125, 25.0469, 25.0469, 69.1406, 31.3438, 87.3594, 69.625, 68.2188,
    69.0469, 69.0469, 54.5469, 59.0312, 56.3438, 69.625, 67.5312, 91.3125, 69.1406, 70.3125, 60.1094, 42.4375, 26.0312, 42.4375, 63.3281,
];

/// Atlas index of a character, or `None` if the atlas has no glyph for it.
pub fn glyph_index(c: char) -> Option<usize> {
    let code = u32::from(c);
    if (u32::from(FIRST_GLYPH)..=u32::from(LAST_GLYPH)).contains(&code) {
        Some((code - u32::from(FIRST_GLYPH)) as usize)
    } else {
        None
    }
}

/// Horizontal advance of a character in em units.
///
/// Characters missing from the atlas advance like a space.
pub fn advance(c: char) -> f32 {
    ADVANCES[glyph_index(c).unwrap_or(0)]
}

/// Source rectangle of a glyph inside an atlas texture of the given size.
pub fn glyph_rect(index: usize, atlas_width: f32, atlas_height: f32) -> Rectangle {
    let cell_w = atlas_width / ATLAS_COLUMNS as f32;
    let cell_h = atlas_height / ATLAS_ROWS as f32;
    Rectangle {
        x: (index % ATLAS_COLUMNS) as f32 * cell_w,
        y: (index / ATLAS_COLUMNS) as f32 * cell_h,
        width: cell_w,
        height: cell_h,
    }
}
