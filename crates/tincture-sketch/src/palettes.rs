//! Built-in five-color palettes, packed as `0xRRGGBB` sRGB.
//!
//! Entry 0 is the default look; the rest are selectable with `--palette`.

use tincture_engine::paint::Color;
use tincture_engine::render::PALETTE_LEN;

pub const PALETTES: &[[u32; PALETTE_LEN]] = &[
    [0xBEEF9E, 0x6E8898, 0xA6C36F, 0x1E352F, 0x5A2328],
    [0x69D2E7, 0xA7DBD8, 0xE0E4CC, 0xF38630, 0xFA6900],
    [0xFE4365, 0xFC9D9A, 0xF9CDAD, 0xC8C8A9, 0x83AF9B],
    [0xECD078, 0xD95B43, 0xC02942, 0x542437, 0x53777A],
    [0x556270, 0x4ECDC4, 0xC7F464, 0xFF6B6B, 0xC44D58],
    [0x774F38, 0xE08E79, 0xF1D4AF, 0xECE5CE, 0xC5E0DC],
    [0xE8DDCB, 0xCDB380, 0x036564, 0x033649, 0x031634],
    [0x490A3D, 0xBD1550, 0xE97F02, 0xF8CA00, 0x8A9B0F],
];

/// Returns palette `index` as linear colors, or `None` past the table end.
pub fn palette(index: usize) -> Option<[Color; PALETTE_LEN]> {
    PALETTES.get(index).map(|hex| hex.map(Color::from_srgb_hex))
}
