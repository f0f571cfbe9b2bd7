//! Categorical color palette.

use plotters::style::RGBColor;

/// The tableau10 scheme.
const TABLEAU10: [RGBColor; 10] = [
    RGBColor(0x4c, 0x78, 0xa8),
    RGBColor(0xf5, 0x85, 0x18),
    RGBColor(0xe4, 0x57, 0x56),
    RGBColor(0x72, 0xb7, 0xb2),
    RGBColor(0x54, 0xa2, 0x4b),
    RGBColor(0xee, 0xca, 0x3b),
    RGBColor(0xb2, 0x79, 0xa2),
    RGBColor(0xff, 0x9d, 0xa6),
    RGBColor(0x9d, 0x75, 0x5d),
    RGBColor(0xba, 0xb0, 0xac),
];

/// Color for a position in the category domain; wraps after ten.
pub fn category_color(index: usize) -> RGBColor {
    TABLEAU10[index % TABLEAU10.len()]
}

/// Color for marks without a category encoding.
pub fn default_color() -> RGBColor {
    TABLEAU10[0]
}
