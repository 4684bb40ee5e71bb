//! Color constants and the hardware palette.
//!
//! The target hardware exposes a fixed 64-color palette: 2 bits per channel,
//! i.e. every combination of {0, 85, 170, 255} per channel, quantized here to
//! the Rgb565 levels {0, 10, 21, 31} (red/blue) and {0, 21, 42, 63} (green).
//! The table is indexed by `(r << 4) | (g << 2) | b` with 2-bit channel
//! values and must stay in that order: the background generator draws
//! uniformly from it, and the pattern for a given seed depends on the
//! indexing.
//!
//! Monochrome hardware uses [`MONO_PALETTE`] instead.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Base Colors
// =============================================================================

/// Pure black. Base fill of the background and the neutral stroke color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Clock digits.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Hardware Palettes
// =============================================================================

/// Full 64-color palette of color-capable hardware.
#[rustfmt::skip]
pub const PALETTE: [Rgb565; 64] = [
    // r = 0
    Rgb565::new(0, 0, 0),   Rgb565::new(0, 0, 10),   Rgb565::new(0, 0, 21),   Rgb565::new(0, 0, 31),
    Rgb565::new(0, 21, 0),  Rgb565::new(0, 21, 10),  Rgb565::new(0, 21, 21),  Rgb565::new(0, 21, 31),
    Rgb565::new(0, 42, 0),  Rgb565::new(0, 42, 10),  Rgb565::new(0, 42, 21),  Rgb565::new(0, 42, 31),
    Rgb565::new(0, 63, 0),  Rgb565::new(0, 63, 10),  Rgb565::new(0, 63, 21),  Rgb565::new(0, 63, 31),
    // r = 85
    Rgb565::new(10, 0, 0),  Rgb565::new(10, 0, 10),  Rgb565::new(10, 0, 21),  Rgb565::new(10, 0, 31),
    Rgb565::new(10, 21, 0), Rgb565::new(10, 21, 10), Rgb565::new(10, 21, 21), Rgb565::new(10, 21, 31),
    Rgb565::new(10, 42, 0), Rgb565::new(10, 42, 10), Rgb565::new(10, 42, 21), Rgb565::new(10, 42, 31),
    Rgb565::new(10, 63, 0), Rgb565::new(10, 63, 10), Rgb565::new(10, 63, 21), Rgb565::new(10, 63, 31),
    // r = 170
    Rgb565::new(21, 0, 0),  Rgb565::new(21, 0, 10),  Rgb565::new(21, 0, 21),  Rgb565::new(21, 0, 31),
    Rgb565::new(21, 21, 0), Rgb565::new(21, 21, 10), Rgb565::new(21, 21, 21), Rgb565::new(21, 21, 31),
    Rgb565::new(21, 42, 0), Rgb565::new(21, 42, 10), Rgb565::new(21, 42, 21), Rgb565::new(21, 42, 31),
    Rgb565::new(21, 63, 0), Rgb565::new(21, 63, 10), Rgb565::new(21, 63, 21), Rgb565::new(21, 63, 31),
    // r = 255
    Rgb565::new(31, 0, 0),  Rgb565::new(31, 0, 10),  Rgb565::new(31, 0, 21),  Rgb565::new(31, 0, 31),
    Rgb565::new(31, 21, 0), Rgb565::new(31, 21, 10), Rgb565::new(31, 21, 21), Rgb565::new(31, 21, 31),
    Rgb565::new(31, 42, 0), Rgb565::new(31, 42, 10), Rgb565::new(31, 42, 21), Rgb565::new(31, 42, 31),
    Rgb565::new(31, 63, 0), Rgb565::new(31, 63, 10), Rgb565::new(31, 63, 21), Rgb565::new(31, 63, 31),
];

/// Two-entry palette for monochrome hardware.
pub const MONO_PALETTE: [Rgb565; 2] = [BLACK, WHITE];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_corners() {
        assert_eq!(PALETTE[0], BLACK, "index 0 must be black");
        assert_eq!(PALETTE[63], WHITE, "index 63 must be white");
    }

    #[test]
    fn test_palette_index_order() {
        // (r << 4) | (g << 2) | b with 2-bit channels
        assert_eq!(PALETTE[0b11_00_00], Rgb565::new(31, 0, 0)); // red
        assert_eq!(PALETTE[0b00_11_00], Rgb565::new(0, 63, 0)); // green
        assert_eq!(PALETTE[0b00_00_11], Rgb565::new(0, 0, 31)); // blue
    }

    #[test]
    fn test_palette_is_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b, "palette entries must be distinct");
            }
        }
    }

    #[test]
    fn test_mono_palette() {
        assert_eq!(MONO_PALETTE, [BLACK, WHITE]);
    }
}
