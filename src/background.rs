//! Procedural "TV static" background.
//!
//! Fills a region with short horizontal line segments at pseudo-random
//! positions and colors. The generator is reseeded from the current time
//! on every paint, so the pattern is a pure function of (region, seed):
//! repainting within the same second reproduces the identical frame, and
//! each new second deterministically produces a fresh one. No entropy
//! source is involved and nothing is allocated.
//!
//! Row skips are drawn from the remaining height rather than a fixed
//! range, so line density thins toward the bottom of the region.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use rand_xoshiro::Xoroshiro128StarStar;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};

use crate::colors::BLACK;

/// Paint the static field over `region`.
///
/// Base fill is black. On each visited scanline, one segment per column
/// position is drawn with both endpoints at independent random x
/// coordinates on that row; half the segments use the neutral (black)
/// stroke, a visual no-op that tunes the density, and the rest draw a
/// uniformly chosen `palette` entry. Runs in time proportional to the
/// region area.
pub fn draw_static_field<D>(
    display: &mut D,
    region: Rectangle,
    seed: u32,
    palette: &[Rgb565],
) where
    D: DrawTarget<Color = Rgb565>,
{
    region.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(display).ok();

    let width = region.size.width;
    let height = region.size.height;
    if width == 0 || height == 0 || palette.is_empty() {
        return;
    }

    let mut rng = Xoroshiro128StarStar::seed_from_u64(u64::from(seed));

    let mut row: u32 = 0;
    while row < height {
        // Skip ahead a random number of rows, bounded by what remains
        row += rng.next_u32() % (height - row);
        let y = region.top_left.y + row as i32;

        for _ in 0..width {
            let color = if rng.next_u32() % 2 == 0 {
                BLACK
            } else {
                palette[rng.next_u32() as usize % palette.len()]
            };

            let start = Point::new(region.top_left.x + (rng.next_u32() % width) as i32, y);
            let end = Point::new(region.top_left.x + (rng.next_u32() % width) as i32, y);
            Line::new(start, end)
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(display)
                .ok();
        }

        row += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::primitives::ContainsPoint;

    use super::*;
    use crate::colors::{MONO_PALETTE, PALETTE};

    fn render(
        region: Rectangle,
        seed: u32,
        palette: &[Rgb565],
    ) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_static_field(&mut display, region, seed, palette);
        display
    }

    fn test_region() -> Rectangle { Rectangle::new(Point::new(4, 4), Size::new(48, 48)) }

    #[test]
    fn test_same_seed_is_byte_identical() {
        let first = render(test_region(), 30, &PALETTE);
        let second = render(test_region(), 30, &PALETTE);
        assert_eq!(first, second, "same (region, seed) must reproduce the frame");
    }

    #[test]
    fn test_next_second_changes_pattern() {
        let first = render(test_region(), 30, &PALETTE);
        let second = render(test_region(), 61, &PALETTE);
        assert_ne!(first, second, "a new seed must produce a different frame");
    }

    #[test]
    fn test_repeated_seed_reproduces_first_pattern() {
        // Tick to 20:10, then 20:41, then back to a 20:10-equivalent seed
        let first = render(test_region(), 30, &PALETTE);
        let _other = render(test_region(), 61, &PALETTE);
        let again = render(test_region(), 30, &PALETTE);
        assert_eq!(first, again);
    }

    #[test]
    fn test_output_confined_to_region() {
        let display = render(test_region(), 7, &PALETTE);
        let painted = display.affected_area();
        assert!(
            test_region().contains(painted.top_left),
            "painting must not escape the region"
        );
        let bottom_right = painted.bottom_right().unwrap_or(painted.top_left);
        assert!(test_region().contains(bottom_right));
    }

    #[test]
    fn test_monochrome_palette_renders() {
        let first = render(test_region(), 42, &MONO_PALETTE);
        let second = render(test_region(), 42, &MONO_PALETTE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_region_paints_nothing() {
        let mut display = MockDisplay::<Rgb565>::new();
        draw_static_field(&mut display, Rectangle::new(Point::zero(), Size::zero()), 30, &PALETTE);
        assert_eq!(display.affected_area(), Rectangle::zero());
    }
}
