//! Time-label rendering.
//!
//! Formats the stored time and paints it centered in the clock region
//! with a 58 px numeric face. Horizontal centering is delegated to the
//! font renderer; vertical centering is computed against the face's fixed
//! glyph height so no per-frame metric queries are needed.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};
use u8g2_fonts::{FontRenderer, fonts};

use crate::colors::{BLACK, WHITE};
use crate::config::FONT_HEIGHT;
use crate::time::{ClockTime, HourStyle, format_time};

/// Whether the clock paints its own opaque backdrop or floats over the
/// background layer.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backdrop {
    /// Fill the clock region black before drawing, guaranteeing contrast
    /// regardless of what is beneath.
    Opaque,

    /// Draw the digits directly over whatever the background layer
    /// painted.
    #[default]
    Transparent,
}

/// Vertical text origin that centers a fixed-height glyph row in a region
/// of the given height.
pub const fn vertical_text_origin(region_height: u32) -> i32 {
    (region_height as i32 - FONT_HEIGHT as i32) / 2
}

/// Paint the time label centered in `region`.
pub fn draw_clock<D>(
    display: &mut D,
    region: Rectangle,
    time: &ClockTime,
    style: HourStyle,
    backdrop: Backdrop,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let label = format_time(time, style);

    if backdrop == Backdrop::Opaque {
        region.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(display).ok();
    }

    let origin = Point::new(
        region.top_left.x + region.size.width as i32 / 2,
        region.top_left.y + vertical_text_origin(region.size.height),
    );

    let font = FontRenderer::new::<fonts::u8g2_font_logisoso58_tn>();
    font.render_aligned(
        label.as_str(),
        origin,
        VerticalPosition::Top,
        HorizontalAlignment::Center,
        FontColor::Transparent(WHITE),
        display,
    )
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
