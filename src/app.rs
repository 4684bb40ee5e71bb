//! The clock-face render context and its host event seam.
//!
//! [`ClockFace`] owns everything the display needs: the last observed
//! time, the per-layer regions, and the dirty flags. The host drives it
//! through [`HostEvents`] (tick and visible-area callbacks) and calls
//! [`ClockFace::paint`] whenever it decides to service the dirty state,
//! passing the 12/24-hour setting fresh on every call.
//!
//! All of it runs on the host's single event context: every entry point
//! takes `&mut self`, no handler blocks, and painting completes in
//! bounded time for fixed geometry.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::background::draw_static_field;
use crate::clock::{Backdrop, draw_clock};
use crate::colors::PALETTE;
use crate::layout::LayoutController;
use crate::render::RenderState;
use crate::time::{ClockTime, HourStyle};

// =============================================================================
// Host Event Seam
// =============================================================================

/// Callbacks the host event loop delivers to the engine.
///
/// Mirrors the host services this display subscribes to: a once-per-second
/// tick carrying broken-down local time, and visible-area updates while a
/// system overlay transitions over the screen.
pub trait HostEvents {
    /// A tick fired. `time` is host-guaranteed valid; if the host
    /// coalesced missed ticks, this is simply the latest value.
    fn on_tick(
        &mut self,
        time: ClockTime,
    );

    /// The visible area is changing; fires repeatedly during a
    /// transition. `progress` is the host's fixed-point transition
    /// progress (0..=65536).
    fn on_area_changing(
        &mut self,
        progress: i32,
        bounds: Rectangle,
    );

    /// The visible-area transition settled.
    fn on_area_changed(&mut self);
}

// =============================================================================
// Clock Face
// =============================================================================

/// The complete render engine for one display surface.
pub struct ClockFace {
    time: ClockTime,
    layout: LayoutController,
    render: RenderState,
    palette: &'static [Rgb565],
    backdrop: Backdrop,
}

impl ClockFace {
    /// Create the engine for the given visible bounds.
    ///
    /// `initial_time` comes from the host clock so the first paint is
    /// correct before any tick arrives. Defaults to the full color
    /// palette and a transparent clock layer; see [`Self::set_palette`]
    /// and [`Self::set_backdrop`] for the hardware variants.
    pub fn new(
        bounds: Rectangle,
        initial_time: ClockTime,
    ) -> Self {
        Self {
            time: initial_time,
            layout: LayoutController::new(bounds),
            render: RenderState::new(),
            palette: &PALETTE,
            backdrop: Backdrop::default(),
        }
    }

    /// Restrict the background strokes to a different palette
    /// (e.g. [`crate::colors::MONO_PALETTE`] on monochrome hardware).
    pub fn set_palette(
        &mut self,
        palette: &'static [Rgb565],
    ) {
        self.palette = palette;
        self.render.mark_background_dirty();
    }

    /// Select the clock layer's backdrop variant.
    pub fn set_backdrop(
        &mut self,
        backdrop: Backdrop,
    ) {
        self.backdrop = backdrop;
        self.render.mark_clock_dirty();
    }

    /// Most recently observed time.
    #[inline]
    pub const fn time(&self) -> ClockTime { self.time }

    /// Region geometry, for hosts that composite additional layers.
    #[inline]
    pub const fn layout(&self) -> &LayoutController { &self.layout }

    /// Whether the host should schedule a paint.
    #[inline]
    pub const fn needs_paint(&self) -> bool { self.render.needs_paint() }

    /// Request a full repaint without new state (e.g. the host's
    /// 12/24-hour setting changed).
    pub fn request_redraw(&mut self) { self.render.mark_all_dirty(); }

    /// Paint both layers back-to-front and lower the dirty flags.
    ///
    /// Reads the *current* time: the host may have coalesced several
    /// dirty-raises into this one call. `style` is the host's 12/24-hour
    /// setting, queried by the caller at paint time and never cached
    /// here.
    pub fn paint<D>(
        &mut self,
        display: &mut D,
        style: HourStyle,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_static_field(
            display,
            self.layout.background_region(),
            self.time.pattern_seed(),
            self.palette,
        );
        draw_clock(display, self.layout.clock_region(), &self.time, style, self.backdrop);

        self.render.end_frame();
    }
}

impl HostEvents for ClockFace {
    fn on_tick(
        &mut self,
        time: ClockTime,
    ) {
        self.time = time;
        // The background is seeded from the time, so a tick dirties both layers
        self.render.mark_background_dirty();
        self.render.mark_clock_dirty();
    }

    fn on_area_changing(
        &mut self,
        progress: i32,
        bounds: Rectangle,
    ) {
        self.layout.area_changing(progress, bounds);
        self.render.mark_all_dirty();
    }

    fn on_area_changed(&mut self) { self.layout.area_changed(); }
}

// =============================================================================
// Unit Tests
// =============================================================================
