//! Region geometry kept in sync with host visible-area reports.
//!
//! When a system overlay slides over the display, the host streams
//! intermediate visible-bounds updates during the transition and one
//! settled notification at the end. Regions snap instantly to every
//! reported bounds; no interpolation is done here because the host
//! delivers many intermediate updates, which reads as smooth motion.

use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Obstruction State
// =============================================================================

/// Visible-area state machine.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ObstructionState {
    /// Steady state; the last reported bounds are current.
    #[default]
    Unobstructed,

    /// A system overlay is moving over the display and bounds updates are
    /// streaming in.
    Transitioning,
}

// =============================================================================
// Layout Controller
// =============================================================================

/// Owns the drawable regions and repositions them on visible-area changes.
///
/// The rendering layers are state-agnostic: they always paint into
/// whatever region is current.
pub struct LayoutController {
    state: ObstructionState,
    background_region: Rectangle,
    clock_region: Rectangle,
}

impl LayoutController {
    /// Create a layout with every region covering `bounds`.
    pub const fn new(bounds: Rectangle) -> Self {
        Self {
            state: ObstructionState::Unobstructed,
            background_region: bounds,
            clock_region: bounds,
        }
    }

    /// Current visible-area state.
    #[inline]
    pub const fn state(&self) -> ObstructionState { self.state }

    /// Region the background layer paints into.
    #[inline]
    pub const fn background_region(&self) -> Rectangle { self.background_region }

    /// Region the clock layer paints into.
    #[inline]
    pub const fn clock_region(&self) -> Rectangle { self.clock_region }

    /// Snap every owned region to the reported visible bounds.
    ///
    /// Fires repeatedly while an obstruction transition is in progress.
    /// `progress` is the host's fixed-point transition progress
    /// (0..=65536); it is accepted for contract compatibility and unused,
    /// since regions track the reported bounds directly.
    pub fn area_changing(
        &mut self,
        _progress: i32,
        bounds: Rectangle,
    ) {
        self.state = ObstructionState::Transitioning;
        self.background_region = bounds;
        self.clock_region = bounds;
    }

    /// The transition settled; return to the steady state.
    ///
    /// Reserved hook: no geometry work is needed because the regions
    /// already track the last reported bounds.
    pub fn area_changed(&mut self) { self.state = ObstructionState::Unobstructed; }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;

    fn full_bounds() -> Rectangle { Rectangle::new(Point::zero(), Size::new(144, 168)) }

    fn obstructed_bounds() -> Rectangle { Rectangle::new(Point::zero(), Size::new(144, 117)) }

    #[test]
    fn test_new_regions_cover_bounds() {
        let layout = LayoutController::new(full_bounds());
        assert_eq!(layout.background_region(), full_bounds());
        assert_eq!(layout.clock_region(), full_bounds());
        assert_eq!(layout.state(), ObstructionState::Unobstructed);
    }

    #[test]
    fn test_area_changing_snaps_every_region() {
        let mut layout = LayoutController::new(full_bounds());

        for progress in [0, 1, 32_768, 65_536] {
            layout.area_changing(progress, obstructed_bounds());
            assert_eq!(layout.background_region(), obstructed_bounds());
            assert_eq!(layout.clock_region(), obstructed_bounds());
        }
        assert_eq!(layout.state(), ObstructionState::Transitioning);
    }

    #[test]
    fn test_intermediate_bounds_never_go_stale() {
        let mut layout = LayoutController::new(full_bounds());

        // Host streams several intermediate bounds during the gesture
        for height in [160, 150, 138, 125, 117] {
            let bounds = Rectangle::new(Point::zero(), Size::new(144, height));
            layout.area_changing(0, bounds);
            assert_eq!(layout.background_region(), bounds);
            assert_eq!(layout.clock_region(), bounds);
        }
    }

    #[test]
    fn test_area_changed_returns_to_steady_state() {
        let mut layout = LayoutController::new(full_bounds());
        layout.area_changing(0, obstructed_bounds());
        layout.area_changed();

        assert_eq!(layout.state(), ObstructionState::Unobstructed);
        // Settling performs no geometry work
        assert_eq!(layout.background_region(), obstructed_bounds());
        assert_eq!(layout.clock_region(), obstructed_bounds());
    }
}
