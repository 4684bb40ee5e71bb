//! Desktop host for the clock display.
//!
//! Plays the role of the device firmware's host services: it owns the
//! event loop, delivers a tick whenever the wall-clock second changes,
//! streams visible-area updates while a simulated system overlay slides
//! in, and paints only when the engine reports dirty state.
//!
//! # Controls
//!
//! - **Space**: Toggle 12/24-hour style
//! - **O**: Slide the system overlay in/out (obstruction transition)
//! - **Esc / close**: Quit

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use staticlock::{ClockFace, ClockTime, HostEvents, HourStyle, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Target frame interval (~30 FPS is plenty for a one-hertz display).
const FRAME_TIME: Duration = Duration::from_millis(33);

/// Visible height while the simulated system overlay is fully shown.
const OBSTRUCTED_HEIGHT: u32 = 117;

/// Frames per overlay transition.
const TRANSITION_STEPS: u32 = 14;

/// Host fixed-point progress at transition end.
const PROGRESS_MAX: i32 = 65_536;

/// Overlay fill, standing in for the system layer that obscures the app.
const OVERLAY_COLOR: Rgb565 = Rgb565::new(8, 16, 8);

/// Simulated system-overlay transition state.
enum Overlay {
    Hidden,
    /// `step` frames into the transition; `showing` is the direction.
    Sliding { step: u32, showing: bool },
    Shown,
}

impl Overlay {
    /// Visible app height for the current state.
    fn visible_height(&self) -> u32 {
        match self {
            Self::Hidden => SCREEN_HEIGHT,
            Self::Shown => OBSTRUCTED_HEIGHT,
            Self::Sliding { step, showing } => {
                let travel = (SCREEN_HEIGHT - OBSTRUCTED_HEIGHT) * step / TRANSITION_STEPS;
                if *showing { SCREEN_HEIGHT - travel } else { OBSTRUCTED_HEIGHT + travel }
            }
        }
    }
}

/// Broken-down seconds-of-day from the system clock (UTC).
fn wall_clock_time() -> ClockTime {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let of_day = secs % 86_400;
    ClockTime::new((of_day / 3600) as u8, ((of_day / 60) % 60) as u8, (of_day % 60) as u8)
}

fn main() {
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("staticlock", &output_settings);

    let full_bounds = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut face = ClockFace::new(full_bounds, wall_clock_time());

    let mut style = HourStyle::H24;
    let mut overlay = Overlay::Hidden;
    let mut last_tick = face.time();

    'running: loop {
        // Tick service: fire once whenever the wall-clock second changes
        let now = wall_clock_time();
        if now != last_tick {
            last_tick = now;
            face.on_tick(now);
        }

        // Obstruction service: stream bounds while the overlay slides
        if let Overlay::Sliding { step, showing } = overlay {
            let step = step + 1;
            overlay = if step >= TRANSITION_STEPS {
                if showing { Overlay::Shown } else { Overlay::Hidden }
            } else {
                Overlay::Sliding { step, showing }
            };

            let bounds = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, overlay.visible_height()));
            let progress = (step * PROGRESS_MAX as u32 / TRANSITION_STEPS) as i32;
            face.on_area_changing(progress, bounds);
            if !matches!(overlay, Overlay::Sliding { .. }) {
                face.on_area_changed();
            }
        }

        if face.needs_paint() {
            face.paint(&mut display, style);

            // Composite the pretend system overlay on top
            let covered = SCREEN_HEIGHT - overlay.visible_height();
            if covered > 0 {
                Rectangle::new(
                    Point::new(0, overlay.visible_height() as i32),
                    Size::new(SCREEN_WIDTH, covered),
                )
                .into_styled(PrimitiveStyle::with_fill(OVERLAY_COLOR))
                .draw(&mut display)
                .ok();
            }
        }

        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Escape => break 'running,
                    Keycode::Space => {
                        style = if style.is_24h() { HourStyle::H12 } else { HourStyle::H24 };
                        face.request_redraw();
                    }
                    Keycode::O => {
                        overlay = match overlay {
                            Overlay::Hidden => Overlay::Sliding { step: 0, showing: true },
                            Overlay::Shown => Overlay::Sliding { step: 0, showing: false },
                            sliding @ Overlay::Sliding { .. } => sliding,
                        };
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        thread::sleep(FRAME_TIME);
    }
}
