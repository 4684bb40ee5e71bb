//! Clock-over-static display engine.
//!
//! Renders the current time as large centered digits over a procedurally
//! generated "TV static" background that changes once per second, in
//! lock-step with the clock. The engine is event-driven: the host delivers
//! tick and visible-area callbacks, raises nothing itself, and paints only
//! when the engine reports dirty state.
//!
//! # Architecture
//!
//! - [`time`]: broken-down wall-clock time and label formatting
//! - [`background`]: seed-deterministic static-field painter
//! - [`clock`]: centered time-label painter
//! - [`layout`]: region geometry tracking host visible-area reports
//! - [`render`]: per-layer dirty flags and the paint lifecycle
//! - [`app`]: the [`ClockFace`] render context tying it all together
//!
//! # Testing
//!
//! The library is `no_std` for firmware targets but tests run on the host
//! with the standard test framework:
//!
//! ```bash
//! cargo test
//! ```
//!
//! A desktop host is available behind the `simulator` feature (needs
//! SDL2):
//!
//! ```bash
//! cargo run --features simulator --bin simulator
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod app;
pub mod background;
pub mod clock;
pub mod colors;
pub mod config;
pub mod layout;
pub mod render;
pub mod time;

pub use app::{ClockFace, HostEvents};
pub use background::draw_static_field;
pub use clock::{Backdrop, draw_clock, vertical_text_origin};
pub use colors::{BLACK, MONO_PALETTE, PALETTE, WHITE};
pub use config::{FONT_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use layout::{LayoutController, ObstructionState};
pub use render::RenderState;
pub use time::{ClockTime, HourStyle, TimeLabel, format_time};
