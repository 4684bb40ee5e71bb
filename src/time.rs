//! Broken-down wall-clock time and the display label derived from it.
//!
//! The host delivers a valid [`ClockTime`] once per second; the engine
//! stores the latest value and formats a transient label at paint time.
//! Formatting follows the display convention of the original hardware: a
//! single leading zero is stripped from the hour field, so "9:30" rather
//! than "09:30" (and "0:05" rather than "00:05" in 24-hour style).

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted time label ("HH:MM").
pub const LABEL_LEN: usize = 5;

/// Fixed-capacity time label. Computed fresh each paint, never stored.
pub type TimeLabel = String<LABEL_LEN>;

// =============================================================================
// Clock Time
// =============================================================================

/// Broken-down local time with second resolution.
///
/// Host-guaranteed valid; no validation is performed here.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl ClockTime {
    /// Create a clock time from broken-down fields.
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self { hour, minute, second }
    }

    /// Seed for the background pattern generator.
    ///
    /// Changes every second, and two renders within the same second use the
    /// same seed. The hour does not participate, so the sequence of
    /// patterns repeats each hour.
    pub const fn pattern_seed(&self) -> u32 { self.minute as u32 + self.second as u32 }
}

// =============================================================================
// Hour Style
// =============================================================================

/// 12/24-hour display style, sourced from the host settings at paint time.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourStyle {
    /// 12-hour style ("1:00" for 13:00).
    H12,
    /// 24-hour style ("13:00").
    #[default]
    H24,
}

impl HourStyle {
    /// Map the host's boolean "is 24h" setting to a style.
    pub const fn from_24h(is_24h: bool) -> Self {
        if is_24h { Self::H24 } else { Self::H12 }
    }

    /// Check whether this is the 24-hour style.
    pub const fn is_24h(self) -> bool { matches!(self, Self::H24) }
}

// =============================================================================
// Label Formatting
// =============================================================================

/// Format `time` as the display label.
///
/// Produces zero-padded "HH:MM" (24-hour) or "hh:MM" (12-hour, hour 0
/// mapped to 12), then strips a single leading zero from the hour field.
/// Total function: the fixed-width format always fits [`LABEL_LEN`].
pub fn format_time(
    time: &ClockTime,
    style: HourStyle,
) -> TimeLabel {
    let hour = match style {
        HourStyle::H24 => time.hour,
        HourStyle::H12 => match time.hour % 12 {
            0 => 12,
            h => h,
        },
    };

    let mut padded = TimeLabel::new();
    let _ = write!(padded, "{:02}:{:02}", hour, time.minute);
    strip_leading_zero(&padded)
}

/// Strip one leading `'0'` from a padded label.
fn strip_leading_zero(label: &str) -> TimeLabel {
    let stripped = label.strip_prefix('0').unwrap_or(label);
    let mut out = TimeLabel::new();
    let _ = out.push_str(stripped);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_24h_strips_leading_zero() {
        let label = format_time(&ClockTime::new(9, 5, 0), HourStyle::H24);
        assert_eq!(label.as_str(), "9:05");
    }

    #[test]
    fn test_format_24h_two_digit_hour() {
        let label = format_time(&ClockTime::new(14, 5, 0), HourStyle::H24);
        assert_eq!(label.as_str(), "14:05");
    }

    #[test]
    fn test_format_24h_midnight() {
        // "00:00" loses exactly one zero, matching the original display
        let label = format_time(&ClockTime::new(0, 0, 0), HourStyle::H24);
        assert_eq!(label.as_str(), "0:00");
    }

    #[test]
    fn test_format_12h_midnight_is_twelve() {
        let label = format_time(&ClockTime::new(0, 0, 0), HourStyle::H12);
        assert_eq!(label.as_str(), "12:00");
    }

    #[test]
    fn test_format_12h_afternoon() {
        let label = format_time(&ClockTime::new(13, 0, 0), HourStyle::H12);
        assert_eq!(label.as_str(), "1:00");
    }

    #[test]
    fn test_format_12h_noon_is_twelve() {
        let label = format_time(&ClockTime::new(12, 30, 0), HourStyle::H12);
        assert_eq!(label.as_str(), "12:30");
    }

    #[test]
    fn test_format_minute_keeps_padding() {
        // Only the hour field is ever stripped
        let label = format_time(&ClockTime::new(9, 30, 0), HourStyle::H12);
        assert_eq!(label.as_str(), "9:30");
    }

    #[test]
    fn test_pattern_seed_is_minute_plus_second() {
        assert_eq!(ClockTime::new(0, 20, 10).pattern_seed(), 30);
        assert_eq!(ClockTime::new(0, 20, 41).pattern_seed(), 61);
    }

    #[test]
    fn test_pattern_seed_ignores_hour() {
        let morning = ClockTime::new(9, 15, 42);
        let evening = ClockTime::new(21, 15, 42);
        assert_eq!(morning.pattern_seed(), evening.pattern_seed());
    }

    #[test]
    fn test_hour_style_from_host_setting() {
        assert_eq!(HourStyle::from_24h(true), HourStyle::H24);
        assert_eq!(HourStyle::from_24h(false), HourStyle::H12);
        assert!(HourStyle::H24.is_24h());
        assert!(!HourStyle::H12.is_24h());
    }
}
