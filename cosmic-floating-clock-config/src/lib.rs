// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

/// Lowest opacity offered by the transparency menu.
pub const MIN_OPACITY: f32 = 0.1;
pub const DEFAULT_OPACITY: f32 = 0.7;
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Startup defaults for the floating clock.
///
/// The clock only ever reads this entry. Rows added or removed and opacity
/// picked from the menu live for the current session and are never written
/// back.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq, serde::Deserialize, serde::Serialize)]
#[version = 1]
pub struct FloatingClockConfig {
    pub opacity: f32,
    #[serde(default)]
    pub timezones: Vec<String>,
}

impl Default for FloatingClockConfig {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            timezones: vec![DEFAULT_TIMEZONE.to_owned()],
        }
    }
}

impl FloatingClockConfig {
    /// Opacity clamped to the range the window accepts.
    pub fn opacity(&self) -> f32 {
        if self.opacity.is_finite() {
            self.opacity.clamp(MIN_OPACITY, 1.0)
        } else {
            DEFAULT_OPACITY
        }
    }

    /// Timezones to open with, trimmed and without blank entries. Never empty.
    pub fn initial_timezones(&self) -> Vec<&str> {
        let timezones: Vec<&str> = self
            .timezones
            .iter()
            .map(|tz| tz.trim())
            .filter(|tz| !tz.is_empty())
            .collect();

        if timezones.is_empty() {
            vec![DEFAULT_TIMEZONE]
        } else {
            timezones
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_one_utc_row() {
        let config = FloatingClockConfig::default();
        assert_eq!(config.initial_timezones(), vec!["UTC"]);
        assert_eq!(config.opacity(), DEFAULT_OPACITY);
    }

    #[test]
    fn blank_timezones_are_dropped() {
        let config = FloatingClockConfig {
            timezones: vec![
                " Asia/Tokyo ".to_owned(),
                String::new(),
                "   ".to_owned(),
                "UTC".to_owned(),
            ],
            ..Default::default()
        };
        assert_eq!(config.initial_timezones(), vec!["Asia/Tokyo", "UTC"]);
    }

    #[test]
    fn empty_timezone_list_falls_back_to_utc() {
        let config = FloatingClockConfig {
            timezones: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.initial_timezones(), vec![DEFAULT_TIMEZONE]);
    }

    #[test]
    fn blank_entries_set_by_hand_are_skipped() {
        let config = FloatingClockConfig {
            timezones: vec!["  ".to_owned(), "Europe/London".to_owned()],
            ..Default::default()
        };
        assert_eq!(config.initial_timezones(), vec!["Europe/London"]);
    }

    #[test]
    fn opacity_is_clamped() {
        let mut config = FloatingClockConfig {
            opacity: 0.0,
            ..Default::default()
        };
        assert_eq!(config.opacity(), MIN_OPACITY);

        config.opacity = 3.0;
        assert_eq!(config.opacity(), 1.0);

        config.opacity = f32::NAN;
        assert_eq!(config.opacity(), DEFAULT_OPACITY);
    }
}
