// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

mod clock;
mod drag_area;
mod help;
mod localize;
mod menu;
mod registry;
mod shell;
mod window;
mod zones;

use cosmic::{Application, iced::Size};
use cosmic_config::CosmicConfigEntry;
use cosmic_floating_clock_config::FloatingClockConfig;
use window::FloatingClock;

pub fn run() -> cosmic::iced::Result {
    localize::localize();

    let settings = cosmic::app::Settings::default()
        .client_decorations(true)
        .transparent(true)
        .autosize(true)
        .resizable(None)
        .size(Size::new(260.0, 60.0));

    cosmic::app::run::<FloatingClock>(settings, load_config())
}

fn load_config() -> FloatingClockConfig {
    match cosmic_config::Config::new(FloatingClock::APP_ID, FloatingClockConfig::VERSION) {
        Ok(config) => FloatingClockConfig::get_entry(&config).unwrap_or_else(|(errors, config)| {
            for err in errors {
                tracing::debug!(?err, "Using default for config entry");
            }
            config
        }),
        Err(err) => {
            tracing::warn!(?err, "Failed to open config; using defaults");
            FloatingClockConfig::default()
        }
    }
}
