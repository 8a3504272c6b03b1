// Theme state, passed explicitly to whoever renders.
//
// Responsibilities
// - Resolve the initial mode: persisted preference, then system preference, then time of day.
// - Expose a single mutation, `toggle_theme`. Persisting the result is the caller's job.

use crate::modules::theme::core::mode::ThemeMode;
use crate::modules::theme::core::palette::{Palette, palette_for};

const DARK_FROM_HOUR: u32 = 19;
const LIGHT_FROM_HOUR: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn init(
        persisted: Option<&str>,
        system_prefers_dark: Option<bool>,
        local_hour: u32,
    ) -> Self {
        let system = system_prefers_dark.map(|dark| {
            if dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        });
        let mode = persisted
            .and_then(ThemeMode::parse)
            .or(system)
            .unwrap_or_else(|| mode_for_hour(local_hour));
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &'static Palette {
        palette_for(self.mode)
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

fn mode_for_hour(hour: u32) -> ThemeMode {
    if (LIGHT_FROM_HOUR..DARK_FROM_HOUR).contains(&hour) {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}
