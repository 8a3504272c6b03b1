use serde::Serialize;

use crate::modules::theme::core::mode::ThemeMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub bg: &'static str,
    pub bg_secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub button: &'static str,
    pub button_hover: &'static str,
}

pub const LIGHT: Palette = Palette {
    bg: "#ffffff",
    bg_secondary: "#f8f9fa",
    text: "#1a1a1a",
    text_secondary: "#666666",
    accent: "#3333ff",
    card: "#ffffff",
    border: "#e0e0e0",
    button: "#3333ff",
    button_hover: "#2525cc",
};

pub const DARK: Palette = Palette {
    bg: "#0a0a0a",
    bg_secondary: "#161515",
    text: "#e7e7e7",
    text_secondary: "#a0a0a0",
    accent: "#7eadfc",
    card: "#161515",
    border: "#2a2a2a",
    button: "#7eadfc",
    button_hover: "#5d8dd9",
};

pub fn palette_for(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
