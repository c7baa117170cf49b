use crate::error::{PcResult, PitchCallerError};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Luminance at or below this gets light text.
pub const CONTRAST_THRESHOLD: f64 = 140.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parses `#rrggbb` (the `#` is optional, case-insensitive).
    pub fn from_hex(hex: &str) -> PcResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PitchCallerError::Validation(format!(
                "Color '{}' is not a 6-digit hex RGB value",
                hex
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| {
                PitchCallerError::Validation(format!("Color '{}': {}", hex, e))
            })
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Perceived luminance, 0..=255.
    pub fn luminance(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }
}

/// Text color to draw on top of a category background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum TextTone {
    Light,
    Dark,
}

impl TextTone {
    pub fn for_background(bg: Rgb) -> Self {
        if bg.luminance() <= CONTRAST_THRESHOLD {
            TextTone::Light
        } else {
            TextTone::Dark
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            TextTone::Light => Rgb::WHITE,
            TextTone::Dark => Rgb::BLACK,
        }
    }
}

/// Contrast tone for a hex background. Unparseable colors get light text.
pub fn contrast_tone(hex: &str) -> TextTone {
    match Rgb::from_hex(hex) {
        Ok(rgb) => TextTone::for_background(rgb),
        Err(_) => TextTone::Light,
    }
}
