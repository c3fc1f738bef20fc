// SPDX-License-Identifier: MPL-2.0
//! Color schemes for the two appearances.
//!
//! Components reference colors by semantic slot (surface, text, brand,
//! semantic) rather than raw values, so switching appearance swaps the whole
//! scheme at once.

use super::Appearance;
use std::fmt;

/// 8-bit RGB color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// CSS-style `#rrggbb` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub mod palette {
    use super::Rgb;

    // Grayscale
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRAY_900: Rgb = Rgb::new(26, 26, 26);
    pub const GRAY_800: Rgb = Rgb::new(38, 38, 38);
    pub const GRAY_700: Rgb = Rgb::new(77, 77, 77);
    pub const GRAY_400: Rgb = Rgb::new(102, 102, 102);
    pub const GRAY_200: Rgb = Rgb::new(191, 191, 191);
    pub const GRAY_100: Rgb = Rgb::new(217, 217, 217);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Rgb = Rgb::new(102, 179, 255);
    pub const PRIMARY_500: Rgb = Rgb::new(77, 153, 230);
    pub const PRIMARY_600: Rgb = Rgb::new(51, 128, 204);

    // Semantic colors
    pub const ERROR_500: Rgb = Rgb::new(229, 57, 53);
    pub const WARNING_500: Rgb = Rgb::new(241, 166, 32);
    pub const SUCCESS_500: Rgb = Rgb::new(67, 179, 103);
    pub const INFO_500: Rgb = Rgb::new(100, 150, 255);
}

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Rgb,
    pub surface_secondary: Rgb,
    pub surface_tertiary: Rgb,

    // Text colors
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_tertiary: Rgb,

    // Brand colors
    pub brand_primary: Rgb,
    pub brand_secondary: Rgb,

    // Semantic colors
    pub error: Rgb,
    pub warning: Rgb,
    pub success: Rgb,
    pub info: Rgb,
}

impl ColorScheme {
    /// Light appearance scheme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Dark appearance scheme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_tertiary: Rgb::new(51, 51, 51),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Returns the scheme matching a resolved appearance.
    #[must_use]
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }
}
