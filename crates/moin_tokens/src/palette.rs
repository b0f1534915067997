//! Ten-level color palettes generated from a single seed color
//!
//! Implements the Ant Design color algorithm: five tints and four shades
//! are produced by stepping hue, saturation and value away from the seed in
//! HSV space. For the dark scheme the light scale is re-blended onto the
//! dark canvas so level 1 sits closest to the background.
//!
//! Hue rotation can break the lightness order for bright warm seeds and
//! near-black seeds, so every generated scale is walked outward from the
//! base and levels out of order are blended towards white or black.

use crate::color::{Color, Hsv};
use crate::theme::ColorScheme;

/// Number of levels in a palette
pub const PALETTE_LEVELS: usize = 10;

/// Level holding the canonical base color
pub const BASE_LEVEL: usize = 6;

/// Minimum contrast between level 1 and the background
pub const CONTRAST_FLOOR: f32 = 1.03;

/// Default canvas for the dark scheme
pub const DARK_CANVAS: Color = Color::rgb(20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0);

const HUE_STEP: f32 = 2.0;
const SATURATION_STEP: f32 = 0.16;
const SATURATION_STEP_DARK: f32 = 0.05;
const BRIGHTNESS_STEP_LIGHT: f32 = 0.05;
const BRIGHTNESS_STEP_DARK: f32 = 0.15;
const LIGHT_COLOR_COUNT: u32 = 5;
const DARK_COLOR_COUNT: u32 = 4;
const ORDER_STEPS: u32 = 20;

/// `(light level, blend amount)` for each dark level
const DARK_COLOR_MAP: [(usize, f32); PALETTE_LEVELS] = [
    (7, 0.15),
    (6, 0.25),
    (5, 0.30),
    (5, 0.45),
    (5, 0.65),
    (5, 0.85),
    (4, 0.90),
    (3, 0.95),
    (2, 0.97),
    (1, 0.98),
];

/// Ordered scale of ten shades for one seed color
///
/// In the light scheme lightness decreases from level 1 to level 10; in the
/// dark scheme it increases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
    scheme: ColorScheme,
    colors: [Color; PALETTE_LEVELS],
}

impl ColorPalette {
    /// Generate the palette for `seed`.
    ///
    /// `background` is the canvas the palette is displayed on. The dark scale
    /// is blended towards it and level 1 is kept at least
    /// [`CONTRAST_FLOOR`] away from it.
    pub fn generate(seed: Color, scheme: ColorScheme, background: Color) -> Self {
        let seed = seed.clamped();
        let background = background.clamped();
        let hsv = seed.to_hsv();

        let mut light = [seed; PALETTE_LEVELS];
        for (slot, i) in (1..=LIGHT_COLOR_COUNT).rev().enumerate() {
            light[slot] = step_color(hsv, i, true);
        }
        for i in 1..=DARK_COLOR_COUNT {
            light[BASE_LEVEL - 1 + i as usize] = step_color(hsv, i, false);
        }

        let mut colors = match scheme {
            ColorScheme::Light => light,
            ColorScheme::Dark => {
                DARK_COLOR_MAP.map(|(level, amount)| background.mix(light[level - 1], amount))
            }
        };

        enforce_lightness_order(&mut colors, scheme, background);
        enforce_contrast_floor(&mut colors, scheme, background);

        Self {
            scheme,
            colors: colors.map(Color::clamped),
        }
    }

    /// Default canvas a scheme's palettes are generated against
    pub fn default_background(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Light => Color::WHITE,
            ColorScheme::Dark => DARK_CANVAS,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Color at `level` (1-based); out-of-range levels yield the base color.
    pub fn level(&self, level: usize) -> Color {
        if (1..=PALETTE_LEVELS).contains(&level) {
            self.colors[level - 1]
        } else {
            self.base()
        }
    }

    pub fn base(&self) -> Color {
        self.colors[BASE_LEVEL - 1]
    }

    /// Interaction hover color: one step lighter in light, brighter in dark.
    pub fn hover(&self) -> Color {
        match self.scheme {
            ColorScheme::Light => self.level(BASE_LEVEL - 1),
            ColorScheme::Dark => self.level(BASE_LEVEL + 1),
        }
    }

    /// Interaction active color: one step deeper than the base.
    pub fn active(&self) -> Color {
        match self.scheme {
            ColorScheme::Light => self.level(BASE_LEVEL + 1),
            ColorScheme::Dark => self.level(BASE_LEVEL - 1),
        }
    }

    pub fn colors(&self) -> &[Color; PALETTE_LEVELS] {
        &self.colors
    }
}

fn step_color(hsv: Hsv, i: u32, light: bool) -> Color {
    Color::from_hsv(Hsv {
        h: step_hue(hsv, i, light),
        s: step_saturation(hsv, i, light),
        v: step_value(hsv, i, light),
    })
}

fn step_hue(hsv: Hsv, i: u32, light: bool) -> f32 {
    let hue = hsv.h.round();
    let delta = HUE_STEP * i as f32;
    // cool hues rotate down when lightening, warm hues rotate up
    let stepped = if (60.0..=240.0).contains(&hue) == light {
        hue - delta
    } else {
        hue + delta
    };
    stepped.rem_euclid(360.0)
}

fn step_saturation(hsv: Hsv, i: u32, light: bool) -> f32 {
    if hsv.h == 0.0 && hsv.s == 0.0 {
        return hsv.s;
    }

    let mut saturation = if light {
        hsv.s - SATURATION_STEP * i as f32
    } else if i == DARK_COLOR_COUNT {
        hsv.s + SATURATION_STEP
    } else {
        hsv.s + SATURATION_STEP_DARK * i as f32
    };
    saturation = saturation.min(1.0);
    if light && i == LIGHT_COLOR_COUNT {
        saturation = saturation.min(0.1);
    }
    saturation = saturation.max(0.06);
    round2(saturation)
}

fn step_value(hsv: Hsv, i: u32, light: bool) -> f32 {
    let value = if light {
        hsv.v + BRIGHTNESS_STEP_LIGHT * i as f32
    } else {
        hsv.v - BRIGHTNESS_STEP_DARK * i as f32
    };
    round2(value).clamp(0.0, 1.0)
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Walk outward from the base level, blending every level that is out of
/// lightness order with its inner neighbour.
///
/// Light tints must not be darker than the level after them and light
/// shades not brighter than the level before them; dark is the mirror.
fn enforce_lightness_order(
    colors: &mut [Color; PALETTE_LEVELS],
    scheme: ColorScheme,
    background: Color,
) {
    let base = BASE_LEVEL - 1;
    let tints_brighten = scheme == ColorScheme::Light;
    for index in (0..base).rev() {
        colors[index] = put_in_order(colors[index], colors[index + 1], tints_brighten, background);
    }
    for index in base + 1..PALETTE_LEVELS {
        colors[index] = put_in_order(colors[index], colors[index - 1], !tints_brighten, background);
    }
}

/// Smallest blend of `color` towards white (or towards the canvas, or black
/// when the canvas is brighter than `inner`) that orders it against `inner`.
fn put_in_order(color: Color, inner: Color, brighter: bool, background: Color) -> Color {
    if is_ordered(color, inner, brighter) {
        return color;
    }
    let target = if brighter {
        Color::WHITE
    } else if background.relative_luminance() <= inner.relative_luminance() {
        background
    } else {
        Color::BLACK
    };
    (1..=ORDER_STEPS)
        .map(|step| color.mix(target, step as f32 / ORDER_STEPS as f32))
        .find(|candidate| is_ordered(*candidate, inner, brighter))
        .unwrap_or(inner)
}

fn is_ordered(outer: Color, inner: Color, brighter: bool) -> bool {
    let (outer, inner) = (outer.relative_luminance(), inner.relative_luminance());
    if brighter {
        outer >= inner
    } else {
        outer <= inner
    }
}

/// Pull level 1 towards level 2 until it stands out from `background`,
/// without crossing level 2 in lightness.
fn enforce_contrast_floor(
    colors: &mut [Color; PALETTE_LEVELS],
    scheme: ColorScheme,
    background: Color,
) {
    let outer = colors[0];
    let inner = colors[1];
    if outer.contrast_ratio(&background) >= CONTRAST_FLOOR {
        return;
    }
    let brighter = scheme == ColorScheme::Light;
    colors[0] = (1..10)
        .map(|step| outer.mix(inner, step as f32 / 10.0))
        .find(|candidate| {
            candidate.contrast_ratio(&background) >= CONTRAST_FLOOR
                && is_ordered(*candidate, inner, brighter)
        })
        .unwrap_or(inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_base_level_is_the_seed() {
        let seed = Color::from_hex(0x1677FF);
        let palette = ColorPalette::generate(seed, ColorScheme::Light, Color::WHITE);
        assert_eq!(palette.base(), seed);
        assert_eq!(palette.level(BASE_LEVEL), seed);
    }

    #[test]
    fn light_blue_matches_reference_scale() {
        // Published Ant Design blue scale
        let expected = [
            0xE6F4FF, 0xBAE0FF, 0x91CAFF, 0x69B1FF, 0x4096FF, 0x1677FF, 0x0958D9, 0x003EB3,
            0x002C8C, 0x001D66,
        ];
        let palette =
            ColorPalette::generate(Color::from_hex(0x1677FF), ColorScheme::Light, Color::WHITE);
        for (level, hex) in expected.iter().enumerate() {
            let got = palette.level(level + 1).to_rgba8();
            let want = Color::from_hex(*hex).to_rgba8();
            for channel in 0..3 {
                assert!(
                    got[channel].abs_diff(want[channel]) <= 2,
                    "level {} got {:?} want {:?}",
                    level + 1,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn out_of_range_level_falls_back_to_base() {
        let palette = ColorPalette::generate(Color::from_hex(0x52C41A), ColorScheme::Light, Color::WHITE);
        assert_eq!(palette.level(0), palette.base());
        assert_eq!(palette.level(11), palette.base());
    }

    #[test]
    fn dark_scale_blends_from_the_canvas() {
        let palette = ColorPalette::generate(Color::from_hex(0x1677FF), ColorScheme::Dark, DARK_CANVAS);
        assert_ne!(palette.base(), Color::from_hex(0x1677FF));
        assert!(palette.level(1).contrast_ratio(&DARK_CANVAS) >= CONTRAST_FLOOR);
        assert!(
            palette.hover().relative_luminance() > palette.base().relative_luminance(),
            "dark hover should be brighter than base"
        );
    }

    #[test]
    fn gray_seed_keeps_zero_saturation() {
        let palette = ColorPalette::generate(Color::gray(0.5), ColorScheme::Light, Color::WHITE);
        for color in palette.colors() {
            assert_eq!(color.to_hsv().s, 0.0);
        }
    }

    fn assert_ordered(palette: &ColorPalette) {
        let brighten = palette.scheme() == ColorScheme::Dark;
        for level in 1..PALETTE_LEVELS {
            let (a, b) = (
                palette.level(level).relative_luminance(),
                palette.level(level + 1).relative_luminance(),
            );
            let ok = if brighten { a <= b + 1e-6 } else { a + 1e-6 >= b };
            assert!(ok, "{:?} levels {} and {} out of order", palette.scheme(), level, level + 1);
        }
    }

    #[test]
    fn bright_yellow_tints_are_lifted_above_the_seed() {
        let seed = Color::rgb(0.98, 0.98, 0.0);
        let palette = ColorPalette::generate(seed, ColorScheme::Light, Color::WHITE);
        assert_eq!(palette.base(), seed);
        assert_ordered(&palette);

        let pale = ColorPalette::generate(Color::rgb(0.98, 0.98, 0.5), ColorScheme::Light, Color::WHITE);
        assert_ordered(&pale);
    }

    #[test]
    fn near_black_dark_scale_still_brightens() {
        let palette = ColorPalette::generate(Color::rgb(0.0, 0.0, 0.02), ColorScheme::Dark, DARK_CANVAS);
        assert_ordered(&palette);
        for color in palette.colors() {
            assert!(color.is_in_gamut(), "{color:?}");
        }
    }

    #[test]
    fn ordered_levels_are_left_alone() {
        let blue = Color::from_hex(0x1677FF);
        let mut colors = *ColorPalette::generate(blue, ColorScheme::Light, Color::WHITE).colors();
        let before = colors;
        enforce_lightness_order(&mut colors, ColorScheme::Light, Color::WHITE);
        assert_eq!(colors, before);
    }

    #[test]
    fn contrast_floor_never_passes_level_two() {
        // Near-white seed on white: the lightest tint collapses into the canvas
        let palette = ColorPalette::generate(Color::gray(0.99), ColorScheme::Light, Color::WHITE);
        let outer = palette.level(1);
        assert!(
            outer.contrast_ratio(&Color::WHITE) >= CONTRAST_FLOOR || outer == palette.level(2)
        );
    }
}
