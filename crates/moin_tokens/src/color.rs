//! RGBA color primitive used by every token layer
//!
//! Channels are stored as `f32` in `0.0..=1.0` (sRGB, not linearized).
//! Besides the usual constructors the type carries the handful of color
//! operations the palette algorithm needs: HSV conversion, linear mixing and
//! WCAG relative luminance.

use std::fmt;

/// RGBA color (sRGB space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Hue / saturation / value triple
///
/// `h` is in degrees (`0.0..360.0`), `s` and `v` in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let value = u32::from_str_radix(digits, 16).ok()?;
                let expand = |nibble: u32| (nibble * 17) as u8;
                Some(Self::from_rgba8(
                    expand((value >> 8) & 0xF),
                    expand((value >> 4) & 0xF),
                    expand(value & 0xF),
                    255,
                ))
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            8 => {
                let value = u32::from_str_radix(digits, 16).ok()?;
                Some(Self::from_rgba8(
                    (value >> 24) as u8,
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            _ => None,
        }
    }

    /// Gray with the given value on every channel
    pub fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Move every channel (alpha included) `amount` of the way towards `other`
    pub fn mix(self, other: Color, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Clamp all channels into `0.0..=1.0`; NaN becomes 0.
    pub fn clamped(self) -> Self {
        let unit = |c: f32| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
        Self {
            r: unit(self.r),
            g: unit(self.g),
            b: unit(self.b),
            a: unit(self.a),
        }
    }

    pub fn is_in_gamut(&self) -> bool {
        self.to_array()
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    pub fn to_hsv(&self) -> Hsv {
        let c = self.clamped();
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;

        let h = if delta <= f32::EPSILON {
            0.0
        } else if max == c.r {
            60.0 * ((c.g - c.b) / delta).rem_euclid(6.0)
        } else if max == c.g {
            60.0 * ((c.b - c.r) / delta + 2.0)
        } else {
            60.0 * ((c.r - c.g) / delta + 4.0)
        };
        let s = if max <= f32::EPSILON { 0.0 } else { delta / max };

        Hsv {
            h: h.rem_euclid(360.0),
            s,
            v: max,
        }
    }

    /// Build an opaque color from HSV; out-of-range inputs are wrapped/clamped.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let h = if hsv.h.is_finite() {
            hsv.h.rem_euclid(360.0)
        } else {
            0.0
        };
        let s = if hsv.s.is_nan() { 0.0 } else { hsv.s.clamp(0.0, 1.0) };
        let v = if hsv.v.is_nan() { 0.0 } else { hsv.v.clamp(0.0, 1.0) };

        let chroma = v * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = v - chroma;
        Self::rgb(r + m, g + m, b + m).clamped()
    }

    /// WCAG 2.x relative luminance of the opaque color
    pub fn relative_luminance(&self) -> f32 {
        fn linear(channel: f32) -> f32 {
            if channel <= 0.04045 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }
        let c = self.clamped();
        0.2126 * linear(c.r) + 0.7152 * linear(c.g) + 0.0722 * linear(c.b)
    }

    /// WCAG contrast ratio, `1.0..=21.0`
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Formats as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn hex_parsing_accepts_short_long_and_alpha_forms() {
        assert_eq!(Color::parse_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse_hex("1677FF"), Some(Color::from_hex(0x1677FF)));
        let translucent = Color::parse_hex("#00000080").unwrap();
        assert!(close(translucent.a, 128.0 / 255.0));
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let color = Color::from_hex(0xFAAD14);
        assert_eq!(color.to_string(), "#FAAD14");
        assert_eq!(Color::parse_hex(&color.to_string()), Some(color));
        assert_eq!(Color::BLACK.with_alpha(0.0).to_string(), "#00000000");
    }

    #[test]
    fn hsv_of_primary_blue() {
        let hsv = Color::from_hex(0x1677FF).to_hsv();
        assert!(close(hsv.h.round(), 215.0), "hue {}", hsv.h);
        assert!(close(hsv.v, 1.0));
        assert!(hsv.s > 0.9);

        let back = Color::from_hsv(hsv);
        assert_eq!(back.to_rgba8(), Color::from_hex(0x1677FF).to_rgba8());
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let hsv = Color::gray(0.5).to_hsv();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
    }

    #[test]
    fn mix_moves_towards_target() {
        let mid = Color::BLACK.mix(Color::WHITE, 0.5);
        assert!(close(mid.r, 0.5) && close(mid.g, 0.5) && close(mid.b, 0.5));
        assert_eq!(Color::BLACK.mix(Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn clamping_removes_nan_and_overflow() {
        let wild = Color::rgba(f32::NAN, 1.5, -0.2, 0.5).clamped();
        assert_eq!(wild, Color::rgba(0.0, 1.0, 0.0, 0.5));
        assert!(wild.is_in_gamut());
    }

    #[test]
    fn contrast_of_black_on_white_is_maximal() {
        assert!(close(Color::BLACK.contrast_ratio(&Color::WHITE), 21.0));
        assert!(close(Color::WHITE.contrast_ratio(&Color::WHITE), 1.0));
    }
}
