//! Seed tokens: the small set of user-editable inputs everything derives from

use super::{LineType, MotionEase};
use crate::color::Color;
use crate::error::TokenError;
use crate::presets::PresetColor;
use std::borrow::Cow;
use std::str::FromStr;

/// Font stack used for body text
pub const DEFAULT_FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
    'Helvetica Neue', Arial, 'Noto Sans', sans-serif";

/// Font stack used for code
pub const DEFAULT_FONT_FAMILY_CODE: &str =
    "'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, Courier, monospace";

token_record! {
    /// User-editable seed values
    ///
    /// Always fully populated; [`SeedToken::default`] gives the stock theme.
    pub struct SeedToken;
    /// Key for dynamic access to a [`SeedToken`] field
    pub enum SeedField;
    header {}
    fields {
        /// Brand color
        color_primary / ColorPrimary: Color,
        color_success / ColorSuccess: Color,
        color_warning / ColorWarning: Color,
        /// Error / destructive color
        color_danger / ColorDanger: Color,
        color_info / ColorInfo: Color,
        color_link / ColorLink: Color,
        /// Base text color; text tokens are alpha variants of it
        color_text_base / ColorTextBase: Color,
        /// Base background color for the light scheme
        color_bg_base / ColorBgBase: Color,

        font_size / FontSize: f32,
        font_family / FontFamily: Cow<'static, str>,
        font_family_code / FontFamilyCode: Cow<'static, str>,

        line_width / LineWidth: f32,
        line_type / LineType: LineType,
        border_radius / BorderRadius: f32,

        /// Spacing unit; paddings and margins are multiples of it
        size_unit / SizeUnit: f32,
        size_step / SizeStep: f32,
        size_popup_arrow / SizePopupArrow: f32,
        control_height / ControlHeight: f32,

        z_index_base / ZIndexBase: i32,
        z_index_popup_base / ZIndexPopupBase: i32,

        /// Global motion switch
        motion / Motion: bool,
        /// Motion unit in seconds
        motion_unit / MotionUnit: f32,
        /// Base duration as a multiple of `motion_unit`
        motion_base / MotionBase: i32,
        motion_ease / MotionEase: MotionEase,

        opacity_image / OpacityImage: f32,
        wireframe / Wireframe: bool,
    }
}

impl Default for SeedToken {
    fn default() -> Self {
        Self {
            color_primary: PresetColor::Blue.color(),
            color_success: PresetColor::Green.color(),
            color_warning: PresetColor::Gold.color(),
            color_danger: PresetColor::Red.color(),
            color_info: Color::rgb(0.55, 0.55, 0.60),
            color_link: PresetColor::Blue.color(),
            color_text_base: Color::BLACK,
            color_bg_base: Color::WHITE,
            font_size: 14.0,
            font_family: Cow::Borrowed(DEFAULT_FONT_FAMILY),
            font_family_code: Cow::Borrowed(DEFAULT_FONT_FAMILY_CODE),
            line_width: 1.0,
            line_type: LineType::Solid,
            border_radius: 6.0,
            size_unit: 4.0,
            size_step: 4.0,
            size_popup_arrow: 16.0,
            control_height: 32.0,
            z_index_base: 0,
            z_index_popup_base: 1000,
            motion: true,
            motion_unit: 0.1,
            motion_base: 2,
            motion_ease: MotionEase::EaseInOut,
            opacity_image: 1.0,
            wireframe: false,
        }
    }
}

impl SeedField {
    /// Smallest accepted value for numeric fields
    pub fn minimum(self) -> Option<f32> {
        match self {
            SeedField::FontSize => Some(1.0),
            SeedField::LineWidth
            | SeedField::BorderRadius
            | SeedField::SizeUnit
            | SeedField::SizeStep
            | SeedField::SizePopupArrow
            | SeedField::ControlHeight
            | SeedField::MotionUnit
            | SeedField::MotionBase
            | SeedField::OpacityImage => Some(0.0),
            _ => None,
        }
    }

    /// Largest accepted value for numeric fields
    pub fn maximum(self) -> Option<f32> {
        match self {
            SeedField::OpacityImage => Some(1.0),
            _ => None,
        }
    }
}

impl FromStr for SeedField {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TokenError::UnknownSeedField(s.to_string()))
    }
}

impl SeedToken {
    /// Clamp every field into its accepted range.
    ///
    /// Numbers below their minimum (NaN included) snap to the minimum,
    /// infinities are capped at [`NUMBER_LIMIT`](super::NUMBER_LIMIT) and
    /// color channels are clamped to `0.0..=1.0`.
    pub fn sanitize(&mut self) {
        for &field in SeedField::ALL {
            let sanitized = self.get(field).clamped(field.minimum(), field.maximum());
            // kinds are unchanged, so the write cannot fail
            let _ = self.set(field, sanitized);
        }
    }

    /// Copy with every field clamped, see [`SeedToken::sanitize`].
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{TokenKind, TokenValue};

    #[test]
    fn defaults_match_stock_theme() {
        let seed = SeedToken::default();
        assert_eq!(seed.color_primary, Color::from_hex(0x1677FF));
        assert_eq!(seed.color_danger, Color::from_hex(0xF5222D));
        assert_eq!(seed.font_size, 14.0);
        assert_eq!(seed.control_height, 32.0);
        assert_eq!(seed.motion_base, 2);
    }

    #[test]
    fn fields_round_trip_through_dynamic_access() {
        let mut seed = SeedToken::default();
        seed.set(SeedField::BorderRadius, TokenValue::Number(8.0))
            .unwrap();
        assert_eq!(seed.get(SeedField::BorderRadius), TokenValue::Number(8.0));

        seed.set(SeedField::FontFamily, TokenValue::from("Inter".to_string()))
            .unwrap();
        assert_eq!(seed.font_family, "Inter");
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut seed = SeedToken::default();
        let err = seed
            .set(SeedField::ColorPrimary, TokenValue::Number(1.0))
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::KindMismatch {
                field: "color_primary".into(),
                expected: TokenKind::Color,
                found: TokenKind::Number,
            }
        );
        assert_eq!(seed, SeedToken::default());
    }

    #[test]
    fn sanitize_clamps_to_minimums() {
        let mut seed = SeedToken {
            size_unit: -4.0,
            font_size: f32::NAN,
            opacity_image: 3.0,
            motion_base: -1,
            color_primary: Color::rgb(2.0, -1.0, 0.5),
            ..SeedToken::default()
        };
        seed.sanitize();
        assert_eq!(seed.size_unit, 0.0);
        assert_eq!(seed.font_size, 1.0);
        assert_eq!(seed.opacity_image, 1.0);
        assert_eq!(seed.motion_base, 0);
        assert_eq!(seed.color_primary, Color::rgb(1.0, 0.0, 0.5));
    }

    #[test]
    fn sanitize_caps_infinities() {
        let seed = SeedToken {
            font_size: f32::INFINITY,
            control_height: f32::NEG_INFINITY,
            ..SeedToken::default()
        }
        .sanitized();
        assert!(seed.font_size.is_finite());
        assert_eq!(seed.font_size, crate::tokens::NUMBER_LIMIT);
        assert_eq!(seed.control_height, 0.0);
    }

    #[test]
    fn field_names_parse_in_any_case_style() {
        assert_eq!("colorPrimary".parse::<SeedField>(), Ok(SeedField::ColorPrimary));
        assert_eq!("size_unit".parse::<SeedField>(), Ok(SeedField::SizeUnit));
        assert!("colourPrimary".parse::<SeedField>().is_err());
    }
}
