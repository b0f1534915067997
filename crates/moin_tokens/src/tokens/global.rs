//! Global tokens: semantic values derived from the seed for one color scheme

use super::{LineType, MotionEase, SeedToken, TokenKind};
use crate::color::Color;
use crate::error::TokenError;
use crate::palette::{ColorPalette, DARK_CANVAS};
use crate::theme::ColorScheme;
use std::borrow::Cow;
use std::str::FromStr;

token_record! {
    /// Fully resolved semantic tokens
    ///
    /// Every field is either copied from the seed, picked from a generated
    /// palette, or computed from other seed values. Produced by
    /// [`GlobalToken::resolve`].
    pub struct GlobalToken;
    /// Key for dynamic access to a [`GlobalToken`] field
    pub enum GlobalField;
    header {
        /// Scheme the tokens were resolved for
        scheme: ColorScheme,
    }
    fields {
        // Brand
        color_primary / ColorPrimary: Color,
        color_primary_hover / ColorPrimaryHover: Color,
        color_primary_active / ColorPrimaryActive: Color,
        color_primary_bg / ColorPrimaryBg: Color,
        color_primary_bg_hover / ColorPrimaryBgHover: Color,
        color_primary_border / ColorPrimaryBorder: Color,
        color_primary_border_hover / ColorPrimaryBorderHover: Color,
        color_primary_text / ColorPrimaryText: Color,
        color_primary_text_hover / ColorPrimaryTextHover: Color,
        color_primary_text_active / ColorPrimaryTextActive: Color,

        // Status
        color_success / ColorSuccess: Color,
        color_success_hover / ColorSuccessHover: Color,
        color_success_active / ColorSuccessActive: Color,
        color_success_bg / ColorSuccessBg: Color,
        color_success_border / ColorSuccessBorder: Color,
        color_warning / ColorWarning: Color,
        color_warning_hover / ColorWarningHover: Color,
        color_warning_active / ColorWarningActive: Color,
        color_warning_bg / ColorWarningBg: Color,
        color_warning_border / ColorWarningBorder: Color,
        color_danger / ColorDanger: Color,
        color_danger_hover / ColorDangerHover: Color,
        color_danger_active / ColorDangerActive: Color,
        color_danger_bg / ColorDangerBg: Color,
        color_danger_border / ColorDangerBorder: Color,
        color_info / ColorInfo: Color,
        color_info_hover / ColorInfoHover: Color,
        color_info_active / ColorInfoActive: Color,
        color_info_bg / ColorInfoBg: Color,
        color_info_border / ColorInfoBorder: Color,

        // Links
        color_link / ColorLink: Color,
        color_link_hover / ColorLinkHover: Color,
        color_link_active / ColorLinkActive: Color,

        // Text
        color_text / ColorText: Color,
        color_text_secondary / ColorTextSecondary: Color,
        color_text_tertiary / ColorTextTertiary: Color,
        color_text_quaternary / ColorTextQuaternary: Color,
        color_text_placeholder / ColorTextPlaceholder: Color,
        color_text_disabled / ColorTextDisabled: Color,
        /// Text on solid brand backgrounds
        color_text_light_solid / ColorTextLightSolid: Color,

        // Surfaces
        color_bg_container / ColorBgContainer: Color,
        color_bg_elevated / ColorBgElevated: Color,
        color_bg_layout / ColorBgLayout: Color,
        color_bg_spotlight / ColorBgSpotlight: Color,
        color_bg_mask / ColorBgMask: Color,
        color_bg_hover / ColorBgHover: Color,
        color_bg_disabled / ColorBgDisabled: Color,
        color_fill / ColorFill: Color,
        color_fill_secondary / ColorFillSecondary: Color,
        color_fill_tertiary / ColorFillTertiary: Color,
        color_fill_quaternary / ColorFillQuaternary: Color,

        // Borders
        color_border / ColorBorder: Color,
        color_border_secondary / ColorBorderSecondary: Color,
        color_border_hover / ColorBorderHover: Color,
        line_width / LineWidth: f32,
        line_width_bold / LineWidthBold: f32,
        line_type / LineType: LineType,

        // Radii
        border_radius / BorderRadius: f32,
        border_radius_xs / BorderRadiusXs: f32,
        border_radius_sm / BorderRadiusSm: f32,
        border_radius_lg / BorderRadiusLg: f32,
        border_radius_outer / BorderRadiusOuter: f32,

        // Controls
        control_height / ControlHeight: f32,
        control_height_xs / ControlHeightXs: f32,
        control_height_sm / ControlHeightSm: f32,
        control_height_lg / ControlHeightLg: f32,

        // Typography
        font_family / FontFamily: Cow<'static, str>,
        font_family_code / FontFamilyCode: Cow<'static, str>,
        font_size / FontSize: f32,
        font_size_sm / FontSizeSm: f32,
        font_size_lg / FontSizeLg: f32,
        font_size_xl / FontSizeXl: f32,
        font_size_heading1 / FontSizeHeading1: f32,
        font_size_heading2 / FontSizeHeading2: f32,
        font_size_heading3 / FontSizeHeading3: f32,
        font_size_heading4 / FontSizeHeading4: f32,
        font_size_heading5 / FontSizeHeading5: f32,
        line_height / LineHeight: f32,
        line_height_sm / LineHeightSm: f32,
        line_height_lg / LineHeightLg: f32,
        line_height_heading1 / LineHeightHeading1: f32,
        line_height_heading2 / LineHeightHeading2: f32,
        line_height_heading3 / LineHeightHeading3: f32,
        line_height_heading4 / LineHeightHeading4: f32,
        line_height_heading5 / LineHeightHeading5: f32,

        // Spacing
        padding_xxs / PaddingXxs: f32,
        padding_xs / PaddingXs: f32,
        padding_sm / PaddingSm: f32,
        padding / Padding: f32,
        padding_md / PaddingMd: f32,
        padding_lg / PaddingLg: f32,
        padding_xl / PaddingXl: f32,
        margin_xxs / MarginXxs: f32,
        margin_xs / MarginXs: f32,
        margin_sm / MarginSm: f32,
        margin / Margin: f32,
        margin_md / MarginMd: f32,
        margin_lg / MarginLg: f32,
        margin_xl / MarginXl: f32,
        margin_xxl / MarginXxl: f32,
        size_popup_arrow / SizePopupArrow: f32,

        // Motion
        motion / Motion: bool,
        motion_ease / MotionEase: MotionEase,
        /// Base duration in seconds
        motion_duration / MotionDuration: f32,
        motion_duration_fast / MotionDurationFast: f32,
        motion_duration_mid / MotionDurationMid: f32,
        motion_duration_slow / MotionDurationSlow: f32,

        // Elevation
        shadow_radius1 / ShadowRadius1: f32,
        shadow_opacity1 / ShadowOpacity1: f32,
        shadow_radius2 / ShadowRadius2: f32,
        shadow_opacity2 / ShadowOpacity2: f32,
        shadow_radius3 / ShadowRadius3: f32,
        shadow_opacity3 / ShadowOpacity3: f32,

        // Misc
        opacity_image / OpacityImage: f32,
        wireframe / Wireframe: bool,
        z_index_base / ZIndexBase: i32,
        z_index_popup_base / ZIndexPopupBase: i32,
    }
}

/// Heading sizes, level 1 to 5
const HEADING_SIZES: [f32; 5] = [38.0, 30.0, 24.0, 20.0, 16.0];

fn black(alpha: f32) -> Color {
    Color::BLACK.with_alpha(alpha)
}

fn white(alpha: f32) -> Color {
    Color::WHITE.with_alpha(alpha)
}

/// Line height ratio giving a `size + 8` line box
fn line_height_for(size: f32) -> f32 {
    if size > 0.0 {
        (size + 8.0) / size
    } else {
        1.0
    }
}

/// Surface, fill and border colors for one scheme
struct NeutralColors {
    text_base: Color,
    bg_container: Color,
    bg_elevated: Color,
    bg_layout: Color,
    bg_spotlight: Color,
    bg_interactive: Color,
    fills: [Color; 4],
    border: Color,
    border_secondary: Color,
}

impl NeutralColors {
    fn for_scheme(seed: &SeedToken, scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                text_base: seed.color_text_base,
                bg_container: seed.color_bg_base,
                bg_elevated: seed.color_bg_base,
                bg_layout: Color::from_hex(0xF5F5F5),
                bg_spotlight: black(0.85),
                bg_interactive: black(0.04),
                fills: [black(0.15), black(0.06), black(0.04), black(0.02)],
                border: Color::from_hex(0xD9D9D9),
                border_secondary: Color::from_hex(0xF0F0F0),
            },
            ColorScheme::Dark => Self {
                text_base: Color::gray(0.92),
                bg_container: DARK_CANVAS,
                bg_elevated: Color::from_hex(0x1F1F1F),
                bg_layout: Color::BLACK,
                bg_spotlight: Color::from_hex(0x424242),
                bg_interactive: white(0.08),
                fills: [white(0.18), white(0.12), white(0.08), white(0.04)],
                border: Color::from_hex(0x424242),
                border_secondary: Color::from_hex(0x303030),
            },
        }
    }
}

impl GlobalToken {
    /// Resolve the global tokens for `seed` in `scheme`.
    ///
    /// Pure and deterministic: equal inputs always give equal outputs.
    pub fn resolve(seed: &SeedToken, scheme: ColorScheme) -> Self {
        let seed = &seed.clone().sanitized();
        let background = match scheme {
            ColorScheme::Light => seed.color_bg_base,
            ColorScheme::Dark => DARK_CANVAS,
        };
        let palette = |color: Color| ColorPalette::generate(color, scheme, background);
        let primary = palette(seed.color_primary);
        let success = palette(seed.color_success);
        let warning = palette(seed.color_warning);
        let danger = palette(seed.color_danger);
        let info = palette(seed.color_info);
        let link = palette(seed.color_link);

        let neutral = NeutralColors::for_scheme(seed, scheme);
        let text = |alpha: f32| neutral.text_base.with_alpha(alpha);

        let radius = seed.border_radius;
        let height = seed.control_height;
        let font = seed.font_size;
        let unit = seed.size_unit;
        let duration = seed.motion_base as f32 * seed.motion_unit;

        Self {
            scheme,

            color_primary: primary.base(),
            color_primary_hover: primary.hover(),
            color_primary_active: primary.active(),
            color_primary_bg: primary.level(1),
            color_primary_bg_hover: primary.level(2),
            color_primary_border: primary.level(3),
            color_primary_border_hover: primary.level(4),
            color_primary_text: primary.base(),
            color_primary_text_hover: primary.hover(),
            color_primary_text_active: primary.active(),

            color_success: success.base(),
            color_success_hover: success.hover(),
            color_success_active: success.active(),
            color_success_bg: success.level(1),
            color_success_border: success.level(3),
            color_warning: warning.base(),
            color_warning_hover: warning.hover(),
            color_warning_active: warning.active(),
            color_warning_bg: warning.level(1),
            color_warning_border: warning.level(3),
            color_danger: danger.base(),
            color_danger_hover: danger.hover(),
            color_danger_active: danger.active(),
            color_danger_bg: danger.level(1),
            color_danger_border: danger.level(3),
            color_info: info.base(),
            color_info_hover: info.hover(),
            color_info_active: info.active(),
            color_info_bg: info.level(1),
            color_info_border: info.level(3),

            color_link: link.base(),
            color_link_hover: link.hover(),
            color_link_active: link.active(),

            color_text: text(0.88),
            color_text_secondary: text(0.65),
            color_text_tertiary: text(0.55),
            color_text_quaternary: text(0.30),
            color_text_placeholder: text(0.25),
            color_text_disabled: text(0.55),
            color_text_light_solid: Color::WHITE,

            color_bg_container: neutral.bg_container,
            color_bg_elevated: neutral.bg_elevated,
            color_bg_layout: neutral.bg_layout,
            color_bg_spotlight: neutral.bg_spotlight,
            color_bg_mask: black(0.45),
            color_bg_hover: neutral.bg_interactive,
            color_bg_disabled: neutral.bg_interactive,
            color_fill: neutral.fills[0],
            color_fill_secondary: neutral.fills[1],
            color_fill_tertiary: neutral.fills[2],
            color_fill_quaternary: neutral.fills[3],

            color_border: neutral.border,
            color_border_secondary: neutral.border_secondary,
            color_border_hover: primary.hover(),
            line_width: seed.line_width,
            line_width_bold: seed.line_width + 1.0,
            line_type: seed.line_type,

            border_radius: radius,
            border_radius_xs: (radius - 4.0).max(1.0),
            border_radius_sm: (radius - 2.0).max(2.0),
            border_radius_lg: radius + 2.0,
            border_radius_outer: radius + 4.0,

            control_height: height,
            control_height_xs: (height * 0.5).round(),
            control_height_sm: (height * 0.75).round(),
            control_height_lg: (height * 1.25).round(),

            font_family: seed.font_family.clone(),
            font_family_code: seed.font_family_code.clone(),
            font_size: font,
            font_size_sm: font - 2.0,
            font_size_lg: font + 2.0,
            font_size_xl: font + 6.0,
            font_size_heading1: HEADING_SIZES[0],
            font_size_heading2: HEADING_SIZES[1],
            font_size_heading3: HEADING_SIZES[2],
            font_size_heading4: HEADING_SIZES[3],
            font_size_heading5: HEADING_SIZES[4],
            line_height: line_height_for(font),
            line_height_sm: line_height_for(font - 2.0),
            line_height_lg: line_height_for(font + 2.0),
            line_height_heading1: line_height_for(HEADING_SIZES[0]),
            line_height_heading2: line_height_for(HEADING_SIZES[1]),
            line_height_heading3: line_height_for(HEADING_SIZES[2]),
            line_height_heading4: line_height_for(HEADING_SIZES[3]),
            line_height_heading5: line_height_for(HEADING_SIZES[4]),

            padding_xxs: unit,
            padding_xs: unit * 2.0,
            padding_sm: unit * 3.0,
            padding: unit * 4.0,
            padding_md: unit * 5.0,
            padding_lg: unit * 6.0,
            padding_xl: unit * 8.0,
            margin_xxs: unit,
            margin_xs: unit * 2.0,
            margin_sm: unit * 3.0,
            margin: unit * 4.0,
            margin_md: unit * 5.0,
            margin_lg: unit * 6.0,
            margin_xl: unit * 8.0,
            margin_xxl: unit * 12.0,
            size_popup_arrow: seed.size_popup_arrow,

            motion: seed.motion,
            motion_ease: seed.motion_ease,
            motion_duration: duration,
            motion_duration_fast: duration * 0.5,
            motion_duration_mid: duration,
            motion_duration_slow: duration * 1.5,

            shadow_radius1: 2.0,
            shadow_opacity1: 0.08,
            shadow_radius2: 8.0,
            shadow_opacity2: 0.12,
            shadow_radius3: 16.0,
            shadow_opacity3: 0.16,

            opacity_image: seed.opacity_image,
            wireframe: seed.wireframe,
            z_index_base: seed.z_index_base,
            z_index_popup_base: seed.z_index_popup_base,
        }
        .sanitized()
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    /// Clamp every field into its accepted range, see [`GlobalField::minimum`].
    pub fn sanitize(&mut self) {
        for &field in GlobalField::ALL {
            let sanitized = self.get(field).clamped(field.minimum(), field.maximum());
            let _ = self.set(field, sanitized);
        }
    }

    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }
}

impl GlobalField {
    /// Smallest accepted value for numeric fields
    ///
    /// Font sizes are at least 1, every other size, duration and opacity at
    /// least 0. Z-indexes are unbounded.
    pub fn minimum(self) -> Option<f32> {
        match self.kind() {
            TokenKind::Number if self.name().starts_with("font_size") => Some(1.0),
            TokenKind::Number => Some(0.0),
            _ => None,
        }
    }

    /// Largest accepted value for numeric fields
    pub fn maximum(self) -> Option<f32> {
        match self {
            GlobalField::OpacityImage
            | GlobalField::ShadowOpacity1
            | GlobalField::ShadowOpacity2
            | GlobalField::ShadowOpacity3 => Some(1.0),
            _ => None,
        }
    }
}

impl Default for GlobalToken {
    fn default() -> Self {
        Self::resolve(&SeedToken::default(), ColorScheme::Light)
    }
}

impl FromStr for GlobalField {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TokenError::UnknownGlobalField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenValue;

    #[test]
    fn default_light_tokens() {
        let token = GlobalToken::default();
        assert_eq!(token.color_primary, Color::from_hex(0x1677FF));
        assert_eq!(token.border_radius_xs, 2.0);
        assert_eq!(token.border_radius_sm, 4.0);
        assert_eq!(token.border_radius_lg, 8.0);
        assert_eq!(token.control_height_sm, 24.0);
        assert_eq!(token.control_height_lg, 40.0);
        assert_eq!(token.padding, 16.0);
        assert_eq!(token.margin_xxl, 48.0);
        assert_eq!(token.font_size_sm, 12.0);
        assert!((token.line_height - 1.5714).abs() < 1e-3);
        assert!((token.motion_duration_mid - 0.2).abs() < 1e-6);
        assert!((token.motion_duration_slow - 0.3).abs() < 1e-6);
    }

    #[test]
    fn radii_never_drop_below_their_floor() {
        let seed = SeedToken {
            border_radius: 0.0,
            ..SeedToken::default()
        };
        let token = GlobalToken::resolve(&seed, ColorScheme::Light);
        assert_eq!(token.border_radius_xs, 1.0);
        assert_eq!(token.border_radius_sm, 2.0);
    }

    #[test]
    fn dark_scheme_uses_dark_surfaces() {
        let token = GlobalToken::resolve(&SeedToken::default(), ColorScheme::Dark);
        assert!(token.is_dark());
        assert_eq!(token.color_bg_container, DARK_CANVAS);
        assert_eq!(token.color_border, Color::from_hex(0x424242));
        assert_ne!(token.color_primary, Color::from_hex(0x1677FF));
    }

    #[test]
    fn every_field_is_readable_and_writable() {
        let mut token = GlobalToken::default();
        for &field in GlobalField::ALL {
            let value = token.get(field);
            assert_eq!(value.kind(), field.kind(), "{field}");
            token.set(field, value).unwrap();
        }
        assert_eq!(token, GlobalToken::default());
    }

    #[test]
    fn field_names_are_unique() {
        for (i, a) in GlobalField::ALL.iter().enumerate() {
            for b in &GlobalField::ALL[i + 1..] {
                assert!(
                    !crate::tokens::names_match(a.name(), b.name()),
                    "{a} and {b} collide"
                );
            }
        }
    }

    #[test]
    fn resolved_tokens_stay_finite_for_extreme_seeds() {
        let seed = SeedToken {
            font_size: f32::INFINITY,
            size_unit: f32::NAN,
            ..SeedToken::default()
        };
        let token = GlobalToken::resolve(&seed, ColorScheme::Light);
        for &field in GlobalField::ALL {
            if let Some(n) = token.get(field).as_number() {
                assert!(n.is_finite(), "{field} = {n}");
                assert!(n >= field.minimum().unwrap_or(f32::MIN), "{field} = {n}");
            }
        }
    }

    #[test]
    fn field_bounds() {
        assert_eq!(GlobalField::FontSizeSm.minimum(), Some(1.0));
        assert_eq!(GlobalField::Padding.minimum(), Some(0.0));
        assert_eq!(GlobalField::ShadowOpacity2.maximum(), Some(1.0));
        assert_eq!(GlobalField::ZIndexBase.minimum(), None);
        assert_eq!(GlobalField::ColorPrimary.minimum(), None);
    }

    #[test]
    fn set_accepts_integer_for_number_fields() {
        let mut token = GlobalToken::default();
        token
            .set(GlobalField::BorderRadius, TokenValue::Integer(10))
            .unwrap();
        assert_eq!(token.border_radius, 10.0);
        assert!("borderRadiusLG".parse::<GlobalField>().is_ok());
    }
}
