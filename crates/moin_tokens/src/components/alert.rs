//! Alert tokens

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("color_success_bg", Copy(G::ColorSuccessBg)),
    Rule::new("color_success_border", Copy(G::ColorSuccessBorder)),
    Rule::new("color_success", Copy(G::ColorSuccess)),
    Rule::new("color_info_bg", Copy(G::ColorInfoBg)),
    Rule::new("color_info_border", Copy(G::ColorInfoBorder)),
    Rule::new("color_info", Copy(G::ColorInfo)),
    Rule::new("color_warning_bg", Copy(G::ColorWarningBg)),
    Rule::new("color_warning_border", Copy(G::ColorWarningBorder)),
    Rule::new("color_warning", Copy(G::ColorWarning)),
    Rule::new("color_error_bg", Copy(G::ColorDangerBg)),
    Rule::new("color_error_border", Copy(G::ColorDangerBorder)),
    Rule::new("color_error", Copy(G::ColorDanger)),
    Rule::new("color_text_heading", Copy(G::ColorText)),
    Rule::new("color_text", Copy(G::ColorText)),
    Rule::new("color_icon", Copy(G::ColorTextTertiary)),
    Rule::new("color_icon_hover", Copy(G::ColorText)),
    Rule::new("default_padding_block", Copy(G::PaddingXs)),
    Rule::new("default_padding_inline", number(12.0)),
    Rule::new("with_description_padding_block", Copy(G::PaddingMd)),
    Rule::new("with_description_padding_inline", Copy(G::PaddingLg)),
    Rule::new("with_description_icon_size", Copy(G::FontSizeHeading3)),
    Rule::new("font_size", Copy(G::FontSize)),
    Rule::new("font_size_lg", Copy(G::FontSizeLg)),
    Rule::new("line_height", Copy(G::LineHeight)),
    Rule::new("line_height_lg", Copy(G::LineHeightLg)),
    Rule::new("font_size_icon", Copy(G::FontSizeSm)),
    Rule::new("icon_size", Copy(G::FontSizeLg)),
    Rule::new("line_width", Copy(G::LineWidth)),
    Rule::new("border_radius_lg", Copy(G::BorderRadiusLg)),
    Rule::new("margin_xs", Copy(G::MarginXs)),
    Rule::new("margin_sm", Copy(G::MarginSm)),
];
