//! Radio and radio button tokens

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("radio_size", number(16.0)),
    Rule::new("dot_size", number(8.0)),
    Rule::new("line_width", Copy(G::LineWidth)),
    Rule::new("color_primary", Copy(G::ColorPrimary)),
    Rule::new("color_border", Copy(G::ColorBorder)),
    Rule::new("color_bg_container", Copy(G::ColorBgContainer)),
    Rule::new("radio_color", Copy(G::ColorPrimary)),
    Rule::new("radio_bg_color", Copy(G::ColorBgContainer)),
    Rule::new("color_bg_container_disabled", Copy(G::ColorBgDisabled)),
    Rule::new("color_border_disabled", Copy(G::ColorBorder)),
    Rule::new("color_text_disabled", Copy(G::ColorTextDisabled)),
    Rule::new("dot_color_disabled", Copy(G::ColorTextDisabled)),
    Rule::new("padding_xs", Copy(G::PaddingXs)),
    Rule::new("wrapper_margin_inline_end", Copy(G::PaddingXs)),
    Rule::new("motion_duration_mid", Copy(G::MotionDurationMid)),
    Rule::new("motion_duration_slow", Copy(G::MotionDurationSlow)),
    Rule::new("button_bg", Copy(G::ColorBgContainer)),
    Rule::new("button_checked_bg", Copy(G::ColorBgContainer)),
    Rule::new("button_checked_bg_disabled", Copy(G::ColorBgDisabled)),
    Rule::new("button_checked_color_disabled", Copy(G::ColorTextDisabled)),
    Rule::new("button_color", Copy(G::ColorText)),
    Rule::new("button_padding_inline", Copy(G::PaddingMd)),
    Rule::new("button_solid_checked_active_bg", Copy(G::ColorPrimaryActive)),
    Rule::new("button_solid_checked_bg", Copy(G::ColorPrimary)),
    Rule::new("button_solid_checked_color", Copy(G::ColorTextLightSolid)),
    Rule::new("button_solid_checked_hover_bg", Copy(G::ColorPrimaryHover)),
    Rule::new("button_padding_inline_xs", number(11.0)),
    Rule::new("button_padding_block_xs", number(3.0)),
    Rule::new("button_padding_inline_default", number(15.0)),
    Rule::new("button_padding_block_default", number(5.0)),
    Rule::new("button_padding_inline_lg", number(23.0)),
    Rule::new("button_padding_block_lg", number(7.0)),
];
