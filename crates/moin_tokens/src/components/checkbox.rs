//! Checkbox tokens

use super::Derivation::*;
use super::{color, number, Rule};
use crate::color::Color;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("checkbox_size", number(16.0)),
    Rule::new("border_radius", Copy(G::BorderRadiusSm)),
    Rule::new("line_width", Copy(G::LineWidth)),
    Rule::new("line_width_bold", Copy(G::LineWidthBold)),
    Rule::new("color_primary", Copy(G::ColorPrimary)),
    Rule::new("color_primary_hover", Copy(G::ColorPrimaryHover)),
    Rule::new("color_border", Copy(G::ColorBorder)),
    Rule::new("color_bg_container", Copy(G::ColorBgContainer)),
    Rule::new("color_white", color(Color::WHITE)),
    Rule::new("color_bg_container_disabled", Copy(G::ColorBgDisabled)),
    Rule::new("color_border_disabled", Copy(G::ColorBorder)),
    Rule::new("color_text_disabled", Copy(G::ColorTextDisabled)),
    Rule::new("padding_xs", Copy(G::PaddingXs)),
    Rule::new("motion_duration_slow", Copy(G::MotionDurationSlow)),
];
