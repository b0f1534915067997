//! Slider tokens

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("control_size", Scale(G::ControlHeightLg, 0.25)),
    Rule::new("rail_size", number(4.0)),
    Rule::new("handle_size", Scale(G::ControlHeightLg, 0.25)),
    Rule::new("handle_size_hover", Scale(G::ControlHeightSm, 0.5)),
    Rule::new("handle_line_width", Offset(G::LineWidth, 1.0)),
    Rule::new("handle_line_width_hover", Offset(G::LineWidth, 1.5)),
    Rule::new("dot_size", number(8.0)),
    Rule::new("rail_bg", Copy(G::ColorFillTertiary)),
    Rule::new("rail_hover_bg", Copy(G::ColorFillSecondary)),
    Rule::new("track_bg", Copy(G::ColorPrimaryBorder)),
    Rule::new("track_hover_bg", Copy(G::ColorPrimaryBorderHover)),
    Rule::new("track_bg_disabled", Copy(G::ColorBgDisabled)),
    Rule::new("handle_color", Copy(G::ColorPrimaryBorder)),
    Rule::new("handle_hover_color", Copy(G::ColorPrimaryBorderHover)),
    Rule::new("handle_active_color", Copy(G::ColorPrimary)),
    Rule::new("handle_active_outline_color", Alpha(G::ColorPrimary, 0.3)),
    Rule::new("handle_color_disabled", Copy(G::ColorBorder)),
    Rule::new("dot_border_color", Copy(G::ColorBorderSecondary)),
    Rule::new("dot_active_border_color", Copy(G::ColorPrimaryBorder)),
];
