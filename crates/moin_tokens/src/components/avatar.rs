//! Avatar tokens
//!
//! Sizes follow the control heights; the default avatar font is a heading
//! size so initials stay legible.

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("container_bg", Copy(G::ColorTextPlaceholder)),
    Rule::new("color_text", Copy(G::ColorTextLightSolid)),
    Rule::new("color_text_light", Copy(G::ColorTextLightSolid)),
    Rule::new("size", Copy(G::ControlHeight)),
    Rule::new("size_lg", Copy(G::ControlHeightLg)),
    Rule::new("size_sm", Copy(G::ControlHeightSm)),
    Rule::new("font_size", Copy(G::FontSizeHeading5)),
    Rule::new("font_size_lg", Copy(G::FontSizeHeading3)),
    Rule::new("font_size_sm", Copy(G::FontSize)),
    Rule::new("border_radius", Copy(G::BorderRadius)),
    Rule::new("border_radius_lg", Copy(G::BorderRadiusLg)),
    Rule::new("border_radius_sm", Copy(G::BorderRadiusSm)),
    Rule::new("group_spacing", number(4.0)),
    Rule::new("group_border_color", Copy(G::ColorBgContainer)),
    Rule::new("group_border_width", Scale(G::LineWidth, 2.0)),
];
