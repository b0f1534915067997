//! Tag tokens

use super::Derivation::*;
use super::{color, number, Rule};
use crate::color::Color;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("default_bg", Copy(G::ColorFillSecondary)),
    Rule::new("default_color", Copy(G::ColorText)),
    Rule::new("solid_text_color", color(Color::WHITE)),
    Rule::new("icon_size_lg", number(12.0)),
    Rule::new("icon_size", number(10.0)),
    Rule::new("icon_size_sm", number(8.0)),
    Rule::new("close_icon_size_lg", number(9.0)),
    Rule::new("close_icon_size", number(8.0)),
    Rule::new("close_icon_size_sm", number(7.0)),
    Rule::new("icon_gap_lg", Copy(G::PaddingXs)),
    Rule::new("icon_gap", Copy(G::PaddingXxs)),
    Rule::new("icon_gap_sm", number(2.0)),
    Rule::new("padding_h_lg", Copy(G::PaddingMd)),
    Rule::new("padding_h", Copy(G::PaddingSm)),
    Rule::new("padding_h_sm", Copy(G::PaddingXs)),
    Rule::new("padding_v_lg", Offset(G::PaddingXxs, 2.0)),
    Rule::new("padding_v", Copy(G::PaddingXxs)),
    Rule::new("padding_v_sm", number(1.0)),
    Rule::new("border_radius", Copy(G::BorderRadiusSm)),
];
