//! Badge tokens

use super::Derivation::*;
use super::{color, integer, number, Rule};
use crate::color::Color;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("indicator_height", number(18.0)),
    Rule::new("indicator_height_sm", number(14.0)),
    Rule::new("dot_size", number(8.0)),
    Rule::new("dot_size_sm", number(6.0)),
    Rule::new("text_font_size", number(11.0)),
    Rule::new("text_font_size_sm", number(10.0)),
    Rule::new("text_font_weight", integer(500)),
    Rule::new("status_size", number(6.0)),
    Rule::new("shadow_radius", number(2.0)),
    Rule::new("shadow_opacity", number(0.3)),
    Rule::new("padding_h", number(6.0)),
    Rule::new("padding_h_sm", number(4.0)),
    Rule::new("text_color", color(Color::WHITE)),
    Rule::new("badge_color", Copy(G::ColorDanger)),
];
