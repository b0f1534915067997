//! Progress tokens

use super::Derivation::*;
use super::{number, text, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("default_color", Copy(G::ColorInfo)),
    Rule::new("remaining_color", Copy(G::ColorFillSecondary)),
    Rule::new("circle_text_color", Copy(G::ColorText)),
    Rule::new("line_border_radius", number(100.0)),
    Rule::new("circle_text_font_size", text("1em")),
    // icon size in em, relative to the body font
    Rule::new("circle_icon_font_size", Ratio(G::FontSize, G::FontSizeSm)),
];
