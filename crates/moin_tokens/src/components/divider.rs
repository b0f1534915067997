//! Divider tokens

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("text_padding", Copy(G::Padding)),
    // share of the line placed before left/right oriented text
    Rule::new("orientation_margin", number(0.05)),
    Rule::new("dash_length", number(4.0)),
    Rule::new("dash_gap", number(4.0)),
    Rule::new("line_width", Copy(G::LineWidth)),
    Rule::new("color_split", Copy(G::ColorBorderSecondary)),
];
