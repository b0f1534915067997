//! Rate tokens
//!
//! Stars always use the yellow preset, independent of the brand colors.

use super::Derivation::*;
use super::{color, number, Rule};
use crate::color::Color;
use crate::tokens::GlobalField as G;

const STAR_YELLOW: Color = Color::rgb(250.0 / 255.0, 219.0 / 255.0, 20.0 / 255.0);

pub(super) static RULES: &[Rule] = &[
    Rule::new("star_color", color(STAR_YELLOW)),
    Rule::new("star_bg", Copy(G::ColorFillTertiary)),
    Rule::new("star_size", Scale(G::ControlHeight, 0.625)),
    Rule::new("star_size_sm", Scale(G::ControlHeightSm, 0.625)),
    Rule::new("star_size_lg", Scale(G::ControlHeightLg, 0.625)),
    Rule::new("star_hover_scale", number(1.1)),
];
