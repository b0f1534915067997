//! Result page tokens

use super::Derivation::*;
use super::Rule;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("title_font_size", Copy(G::FontSizeHeading3)),
    Rule::new("subtitle_font_size", Copy(G::FontSize)),
    Rule::new("icon_font_size", Scale(G::FontSizeHeading3, 3.0)),
    Rule::new("extra_margin", Copy(G::PaddingLg)),
    Rule::new("padding", Scale(G::PaddingLg, 2.0)),
];
