use super::Derivation::*;
use super::Rule;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("title_font_size", Copy(G::FontSize)),
    Rule::new("content_font_size", Copy(G::FontSizeHeading3)),
];
