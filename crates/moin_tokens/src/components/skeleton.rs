//! Skeleton placeholder tokens

use super::Derivation::*;
use super::Rule;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("gradient_from_color", Copy(G::ColorFillSecondary)),
    Rule::new("gradient_to_color", Copy(G::ColorFill)),
    Rule::new("title_height", Scale(G::ControlHeight, 0.5)),
    Rule::new("block_radius", Copy(G::BorderRadiusSm)),
    Rule::new(
        "paragraph_margin_top",
        Linear {
            terms: &[(G::MarginLg, 1.0), (G::MarginXxs, 1.0)],
            offset: 0.0,
        },
    ),
    Rule::new("paragraph_li_height", Scale(G::ControlHeight, 0.5)),
];
