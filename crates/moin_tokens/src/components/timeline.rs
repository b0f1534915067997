//! Timeline tokens

use super::Derivation::*;
use super::Rule;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("tail_color", Copy(G::ColorBorderSecondary)),
    Rule::new("tail_width", Copy(G::LineWidthBold)),
    Rule::new(
        "dot_size",
        Linear {
            terms: &[(G::LineWidthBold, 2.0), (G::ControlHeightXs, 0.25)],
            offset: 0.0,
        },
    ),
    Rule::new("dot_border_width", Copy(G::LineWidthBold)),
    Rule::new("dot_bg", Copy(G::ColorBgContainer)),
    Rule::new(
        "item_padding_bottom",
        Linear {
            terms: &[(G::PaddingLg, 1.0), (G::PaddingSm, 1.0)],
            offset: 0.0,
        },
    ),
    Rule::new("content_inset_start", Copy(G::PaddingMd)),
];
