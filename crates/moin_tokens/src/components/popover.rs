//! Popover tokens

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("title_min_width", number(177.0)),
    Rule::new("z_index_popup", IntegerOffset(G::ZIndexPopupBase, 30)),
    Rule::new("inner_padding", number(12.0)),
    Rule::new("title_margin_bottom", Copy(G::MarginXs)),
    Rule::new("color_bg", Copy(G::ColorBgElevated)),
    Rule::new("border_radius", Copy(G::BorderRadiusLg)),
];
