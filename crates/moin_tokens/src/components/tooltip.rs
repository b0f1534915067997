//! Tooltip tokens

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("max_width", number(250.0)),
    Rule::new("z_index_popup", IntegerOffset(G::ZIndexPopupBase, 70)),
    Rule::new("color_bg", Copy(G::ColorBgSpotlight)),
    Rule::new("color_text", Copy(G::ColorTextLightSolid)),
    Rule::new("border_radius", Copy(G::BorderRadius)),
];
