//! Space tokens: gaps map straight onto the padding scale.

use super::Derivation::*;
use super::Rule;
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("gap_small", Copy(G::PaddingXs)),
    Rule::new("gap_middle", Copy(G::Padding)),
    Rule::new("gap_large", Copy(G::PaddingLg)),
];
