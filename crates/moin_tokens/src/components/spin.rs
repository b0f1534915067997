//! Spin (loading indicator) tokens

use super::Derivation::*;
use super::{number, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("dot_size", Scale(G::ControlHeightLg, 0.5)),
    Rule::new("dot_size_sm", Scale(G::ControlHeightLg, 0.35)),
    Rule::new("dot_size_lg", Copy(G::ControlHeight)),
    Rule::new("content_height", number(400.0)),
    // seconds per rotation
    Rule::new("motion_duration", number(1.2)),
    Rule::new("color", Copy(G::ColorPrimary)),
];
