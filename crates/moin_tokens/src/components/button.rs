//! Button tokens

use super::Derivation::*;
use super::{integer, number, text, Rule};
use crate::tokens::GlobalField as G;

pub(super) static RULES: &[Rule] = &[
    Rule::new("font_weight", integer(500)),
    Rule::new("content_font_size", Copy(G::FontSize)),
    Rule::new("content_font_size_lg", Copy(G::FontSizeLg)),
    Rule::new("content_font_size_sm", Copy(G::FontSizeSm)),
    Rule::new("content_line_height", Copy(G::LineHeight)),
    Rule::new("content_line_height_lg", Copy(G::LineHeightLg)),
    Rule::new("content_line_height_sm", Copy(G::LineHeightSm)),
    // inline padding excludes the border
    Rule::new(
        "padding_inline",
        Linear {
            terms: &[(G::Padding, 1.0), (G::LineWidth, -1.0)],
            offset: 0.0,
        },
    ),
    Rule::new(
        "padding_inline_lg",
        Linear {
            terms: &[(G::PaddingLg, 1.0), (G::LineWidth, -1.0)],
            offset: 0.0,
        },
    ),
    Rule::new(
        "padding_inline_sm",
        Linear {
            terms: &[(G::PaddingXs, 1.0), (G::LineWidth, -1.0)],
            offset: 0.0,
        },
    ),
    Rule::new("padding_block", number(0.0)),
    Rule::new("padding_block_lg", number(0.0)),
    Rule::new("padding_block_sm", number(0.0)),
    Rule::new("icon_gap", number(6.0)),
    Rule::new("only_icon_size", number(16.0)),
    Rule::new("only_icon_size_lg", number(18.0)),
    Rule::new("only_icon_size_sm", number(14.0)),
    Rule::new("primary_color", Copy(G::ColorPrimary)),
    Rule::new("primary_hover_color", Copy(G::ColorPrimaryHover)),
    Rule::new("primary_active_color", Copy(G::ColorPrimaryActive)),
    Rule::new("danger_color", Copy(G::ColorDanger)),
    Rule::new("default_bg", Copy(G::ColorBgContainer)),
    Rule::new("default_border_color", Copy(G::ColorBorder)),
    Rule::new("default_color", Copy(G::ColorText)),
    Rule::new("group_border_color", Copy(G::ColorPrimaryHover)),
    Rule::new("default_shadow", text("0 2px 0 rgba(0, 0, 0, 0.02)")),
    Rule::new("primary_shadow", text("0 2px 0 rgba(5, 145, 255, 0.1)")),
    Rule::new("danger_shadow", text("0 2px 0 rgba(255, 38, 5, 0.06)")),
    Rule::new("text_text_color", Copy(G::ColorText)),
    Rule::new("border_radius", Copy(G::BorderRadius)),
    Rule::new("border_radius_lg", Copy(G::BorderRadiusLg)),
    Rule::new("border_radius_sm", Copy(G::BorderRadiusSm)),
];
