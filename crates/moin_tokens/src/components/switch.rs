//! Switch tokens
//!
//! The handle and the muted text colors use scheme-specific constants, so
//! those rules are computed from the token's scheme rather than a global
//! field.

use super::Derivation::*;
use super::{number, Rule};
use crate::color::Color;
use crate::palette::DARK_CANVAS;
use crate::tokens::{GlobalField as G, GlobalToken, TokenKind, TokenValue};

fn handle_shadow(global: &GlobalToken) -> TokenValue {
    let alpha = if global.is_dark() { 0.4 } else { 0.12 };
    TokenValue::Color(Color::BLACK.with_alpha(alpha))
}

fn text_quaternary(global: &GlobalToken) -> TokenValue {
    let base = if global.is_dark() {
        Color::WHITE
    } else {
        Color::BLACK
    };
    TokenValue::Color(base.with_alpha(0.25))
}

fn text_tertiary(global: &GlobalToken) -> TokenValue {
    TokenValue::Color(if global.is_dark() {
        Color::WHITE.with_alpha(0.35)
    } else {
        Color::BLACK.with_alpha(0.45)
    })
}

fn bg_disabled(global: &GlobalToken) -> TokenValue {
    TokenValue::Color(if global.is_dark() {
        Color::WHITE.with_alpha(0.15)
    } else {
        global.color_bg_disabled
    })
}

fn handle_bg(global: &GlobalToken) -> TokenValue {
    TokenValue::Color(if global.is_dark() {
        DARK_CANVAS
    } else {
        Color::WHITE
    })
}

pub(super) static RULES: &[Rule] = &[
    Rule::new("track_height", Offset(G::ControlHeightSm, -2.0)),
    Rule::new("track_min_width", number(44.0)),
    Rule::new("handle_size", Offset(G::ControlHeightSm, -6.0)),
    Rule::new("inner_margin", number(2.0)),
    Rule::new(
        "handle_shadow",
        Computed {
            reads: &[],
            kind: TokenKind::Color,
            compute: handle_shadow,
        },
    ),
    Rule::new("color_primary", Copy(G::ColorPrimary)),
    Rule::new("color_primary_hover", Copy(G::ColorPrimaryHover)),
    Rule::new(
        "color_text_quaternary",
        Computed {
            reads: &[],
            kind: TokenKind::Color,
            compute: text_quaternary,
        },
    ),
    Rule::new(
        "color_text_tertiary",
        Computed {
            reads: &[],
            kind: TokenKind::Color,
            compute: text_tertiary,
        },
    ),
    Rule::new("color_text_disabled", Copy(G::ColorTextDisabled)),
    Rule::new(
        "color_bg_disabled",
        Computed {
            reads: &[G::ColorBgDisabled],
            kind: TokenKind::Color,
            compute: bg_disabled,
        },
    ),
    Rule::new(
        "handle_bg",
        Computed {
            reads: &[],
            kind: TokenKind::Color,
            compute: handle_bg,
        },
    ),
];
