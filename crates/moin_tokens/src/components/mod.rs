//! Component tokens
//!
//! Each component family declares a static table of [`Rule`]s, one per
//! field. A rule derives its value from the [`GlobalToken`] only, so
//! families never depend on each other and regenerating one is a pure
//! function of the global token.

mod alert;
mod avatar;
mod badge;
mod button;
mod checkbox;
mod divider;
mod empty;
mod popover;
mod progress;
mod radio;
mod rate;
mod result;
mod skeleton;
mod slider;
mod space;
mod spin;
mod statistic;
mod switch;
mod tag;
mod timeline;
mod tooltip;

use crate::color::Color;
use crate::error::TokenError;
use crate::tokens::{names_match, GlobalField, GlobalToken, TokenKind, TokenValue};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How a component field is computed from the global token
#[derive(Clone)]
pub enum Derivation {
    /// Copy a global field unchanged
    Copy(GlobalField),
    /// Fixed value
    Const(TokenValue),
    /// `global[field] + offset`
    Offset(GlobalField, f32),
    /// `global[field] * factor`
    Scale(GlobalField, f32),
    /// `sum(global[field] * weight) + offset`
    Linear {
        terms: &'static [(GlobalField, f32)],
        offset: f32,
    },
    /// `global[numerator] / global[denominator]`
    Ratio(GlobalField, GlobalField),
    /// Global color with its alpha replaced
    Alpha(GlobalField, f32),
    /// `global[field] + offset` on an integer field
    IntegerOffset(GlobalField, i32),
    /// Arbitrary function of the global token reading only `reads`
    Computed {
        reads: &'static [GlobalField],
        kind: TokenKind,
        compute: fn(&GlobalToken) -> TokenValue,
    },
}

impl Derivation {
    /// Kind of the produced value
    pub fn kind(&self) -> TokenKind {
        match self {
            Derivation::Copy(field) => field.kind(),
            Derivation::Const(value) => value.kind(),
            Derivation::Offset(..)
            | Derivation::Scale(..)
            | Derivation::Linear { .. }
            | Derivation::Ratio(..) => TokenKind::Number,
            Derivation::Alpha(..) => TokenKind::Color,
            Derivation::IntegerOffset(..) => TokenKind::Integer,
            Derivation::Computed { kind, .. } => *kind,
        }
    }

    /// Whether the value depends on `field`
    pub fn reads(&self, field: GlobalField) -> bool {
        match self {
            Derivation::Const(_) => false,
            Derivation::Copy(source)
            | Derivation::Offset(source, _)
            | Derivation::Scale(source, _)
            | Derivation::Alpha(source, _)
            | Derivation::IntegerOffset(source, _) => *source == field,
            Derivation::Linear { terms, .. } => terms.iter().any(|(source, _)| *source == field),
            Derivation::Ratio(numerator, denominator) => {
                *numerator == field || *denominator == field
            }
            Derivation::Computed { reads, .. } => reads.contains(&field),
        }
    }

    /// Global fields the value depends on
    pub fn sources(&self) -> Vec<GlobalField> {
        GlobalField::ALL
            .iter()
            .copied()
            .filter(|field| self.reads(*field))
            .collect()
    }

    pub fn evaluate(&self, global: &GlobalToken) -> TokenValue {
        let number = |field: GlobalField| global.get(field).as_number().unwrap_or_default();
        match self {
            Derivation::Copy(field) => global.get(*field),
            Derivation::Const(value) => value.clone(),
            Derivation::Offset(field, offset) => TokenValue::Number(number(*field) + offset),
            Derivation::Scale(field, factor) => TokenValue::Number(number(*field) * factor),
            Derivation::Linear { terms, offset } => TokenValue::Number(
                terms
                    .iter()
                    .fold(*offset, |sum, (field, weight)| sum + number(*field) * weight),
            ),
            Derivation::Ratio(numerator, denominator) => {
                let denominator = number(*denominator);
                let ratio = if denominator == 0.0 {
                    1.0
                } else {
                    number(*numerator) / denominator
                };
                TokenValue::Number(ratio)
            }
            Derivation::Alpha(field, alpha) => {
                let color = global.get(*field).as_color().unwrap_or_default();
                TokenValue::Color(color.with_alpha(*alpha))
            }
            Derivation::IntegerOffset(field, offset) => {
                let base = global.get(*field).as_integer().unwrap_or_default();
                TokenValue::Integer(base.saturating_add(*offset))
            }
            Derivation::Computed { compute, .. } => compute(global),
        }
    }
}

const fn number(value: f32) -> Derivation {
    Derivation::Const(TokenValue::Number(value))
}

const fn integer(value: i32) -> Derivation {
    Derivation::Const(TokenValue::Integer(value))
}

const fn color(value: Color) -> Derivation {
    Derivation::Const(TokenValue::Color(value))
}

const fn text(value: &'static str) -> Derivation {
    Derivation::Const(TokenValue::Text(Cow::Borrowed(value)))
}

/// One component field and the rule computing it
#[derive(Clone)]
pub struct Rule {
    pub field: &'static str,
    pub derive: Derivation,
}

impl Rule {
    pub const fn new(field: &'static str, derive: Derivation) -> Self {
        Self { field, derive }
    }

    /// Numeric component fields are never negative.
    pub fn minimum(&self) -> Option<f32> {
        (self.derive.kind() == TokenKind::Number).then_some(0.0)
    }

    /// Opacities stay within `0..=1`.
    pub fn maximum(&self) -> Option<f32> {
        (self.derive.kind() == TokenKind::Number && self.field.contains("opacity")).then_some(1.0)
    }

    /// Pull `value` into this field's range.
    pub fn clamp_value(&self, value: TokenValue) -> TokenValue {
        value.clamped(self.minimum(), self.maximum())
    }

    pub fn evaluate(&self, global: &GlobalToken) -> TokenValue {
        self.clamp_value(self.derive.evaluate(global))
    }
}

/// One field of one component family
///
/// Only built from a family's rule table, so the field always exists.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ComponentField {
    family: ComponentFamily,
    index: usize,
}

impl ComponentField {
    /// Look up `name` in the rule table of `family`.
    pub fn new(family: ComponentFamily, name: &str) -> Result<Self, TokenError> {
        family
            .require_field(name)
            .map(|index| Self { family, index })
    }

    pub fn family(self) -> ComponentFamily {
        self.family
    }

    /// Position in the family's rule table
    pub fn index(self) -> usize {
        self.index
    }

    pub fn rule(self) -> &'static Rule {
        &self.family.rules()[self.index]
    }

    pub fn name(self) -> &'static str {
        self.rule().field
    }

    pub fn kind(self) -> TokenKind {
        self.rule().derive.kind()
    }
}

impl Display for ComponentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.family.id(), self.name())
    }
}

/// Component families with generated tokens
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ComponentFamily {
    Alert,
    Avatar,
    Badge,
    Button,
    Checkbox,
    Divider,
    Empty,
    Popover,
    Progress,
    Radio,
    Rate,
    Result,
    Skeleton,
    Slider,
    Space,
    Spin,
    Statistic,
    Switch,
    Tag,
    Timeline,
    Tooltip,
}

impl ComponentFamily {
    /// Every family, in generation order.
    pub const ALL: &'static [ComponentFamily] = &[
        ComponentFamily::Alert,
        ComponentFamily::Avatar,
        ComponentFamily::Badge,
        ComponentFamily::Button,
        ComponentFamily::Checkbox,
        ComponentFamily::Divider,
        ComponentFamily::Empty,
        ComponentFamily::Popover,
        ComponentFamily::Progress,
        ComponentFamily::Radio,
        ComponentFamily::Rate,
        ComponentFamily::Result,
        ComponentFamily::Skeleton,
        ComponentFamily::Slider,
        ComponentFamily::Space,
        ComponentFamily::Spin,
        ComponentFamily::Statistic,
        ComponentFamily::Switch,
        ComponentFamily::Tag,
        ComponentFamily::Timeline,
        ComponentFamily::Tooltip,
    ];

    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Avatar => "avatar",
            Self::Badge => "badge",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Divider => "divider",
            Self::Empty => "empty",
            Self::Popover => "popover",
            Self::Progress => "progress",
            Self::Radio => "radio",
            Self::Rate => "rate",
            Self::Result => "result",
            Self::Skeleton => "skeleton",
            Self::Slider => "slider",
            Self::Space => "space",
            Self::Spin => "spin",
            Self::Statistic => "statistic",
            Self::Switch => "switch",
            Self::Tag => "tag",
            Self::Timeline => "timeline",
            Self::Tooltip => "tooltip",
        }
    }

    /// Derivation table for this family
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::Alert => alert::RULES,
            Self::Avatar => avatar::RULES,
            Self::Badge => badge::RULES,
            Self::Button => button::RULES,
            Self::Checkbox => checkbox::RULES,
            Self::Divider => divider::RULES,
            Self::Empty => empty::RULES,
            Self::Popover => popover::RULES,
            Self::Progress => progress::RULES,
            Self::Radio => radio::RULES,
            Self::Rate => rate::RULES,
            Self::Result => result::RULES,
            Self::Skeleton => skeleton::RULES,
            Self::Slider => slider::RULES,
            Self::Space => space::RULES,
            Self::Spin => spin::RULES,
            Self::Statistic => statistic::RULES,
            Self::Switch => switch::RULES,
            Self::Tag => tag::RULES,
            Self::Timeline => timeline::RULES,
            Self::Tooltip => tooltip::RULES,
        }
    }

    /// Position of `field` in the rule table, matched in any case style.
    pub fn field_index(self, field: &str) -> Option<usize> {
        self.rules()
            .iter()
            .position(|rule| names_match(rule.field, field))
    }

    /// Like [`ComponentFamily::field_index`] but reporting unknown fields.
    pub fn require_field(self, field: &str) -> Result<usize, TokenError> {
        self.field_index(field)
            .ok_or_else(|| TokenError::UnknownComponentField {
                family: self.id().to_string(),
                field: field.to_string(),
            })
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Display for ComponentFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ComponentFamily {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|family| names_match(family.id(), s))
            .ok_or_else(|| TokenError::UnknownFamily(s.to_string()))
    }
}

/// Token record of one component family
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentToken {
    family: ComponentFamily,
    values: Vec<TokenValue>,
}

impl ComponentToken {
    /// Evaluate every rule of `family` against `global`.
    pub fn generate(family: ComponentFamily, global: &GlobalToken) -> Self {
        Self {
            family,
            values: family
                .rules()
                .iter()
                .map(|rule| rule.evaluate(global))
                .collect(),
        }
    }

    pub fn family(&self) -> ComponentFamily {
        self.family
    }

    pub fn get(&self, field: &str) -> Option<&TokenValue> {
        self.family
            .field_index(field)
            .and_then(|index| self.values.get(index))
    }

    pub fn number(&self, field: &str) -> Option<f32> {
        self.get(field).and_then(TokenValue::as_number)
    }

    pub fn color(&self, field: &str) -> Option<Color> {
        self.get(field).and_then(TokenValue::as_color)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(TokenValue::as_text)
    }

    /// `(field, value)` pairs in rule order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &TokenValue)> + '_ {
        self.family
            .rules()
            .iter()
            .map(|rule| rule.field)
            .zip(self.values.iter())
    }

    /// Value of `field`, or `None` when it belongs to another family.
    pub fn value(&self, field: ComponentField) -> Option<&TokenValue> {
        (field.family == self.family)
            .then(|| self.values.get(field.index))
            .flatten()
    }

    pub(crate) fn set(&mut self, field: ComponentField, value: TokenValue) {
        if field.family != self.family {
            return;
        }
        if let Some(slot) = self.values.get_mut(field.index) {
            *slot = value;
        }
    }

    /// Re-evaluate the rules reading `source`, skipping fields in `keep`.
    pub(crate) fn refresh_dependents(
        &mut self,
        global: &GlobalToken,
        source: GlobalField,
        keep: impl Fn(ComponentField) -> bool,
    ) -> usize {
        let family = self.family;
        let mut refreshed = 0;
        for (index, rule) in family.rules().iter().enumerate() {
            if rule.derive.reads(source) && !keep(ComponentField { family, index }) {
                self.values[index] = rule.evaluate(global);
                refreshed += 1;
            }
        }
        refreshed
    }
}

/// Token records for every component family
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentTokens {
    tokens: Vec<ComponentToken>,
}

impl ComponentTokens {
    /// Generate every family from `global`.
    pub fn generate(global: &GlobalToken) -> Self {
        Self {
            tokens: ComponentFamily::ALL
                .iter()
                .map(|family| ComponentToken::generate(*family, global))
                .collect(),
        }
    }

    pub fn get(&self, family: ComponentFamily) -> &ComponentToken {
        &self.tokens[family.ordinal()]
    }

    pub(crate) fn get_mut(&mut self, family: ComponentFamily) -> &mut ComponentToken {
        &mut self.tokens[family.ordinal()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentToken> {
        self.tokens.iter()
    }
}
