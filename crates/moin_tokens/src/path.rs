//! Dotted token paths: `seed.color_primary`, `global.border_radius`,
//! `badge.dot_size`

use crate::components::{ComponentFamily, ComponentField};
use crate::error::TokenError;
use crate::tokens::{GlobalField, SeedField, TokenKind, TokenValue};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Address of a single token in any layer
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenPath {
    Seed(SeedField),
    Global(GlobalField),
    Component(ComponentField),
}

impl TokenPath {
    /// Address a component field by name.
    pub fn component(family: ComponentFamily, field: &str) -> Result<Self, TokenError> {
        ComponentField::new(family, field).map(TokenPath::Component)
    }

    /// Kind of value stored at this path
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenPath::Seed(field) => field.kind(),
            TokenPath::Global(field) => field.kind(),
            TokenPath::Component(field) => field.kind(),
        }
    }

    /// Canonical field name, without the layer prefix
    pub fn field_name(&self) -> &'static str {
        match self {
            TokenPath::Seed(field) => field.name(),
            TokenPath::Global(field) => field.name(),
            TokenPath::Component(field) => field.name(),
        }
    }

    /// Pull `value` into the range accepted at this path. NaN becomes the
    /// minimum and infinities are capped.
    pub fn clamp_value(&self, value: TokenValue) -> TokenValue {
        match self {
            TokenPath::Seed(field) => value.clamped(field.minimum(), field.maximum()),
            TokenPath::Global(field) => value.clamped(field.minimum(), field.maximum()),
            TokenPath::Component(field) => field.rule().clamp_value(value),
        }
    }
}

impl Display for TokenPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let layer = match self {
            TokenPath::Seed(_) => "seed",
            TokenPath::Global(_) => "global",
            TokenPath::Component(field) => field.family().id(),
        };
        write!(f, "{layer}.{}", self.field_name())
    }
}

impl FromStr for TokenPath {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (layer, field) = s
            .split_once('.')
            .ok_or_else(|| TokenError::UnknownGlobalField(s.to_string()))?;
        match layer {
            "seed" => field.parse().map(TokenPath::Seed),
            "global" | "token" => field.parse().map(TokenPath::Global),
            family => TokenPath::component(family.parse()?, field),
        }
    }
}
