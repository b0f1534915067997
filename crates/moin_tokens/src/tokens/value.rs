//! Dynamically typed token values

use crate::color::Color;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Border line style
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
}

impl LineType {
    pub fn id(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
        }
    }
}

impl FromStr for LineType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Solid, Self::Dashed]
            .into_iter()
            .find(|line| super::names_match(line.id(), s))
            .ok_or(())
    }
}

/// Motion easing curve
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionEase {
    #[default]
    EaseInOut,
    EaseOut,
    EaseIn,
    Linear,
}

impl MotionEase {
    pub fn id(self) -> &'static str {
        match self {
            Self::EaseInOut => "ease-in-out",
            Self::EaseOut => "ease-out",
            Self::EaseIn => "ease-in",
            Self::Linear => "linear",
        }
    }

    /// Control points `[x1, y1, x2, y2]` of the equivalent cubic bezier
    pub fn cubic_bezier(self) -> [f32; 4] {
        match self {
            Self::EaseInOut => [0.645, 0.045, 0.355, 1.0],
            Self::EaseOut => [0.215, 0.61, 0.355, 1.0],
            Self::EaseIn => [0.55, 0.055, 0.675, 0.19],
            Self::Linear => [0.0, 0.0, 1.0, 1.0],
        }
    }
}

impl FromStr for MotionEase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::EaseInOut, Self::EaseOut, Self::EaseIn, Self::Linear]
            .into_iter()
            .find(|ease| super::names_match(ease.id(), s))
            .ok_or(())
    }
}

/// The kind of value a token field holds
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenKind {
    Color,
    Number,
    Integer,
    Flag,
    Text,
    LineType,
    Ease,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Color => "color",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Flag => "flag",
            Self::Text => "text",
            Self::LineType => "line type",
            Self::Ease => "easing",
        })
    }
}

/// A single token value of any kind
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Color(Color),
    Number(f32),
    Integer(i32),
    Flag(bool),
    Text(Cow<'static, str>),
    LineType(LineType),
    Ease(MotionEase),
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Color(_) => TokenKind::Color,
            Self::Number(_) => TokenKind::Number,
            Self::Integer(_) => TokenKind::Integer,
            Self::Flag(_) => TokenKind::Flag,
            Self::Text(_) => TokenKind::Text,
            Self::LineType(_) => TokenKind::LineType,
            Self::Ease(_) => TokenKind::Ease,
        }
    }

    /// Convert to `kind` if the value is representable there.
    ///
    /// Integers widen to numbers; numbers narrow to integers only when they
    /// have no fractional part.
    pub fn coerce(self, kind: TokenKind) -> Option<TokenValue> {
        match (self, kind) {
            (value, kind) if value.kind() == kind => Some(value),
            (Self::Integer(i), TokenKind::Number) => Some(Self::Number(i as f32)),
            (Self::Number(n), TokenKind::Integer)
                if n.fract() == 0.0 && n >= i32::MIN as f32 && n <= i32::MAX as f32 =>
            {
                Some(Self::Integer(n as i32))
            }
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Numeric view; integers are widened.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(i) => Some(*i as f32),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_ref()),
            _ => None,
        }
    }

    /// Clamp numbers into `minimum..=maximum` and color channels into
    /// `0.0..=1.0`. Other kinds are returned unchanged.
    ///
    /// See [`clamp_number`] for NaN and infinity handling. Integers are only
    /// touched when a bound is given.
    pub fn clamped(self, minimum: Option<f32>, maximum: Option<f32>) -> TokenValue {
        match self {
            Self::Color(c) => Self::Color(c.clamped()),
            Self::Number(n) => Self::Number(clamp_number(n, minimum, maximum)),
            Self::Integer(i) if minimum.is_some() || maximum.is_some() => {
                let mut i = i;
                if let Some(min) = minimum {
                    i = i.max(min as i32);
                }
                if let Some(max) = maximum {
                    i = i.min(max as i32);
                }
                Self::Integer(i)
            }
            other => other,
        }
    }
}

/// Largest magnitude a numeric token may take
pub const NUMBER_LIMIT: f32 = 1.0e6;

/// Clamp `value` into `minimum..=maximum`.
///
/// Missing bounds default to `±NUMBER_LIMIT`, so infinities become finite.
/// NaN maps to the minimum, or to zero when there is none.
pub fn clamp_number(value: f32, minimum: Option<f32>, maximum: Option<f32>) -> f32 {
    let low = minimum.unwrap_or(-NUMBER_LIMIT);
    let high = maximum.unwrap_or(NUMBER_LIMIT).max(low);
    if value.is_nan() {
        minimum.unwrap_or(0.0).clamp(low, high)
    } else {
        value.clamp(low, high)
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Text(t) => f.write_str(t),
            Self::LineType(l) => f.write_str(l.id()),
            Self::Ease(e) => f.write_str(e.id()),
        }
    }
}

impl From<Color> for TokenValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&'static str> for TokenValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<LineType> for TokenValue {
    fn from(value: LineType) -> Self {
        Self::LineType(value)
    }
}

impl From<MotionEase> for TokenValue {
    fn from(value: MotionEase) -> Self {
        Self::Ease(value)
    }
}

/// Rust types that can back a token record field
pub trait TokenType: Sized {
    const KIND: TokenKind;

    fn to_value(&self) -> TokenValue;

    /// Extract from a value, coercing between numeric kinds where lossless.
    fn from_value(value: TokenValue) -> Option<Self>;
}

macro_rules! impl_token_type {
    ($ty:ty, $kind:ident, $value:ident => $to:expr) => {
        impl TokenType for $ty {
            const KIND: TokenKind = TokenKind::$kind;

            fn to_value(&self) -> TokenValue {
                let $value = self;
                TokenValue::$kind($to)
            }

            fn from_value(value: TokenValue) -> Option<Self> {
                match value.coerce(TokenKind::$kind)? {
                    TokenValue::$kind(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

impl_token_type!(Color, Color, v => *v);
impl_token_type!(f32, Number, v => *v);
impl_token_type!(i32, Integer, v => *v);
impl_token_type!(bool, Flag, v => *v);
impl_token_type!(Cow<'static, str>, Text, v => v.clone());
impl_token_type!(LineType, LineType, v => *v);
impl_token_type!(MotionEase, Ease, v => *v);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping_handles_non_finite_numbers() {
        assert_eq!(clamp_number(f32::NAN, Some(1.0), None), 1.0);
        assert_eq!(clamp_number(f32::NAN, None, None), 0.0);
        assert_eq!(clamp_number(f32::INFINITY, Some(0.0), None), NUMBER_LIMIT);
        assert_eq!(clamp_number(f32::NEG_INFINITY, Some(0.0), None), 0.0);
        assert_eq!(clamp_number(4.0, Some(0.0), Some(1.0)), 1.0);

        assert_eq!(
            TokenValue::Integer(-5).clamped(Some(0.0), None),
            TokenValue::Integer(0)
        );
        assert_eq!(TokenValue::Integer(-5).clamped(None, None), TokenValue::Integer(-5));
        assert_eq!(
            TokenValue::Color(Color::rgb(2.0, -1.0, 0.5)).clamped(None, None),
            TokenValue::Color(Color::rgb(1.0, 0.0, 0.5))
        );
    }

    #[test]
    fn integers_widen_and_whole_numbers_narrow() {
        assert_eq!(
            TokenValue::Integer(12).coerce(TokenKind::Number),
            Some(TokenValue::Number(12.0))
        );
        assert_eq!(
            TokenValue::Number(70.0).coerce(TokenKind::Integer),
            Some(TokenValue::Integer(70))
        );
        assert_eq!(TokenValue::Number(0.5).coerce(TokenKind::Integer), None);
        assert_eq!(TokenValue::Flag(true).coerce(TokenKind::Number), None);
    }

    #[test]
    fn token_types_extract_their_kind() {
        assert_eq!(f32::from_value(TokenValue::Integer(3)), Some(3.0));
        assert_eq!(bool::from_value(TokenValue::Number(1.0)), None);
        assert_eq!(
            <Cow<'static, str>>::from_value(TokenValue::from("mono")).as_deref(),
            Some("mono")
        );
    }

    #[test]
    fn line_types_and_easings_parse_loosely() {
        assert_eq!("Dashed".parse::<LineType>(), Ok(LineType::Dashed));
        assert_eq!("easeInOut".parse::<MotionEase>(), Ok(MotionEase::EaseInOut));
        assert_eq!("ease_out".parse::<MotionEase>(), Ok(MotionEase::EaseOut));
        assert!("dotted".parse::<LineType>().is_err());
    }
}
