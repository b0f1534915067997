//! Built-in preset brand colors, the Ant Design base color set.

use crate::color::Color;
use crate::palette::ColorPalette;
use crate::theme::ColorScheme;
use std::fmt::{Display, Formatter};

/// Built-in preset color catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetColor {
    Red,
    Volcano,
    Orange,
    Gold,
    Yellow,
    Lime,
    Green,
    Cyan,
    Blue,
    Geekblue,
    Purple,
    Magenta,
}

impl PresetColor {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Volcano => "volcano",
            Self::Orange => "orange",
            Self::Gold => "gold",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Geekblue => "geekblue",
            Self::Purple => "purple",
            Self::Magenta => "magenta",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Red => "Dust Red",
            Self::Volcano => "Volcano",
            Self::Orange => "Sunset Orange",
            Self::Gold => "Calendula Gold",
            Self::Yellow => "Sunrise Yellow",
            Self::Lime => "Lime",
            Self::Green => "Polar Green",
            Self::Cyan => "Cyan",
            Self::Blue => "Daybreak Blue",
            Self::Geekblue => "Geek Blue",
            Self::Purple => "Golden Purple",
            Self::Magenta => "Magenta",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [PresetColor] {
        const PRESETS: [PresetColor; 12] = [
            PresetColor::Red,
            PresetColor::Volcano,
            PresetColor::Orange,
            PresetColor::Gold,
            PresetColor::Yellow,
            PresetColor::Lime,
            PresetColor::Green,
            PresetColor::Cyan,
            PresetColor::Blue,
            PresetColor::Geekblue,
            PresetColor::Purple,
            PresetColor::Magenta,
        ];
        &PRESETS
    }

    /// Look up a preset by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id))
    }

    /// Hex value of the base (level 6) color.
    pub fn hex(self) -> u32 {
        match self {
            Self::Red => 0xF5222D,
            Self::Volcano => 0xFA541C,
            Self::Orange => 0xFA8C16,
            Self::Gold => 0xFAAD14,
            Self::Yellow => 0xFADB14,
            Self::Lime => 0xA0D911,
            Self::Green => 0x52C41A,
            Self::Cyan => 0x13C2C2,
            Self::Blue => 0x1677FF,
            Self::Geekblue => 0x2F54EB,
            Self::Purple => 0x722ED1,
            Self::Magenta => 0xEB2F96,
        }
    }

    /// Base (level 6) color.
    pub fn color(self) -> Color {
        Color::from_hex(self.hex())
    }

    /// Ten-level palette for `scheme` on that scheme's default canvas.
    pub fn palette(self, scheme: ColorScheme) -> ColorPalette {
        ColorPalette::generate(self.color(), scheme, ColorPalette::default_background(scheme))
    }
}

impl Display for PresetColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
