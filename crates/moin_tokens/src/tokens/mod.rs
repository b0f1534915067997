//! Seed and global token records
//!
//! Both records are flat structs with one typed field per token plus a
//! matching key enum for dynamic access, generated from a single field list
//! by `token_record!`:
//! - [`SeedToken`] / [`SeedField`]: the user-editable inputs
//! - [`GlobalToken`] / [`GlobalField`]: semantic values derived from the seed

/// Compare token names ignoring case, `_` and `-`.
///
/// `dot_size`, `dotSize` and `dot-size` all name the same field.
pub fn names_match(canonical: &str, name: &str) -> bool {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
    };
    normalize(canonical) == normalize(name)
}

/// Declare a token record struct together with its key enum.
///
/// `header` fields are plain struct fields that are not addressable by key.
macro_rules! token_record {
    (
        $(#[$record_meta:meta])*
        pub struct $record:ident;
        $(#[$key_meta:meta])*
        pub enum $key:ident;
        header { $( $(#[$hmeta:meta])* $hfield:ident : $hty:ty ),* $(,)? }
        fields { $( $(#[$fmeta:meta])* $field:ident / $variant:ident : $ty:ty ),* $(,)? }
    ) => {
        $(#[$record_meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $record {
            $( $(#[$hmeta])* pub $hfield: $hty, )*
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        $(#[$key_meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
        pub enum $key {
            $( $variant, )*
        }

        impl $key {
            /// Every key, in declaration order.
            pub const ALL: &'static [$key] = &[ $( $key::$variant, )* ];

            /// Canonical snake_case name.
            pub fn name(self) -> &'static str {
                match self {
                    $( $key::$variant => stringify!($field), )*
                }
            }

            pub fn kind(self) -> $crate::tokens::TokenKind {
                match self {
                    $( $key::$variant => <$ty as $crate::tokens::TokenType>::KIND, )*
                }
            }

            /// Look up a key by snake_case or camelCase name.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| $crate::tokens::names_match(key.name(), name))
            }
        }

        impl std::fmt::Display for $key {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $record {
            /// Read a field as a dynamic value.
            pub fn get(&self, key: $key) -> $crate::tokens::TokenValue {
                match key {
                    $( $key::$variant => $crate::tokens::TokenType::to_value(&self.$field), )*
                }
            }

            /// Write a field from a dynamic value of the matching kind.
            pub fn set(
                &mut self,
                key: $key,
                value: $crate::tokens::TokenValue,
            ) -> $crate::error::Result<()> {
                let found = value.kind();
                let mismatch = || $crate::error::TokenError::KindMismatch {
                    field: key.name().to_string(),
                    expected: key.kind(),
                    found,
                };
                match key {
                    $(
                        $key::$variant => {
                            self.$field = <$ty as $crate::tokens::TokenType>::from_value(value)
                                .ok_or_else(mismatch)?;
                        }
                    )*
                }
                Ok(())
            }
        }
    };
}

mod global;
mod seed;
mod value;

pub use global::*;
pub use seed::*;
pub use value::*;
