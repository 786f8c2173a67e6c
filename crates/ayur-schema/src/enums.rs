//! Database enums.
//!
//! An enum is a closed set of string literals. `define_enum!` produces the
//! Rust enum together with its literal list, so the runtime constants and the
//! type are one definition.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// A database enum type.
pub trait DbEnum:
    Copy + Eq + std::hash::Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Enum name in the database, e.g. `user_role`.
    const NAME: &'static str;

    /// Literal members in declaration order.
    const VALUES: &'static [&'static str];

    /// Every variant in declaration order.
    const ALL: &'static [Self];

    /// The literal for this variant.
    fn as_str(&self) -> &'static str;

    /// Parse a literal; exact, case-sensitive match.
    fn parse_literal(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// Literal members of enum `E`.
pub type EnumValues<E> = &'static [E];

/// Literal members of `E`, for iteration.
pub fn enum_values<E: DbEnum>() -> EnumValues<E> {
    E::ALL
}

macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident as $name:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $ty {
            $(
                $(#[$vmeta])*
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        impl $crate::enums::DbEnum for $ty {
            const NAME: &'static str = $name;
            const VALUES: &'static [&'static str] = &[$($lit),+];
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $lit, )+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::enums::DbEnum>::parse_literal(s).ok_or_else(|| {
                    $crate::error::SchemaError::InvalidEnumValue {
                        enum_name: $name.to_string(),
                        value: s.to_string(),
                    }
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<Self as $crate::enums::DbEnum>::as_str(self))
            }
        }
    };
}

pub(crate) use define_enum;
