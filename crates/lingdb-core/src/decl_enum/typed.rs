//! Typed Rust enums backed by a declared enumeration.

use super::column::DeclEnumType;
use super::enumeration::Enumeration;
use super::scalar::EnumValue;
use super::symbol::Symbol;
use crate::error::Result;
use crate::value::Value;

/// A fieldless Rust enum whose variants are the named constants of an
/// [`Enumeration`].
///
/// Implemented by [`decl_enum!`](crate::decl_enum!); the variant order is the
/// declaration order of the symbols.
pub trait DeclEnum: Copy + Eq + 'static {
    /// Persisted value type.
    type Value: EnumValue;

    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// The process-wide enumeration backing this type.
    fn enumeration() -> &'static Enumeration<Self::Value>;

    /// Declaration position of this variant.
    fn ordinal(self) -> usize;

    /// The symbol for this variant.
    fn symbol(self) -> &'static Symbol<Self::Value> {
        &Self::enumeration().declared()[self.ordinal()]
    }

    /// Name of the constant.
    fn name(self) -> &'static str {
        self.symbol().name()
    }

    /// Persisted value.
    fn value(self) -> &'static Self::Value {
        self.symbol().value()
    }

    /// Human-readable description.
    fn description(self) -> &'static str {
        self.symbol().description()
    }

    /// Variant for a symbol of this type's enumeration.
    fn from_symbol(symbol: &Symbol<Self::Value>) -> Option<Self> {
        if symbol.enumeration() != Self::enumeration().name() {
            return None;
        }
        // Names are not unique across runtime enumerations.
        let own = Self::enumeration().from_value(symbol.value()).ok()?;
        if own.ordinal() != symbol.ordinal() || own.name() != symbol.name() {
            return None;
        }
        Self::VARIANTS.get(own.ordinal()).copied()
    }

    /// Look up a variant by the textual form of its persisted value.
    fn from_string(value: &str) -> Result<Self> {
        let symbol = Self::enumeration().from_string(value)?;
        Ok(Self::VARIANTS[symbol.ordinal()])
    }

    /// Look up a variant by persisted value.
    fn from_value(value: &Self::Value) -> Result<Self> {
        let symbol = Self::enumeration().from_value(value)?;
        Ok(Self::VARIANTS[symbol.ordinal()])
    }

    /// All persisted values in ascending order.
    fn values() -> Vec<Self::Value> {
        Self::enumeration().values()
    }

    /// All variants ordered by persisted value.
    fn sorted() -> Vec<Self> {
        Self::enumeration()
            .iter()
            .map(|symbol| Self::VARIANTS[symbol.ordinal()])
            .collect()
    }

    /// Persistence adapter for columns of this type.
    fn db_type() -> DeclEnumType<'static, Self::Value> {
        Self::enumeration().db_type()
    }

    /// Storage scalar for this variant.
    fn to_value(self) -> Value {
        self.symbol().to_value()
    }

    /// Read a stored scalar. `NULL` reads as `None`.
    fn from_stored(value: &Value) -> Result<Option<Self>> {
        let symbol = Self::db_type().read(value)?;
        Ok(symbol.map(|symbol| Self::VARIANTS[symbol.ordinal()]))
    }
}

/// Declare a typed enumeration.
///
/// Each variant is bound to a `(value, description, extra...)` tuple. The
/// macro generates the enum, implements [`DeclEnum`] for it with a lazily
/// built, process-wide [`Enumeration`], and adds `Display`, `FromStr`,
/// ordering by persisted value and serde support using the persisted value.
///
/// ```
/// use lingdb_core::decl_enum;
/// use lingdb_core::decl_enum::DeclEnum;
///
/// decl_enum! {
///     /// Grammatical gender.
///     pub enum Gender: String {
///         Male = ("m", "masculine"),
///         Female = ("f", "feminine"),
///     }
/// }
///
/// assert_eq!(Gender::from_string("m").unwrap(), Gender::Male);
/// assert_eq!(Gender::Female.to_string(), "f");
/// assert_eq!(Gender::db_type().name(), "ck_gender");
/// ```
///
/// Declaring two variants with the same persisted value is a programming
/// error and panics the first time the enumeration is used.
#[macro_export]
macro_rules! decl_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $vt:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($value:expr, $description:expr $(, $extra:expr)* $(,)?)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::decl_enum::DeclEnum for $name {
            type Value = $vt;

            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn enumeration() -> &'static $crate::decl_enum::Enumeration<$vt> {
                static ENUMERATION: ::std::sync::LazyLock<$crate::decl_enum::Enumeration<$vt>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::decl_enum::Enumeration::builder(stringify!($name))
                            $(
                                .symbol_with_extra(
                                    stringify!($variant),
                                    $value,
                                    $description,
                                    ::std::vec![$(::std::string::String::from($extra)),*],
                                )
                            )+
                            .build()
                            .unwrap_or_else(|err| {
                                ::std::panic!("invalid declaration of {}: {}", stringify!($name), err)
                            })
                    });
                &ENUMERATION
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt($crate::decl_enum::DeclEnum::value(*self), f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::decl_enum::DeclEnum>::from_string(s)
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::std::cmp::Ord::cmp(
                    $crate::decl_enum::DeclEnum::value(*self),
                    $crate::decl_enum::DeclEnum::value(*other),
                )
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    $crate::decl_enum::DeclEnum::value(*self),
                    serializer,
                )
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value: $vt = $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                <$name as $crate::decl_enum::DeclEnum>::from_value(&value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
