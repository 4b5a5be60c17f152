//! Macro for defining closed value sets with validating constructors
//!
//! Form widgets hand the core raw strings; every enum below gets an explicit
//! parse that rejects unrecognized values with a `ValidationError` instead of
//! storing them silently.

/// Define a catalog value enum with serde, `FromStr` and `as_str` support.
///
/// The string values double as the serde wire representation, so parsing a
/// raw form value and deserializing a stored record accept exactly the same
/// set.
///
/// # Example
///
/// ```rust,ignore
/// value_enum!(
///     /// How the engine is fueled.
///     EngineType, "engineType", {
///         Petrol => "petrol",
///         Diesel => "diesel",
///         Electric => "electric",
///     }
/// );
/// ```
#[macro_export]
macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every recognized value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The raw string values accepted by [`FromStr`](::std::str::FromStr)
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// The wire value stored and exchanged with form widgets
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::core::error::ValidationError::unknown_value(
                        $field,
                        other,
                        Self::VALUES,
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
