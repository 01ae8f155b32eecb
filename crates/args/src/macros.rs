//! Declarative macro for closed wire-string tables.
//!
//! [`wire_table!`] defines an enum whose every variant carries exactly one
//! canonical REST API spelling. It is used for the parameter-name table and
//! for the enumerated parameter values, so a misspelled wire string can only
//! exist in one place.
//!
//! # Generated items
//!
//! - the enum itself, deriving `Debug, Clone, Copy, PartialEq, Eq, Hash`
//! - `ALL`: every variant in declaration order
//! - `as_str()`: the wire string (total)
//! - `from_wire()`: the reverse lookup, `None` for unknown strings
//! - `Display` and `AsRef<str>`, both rendering the wire string
//!
//! ```ignore
//! wire_table! {
//!     /// How a search job is executed.
//!     pub enum ExecutionMode {
//!         Normal => "normal",
//!         Blocking => "blocking",
//!     }
//! }
//! ```

macro_rules! wire_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every constant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact REST API spelling of this constant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Look up the constant for a wire string. Matching is exact.
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Comma-separated list of every wire string, for error messages.
            #[allow(dead_code)]
            pub(crate) fn expected() -> String {
                [$($wire),+].join(", ")
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}
