/// Declares a closed registry of numeric error codes.
///
/// Each entry is `Variant = value => "name", "message"`. The generated enum
/// is `#[repr]`-tagged with the given integer type and gets:
///
///  - `ALL`: every variant, in declaration order.
///  - `value()`, `name()` and `message()`.
///  - `TryFrom<repr>`, failing with [`UnknownCodeError`](crate::UnknownCodeError)
///    for values that are not registered.
///  - `Display`, which renders the message.
macro_rules! define_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident in $domain:expr => {
            $(
                $(#[doc = $doc:expr])*
                $variant:ident = $value:literal => $code_name:literal, $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[doc = $doc])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Every registered code, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The numeric value of this code.
            pub const fn value(self) -> $repr {
                self as $repr
            }

            /// The canonical name of this code.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $code_name,)*
                }
            }

            /// A human-readable description of this code.
            pub const fn message(self) -> &'static str {
                match self {
                    $($name::$variant => $message,)*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.message())
            }
        }

        impl ::std::convert::TryFrom<$repr> for $name {
            type Error = $crate::UnknownCodeError;

            fn try_from(value: $repr) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)*
                    _ => Err($crate::UnknownCodeError::new($domain, i64::from(value))),
                }
            }
        }
    };
}

pub(crate) use define_codes;
