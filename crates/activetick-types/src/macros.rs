/// Declares a closed, fieldless enum backed by integer wire codes, with
/// `code`, `from_code` and an `ALL` table.
macro_rules! wire_code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in wire-code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire code.
            #[must_use]
            pub const fn code(&self) -> $repr {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Looks up a variant by its wire code.
            #[must_use]
            pub const fn from_code(code: $repr) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}
