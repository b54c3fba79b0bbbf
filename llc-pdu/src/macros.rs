// Declares a newtype over `u8` together with named constants and a
// name/value table listing every constant in declaration order.
macro_rules! sap_registry {
    (
        $(#[$struct_attr: meta])*
        pub struct $tname:ident (u8) {
            $(
                $(#[$arm_attr: meta])*
                $arm:ident = $num_exp:expr
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
        $(#[$struct_attr])*
        pub struct $tname(u8);

        impl $tname {
            $(
                $(#[$arm_attr])*
                pub const $arm: Self = Self($num_exp);
            )+

            /// Every well-known value paired with its constant name.
            pub const WELL_KNOWN: &'static [(&'static str, Self)] = &[
                $((stringify!($arm), Self::$arm)),+
            ];

            /// Get the raw value.
            #[inline]
            pub const fn raw(&self) -> u8 {
                self.0
            }
        }

        impl ::core::convert::From<u8> for $tname {
            #[inline]
            fn from(value: u8) -> $tname {
                $tname(value)
            }
        }

        impl ::core::convert::From<$tname> for u8 {
            #[inline]
            fn from(value: $tname) -> u8 {
                value.0
            }
        }
    };
}
