/// Declares a closed vocabulary.
///
/// Each variant needs an explicit discriminant (counting up from `0`) and its spelling.
macro_rules! symbols {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $discriminant:literal => $spelling:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_primitive_derive::Primitive)]
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant = $discriminant, )+
        }

        impl $crate::Symbol for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn spelling(self) -> &'static str {
                match self {
                    $( $name::$variant => $spelling, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::Symbol::spelling(*self))
            }
        }
    };
}
