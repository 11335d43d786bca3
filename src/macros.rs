//! Declarative generation of `Injectable` field tables

/// Define a struct together with its [`Injectable`](crate::Injectable) impl
///
/// Fields marked `#[wire("...")]` become tagged entries of the generated
/// field table, in declaration order; unmarked fields are listed untagged
/// and left untouched by injection. Marked fields must be
/// `Option<Shared<T>>` slots. A leading `#[post_inject]` marker makes the
/// generated impl surface the type's [`PostInject`](crate::PostInject)
/// capability, which the type must then implement itself.
///
/// ```
/// use solder::{injectable, Injectable, Shared};
///
/// injectable! {
///     pub struct Notifier {
///         #[wire("EmailGateway")]
///         gateway: Option<Shared<String>>,
///         retries: u32,
///     }
/// }
///
/// let mut notifier = Notifier { gateway: None, retries: 3 };
/// assert_eq!(notifier.injection_fields().len(), 2);
/// ```
#[macro_export]
macro_rules! injectable {
    (@hook) => {};
    (@hook post_inject) => {
        fn as_post_inject(&mut self) -> ::std::option::Option<&mut dyn $crate::PostInject> {
            ::std::option::Option::Some(self)
        }
    };
    (@tag) => {
        ""
    };
    (@tag $tag:literal) => {
        $tag
    };
    (@slot $slot:expr,) => {
        ::std::option::Option::None
    };
    (@slot $slot:expr, $tag:literal) => {
        ::std::option::Option::Some($slot as &mut dyn $crate::Slot)
    };
    (@build ($($hooked:ident)?)
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[wire($tag:literal)])?
                $fvis:vis $fname:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $fvis $fname : $fty, )*
        }

        impl $crate::Injectable for $name {
            fn injection_fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field {
                            name: ::std::stringify!($fname),
                            tag: $crate::injectable!(@tag $($tag)?),
                            slot: $crate::injectable!(@slot &mut self.$fname, $($tag)?),
                        },
                    )*
                ]
            }

            $crate::injectable!(@hook $($hooked)?);
        }
    };
    (#[post_inject] $($rest:tt)*) => {
        $crate::injectable!(@build (post_inject) $($rest)*);
    };
    ($($rest:tt)*) => {
        $crate::injectable!(@build () $($rest)*);
    };
}
