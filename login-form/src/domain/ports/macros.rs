//! Defines helper macros for generating domain port error enums.
//!
//! Each variant gets a `snake_case` constructor accepting `impl Into<_>` for
//! every field, so adapters can write `AuthError::transport("...")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        /// Port error used to exercise the macro.
        pub enum ExamplePortError {
            /// Unit variant.
            Unavailable => "unavailable",
            /// Single string field.
            Refused {
                /// Reason text.
                message: String,
            } => "refused: {message}",
            /// Mixed field types.
            Failed {
                /// HTTP status.
                status: u16,
                /// Reason text.
                message: String,
            } => "failed ({status}): {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::refused("busy");
        assert_eq!(err.to_string(), "refused: busy");
    }

    #[test]
    fn constructors_support_unit_variants() {
        assert_eq!(ExamplePortError::unavailable().to_string(), "unavailable");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::failed(503_u16, "maintenance");
        assert_eq!(err.to_string(), "failed (503): maintenance");
        assert_eq!(
            err,
            ExamplePortError::Failed {
                status: 503,
                message: "maintenance".to_owned(),
            }
        );
    }
}
