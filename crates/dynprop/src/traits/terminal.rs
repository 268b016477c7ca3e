use super::DynamicAccess;
use crate::{AccessError, PropPath};
use std::any::Any;

// Leaf types have no accessible properties: every name resolves to the
// unknown-property branch, and paths cannot traverse further. These impls
// live here rather than in generated code because coherence ties a foreign
// trait impl for a foreign type to the trait's own crate.
macro_rules! impl_terminal_access {
    ($($ty:ty),* $(,)?) => {$(
        impl DynamicAccess for $ty {
            fn get(
                &self,
                name: &str,
                _ignore_casing: bool,
            ) -> Result<Box<dyn Any>, AccessError> {
                Err(AccessError::unknown_property(name, stringify!($ty)))
            }

            fn get_path(
                &self,
                path: &mut PropPath,
                _ignore_casing: bool,
            ) -> Result<Box<dyn Any>, AccessError> {
                match path.pop_front() {
                    Some(name) => Err(AccessError::unknown_property(name, stringify!($ty))),
                    None => Err(AccessError::empty_path(stringify!($ty))),
                }
            }

            fn set_str(
                &mut self,
                name: &str,
                _value: &str,
                _ignore_casing: bool,
            ) -> Result<(), AccessError> {
                Err(AccessError::unknown_property(name, stringify!($ty)))
            }

            fn set_str_path(
                &mut self,
                path: &mut PropPath,
                _value: &str,
                _ignore_casing: bool,
            ) -> Result<(), AccessError> {
                match path.pop_front() {
                    Some(name) => Err(AccessError::unknown_property(name, stringify!($ty))),
                    None => Err(AccessError::empty_path(stringify!($ty))),
                }
            }

            fn set_obj(
                &mut self,
                name: &str,
                _value: Box<dyn Any>,
                _ignore_casing: bool,
            ) -> Result<(), AccessError> {
                Err(AccessError::unknown_property(name, stringify!($ty)))
            }
        }
    )*};
}

impl_terminal_access!(
    String, bool, char, f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128,
);
