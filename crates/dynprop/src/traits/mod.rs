mod terminal;

use crate::{AccessError, PropPath};
use std::any::Any;

///
/// DynamicAccess
/// The generated accessor surface: one impl per discovered type, emitted
/// at build time, plus terminal impls for leaf types in this crate.
/// Values cross the boundary as boxed `Any` clones, so accessible
/// property types must be `Clone`.
///

pub trait DynamicAccess {
    /// Read a property by name. Unmatched names fail with
    /// [`AccessError::UnknownProperty`].
    fn get(&self, name: &str, ignore_casing: bool) -> Result<Box<dyn Any>, AccessError>;

    /// Resolve a path front to back, recursing through nested property
    /// values. Failures name the segment that did not resolve.
    fn get_path(&self, path: &mut PropPath, ignore_casing: bool)
    -> Result<Box<dyn Any>, AccessError>;

    /// Assign a property from a string: assigned directly for the string
    /// kind, otherwise through the type's parse factory. Properties that
    /// support neither are not offered by this operation.
    fn set_str(&mut self, name: &str, value: &str, ignore_casing: bool)
    -> Result<(), AccessError>;

    /// Path form of [`DynamicAccess::set_str`]; coercion happens only at
    /// the final segment.
    fn set_str_path(
        &mut self,
        path: &mut PropPath,
        value: &str,
        ignore_casing: bool,
    ) -> Result<(), AccessError>;

    /// Assign a property from a boxed value; a failed downcast to the
    /// declared type is [`AccessError::TypeMismatch`].
    fn set_obj(
        &mut self,
        name: &str,
        value: Box<dyn Any>,
        ignore_casing: bool,
    ) -> Result<(), AccessError>;

    /// Resolve a dot-delimited path front to back.
    fn get_dotted(&self, path: &str, ignore_casing: bool) -> Result<Box<dyn Any>, AccessError> {
        let mut path = PropPath::parse(path);
        self.get_path(&mut path, ignore_casing)
    }

    /// Assign through a dot-delimited path.
    fn set_str_dotted(
        &mut self,
        path: &str,
        value: &str,
        ignore_casing: bool,
    ) -> Result<(), AccessError> {
        let mut path = PropPath::parse(path);
        self.set_str_path(&mut path, value, ignore_casing)
    }
}
