use crate::ops::{DispatchArm, OperationSpec};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

// by_name
pub(super) fn by_name(op: &OperationSpec) -> TokenStream {
    let ty = op.ty.as_str();

    if op.case_sensitive.is_empty() {
        return quote! {
            fn get(
                &self,
                name: &str,
                _ignore_casing: bool,
            ) -> Result<Box<dyn ::std::any::Any>, ::dynprop::AccessError> {
                Err(::dynprop::AccessError::unknown_property(name, #ty))
            }
        };
    }

    let insensitive = op.case_insensitive.iter().map(return_arm);
    let sensitive = op.case_sensitive.iter().map(return_arm);

    quote! {
        fn get(
            &self,
            name: &str,
            ignore_casing: bool,
        ) -> Result<Box<dyn ::std::any::Any>, ::dynprop::AccessError> {
            if ignore_casing {
                match name.to_lowercase().as_str() {
                    #(#insensitive)*
                    _ => Err(::dynprop::AccessError::unknown_property(name, #ty)),
                }
            } else {
                match name {
                    #(#sensitive)*
                    _ => Err(::dynprop::AccessError::unknown_property(name, #ty)),
                }
            }
        }
    }
}

// by_path
pub(super) fn by_path(op: &OperationSpec) -> TokenStream {
    let ty = op.ty.as_str();

    if op.case_sensitive.is_empty() {
        return quote! {
            fn get_path(
                &self,
                path: &mut ::dynprop::PropPath,
                _ignore_casing: bool,
            ) -> Result<Box<dyn ::std::any::Any>, ::dynprop::AccessError> {
                match path.pop_front() {
                    Some(name) => Err(::dynprop::AccessError::unknown_property(name, #ty)),
                    None => Err(::dynprop::AccessError::empty_path(#ty)),
                }
            }
        };
    }

    let insensitive = op.case_insensitive.iter().map(resolve_arm);
    let sensitive = op.case_sensitive.iter().map(resolve_arm);

    quote! {
        fn get_path(
            &self,
            path: &mut ::dynprop::PropPath,
            ignore_casing: bool,
        ) -> Result<Box<dyn ::std::any::Any>, ::dynprop::AccessError> {
            let name = match path.pop_front() {
                Some(name) => name,
                None => return Err(::dynprop::AccessError::empty_path(#ty)),
            };
            if ignore_casing {
                match name.to_lowercase().as_str() {
                    #(#insensitive)*
                    _ => Err(::dynprop::AccessError::unknown_property(name.as_str(), #ty)),
                }
            } else {
                match name.as_str() {
                    #(#sensitive)*
                    _ => Err(::dynprop::AccessError::unknown_property(name.as_str(), #ty)),
                }
            }
        }
    }
}

/// `name => Ok(boxed clone)`.
fn return_arm(arm: &DispatchArm) -> TokenStream {
    let key = &arm.key;
    let prop = format_ident!("{}", arm.property.ident);

    quote! {
        #key => Ok(Box::new(self.#prop.clone())),
    }
}

/// Final segment returns the value, otherwise recursion continues into
/// the nested value's own generated (or terminal) accessor.
fn resolve_arm(arm: &DispatchArm) -> TokenStream {
    let key = &arm.key;
    let prop = format_ident!("{}", arm.property.ident);

    quote! {
        #key => {
            if path.is_empty() {
                Ok(Box::new(self.#prop.clone()))
            } else {
                ::dynprop::DynamicAccess::get_path(&self.#prop, path, ignore_casing)
            }
        }
    }
}
