use crate::ops::{Coercion, DispatchArm, OperationSpec};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

// from_string
pub(super) fn from_string(op: &OperationSpec) -> TokenStream {
    let ty = op.ty.as_str();

    if op.case_sensitive.is_empty() {
        return quote! {
            fn set_str(
                &mut self,
                name: &str,
                _value: &str,
                _ignore_casing: bool,
            ) -> Result<(), ::dynprop::AccessError> {
                Err(::dynprop::AccessError::unknown_property(name, #ty))
            }
        };
    }

    let insensitive = op.case_insensitive.iter().map(assign_arm);
    let sensitive = op.case_sensitive.iter().map(assign_arm);

    quote! {
        fn set_str(
            &mut self,
            name: &str,
            value: &str,
            ignore_casing: bool,
        ) -> Result<(), ::dynprop::AccessError> {
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

// from_string_by_path
pub(super) fn from_string_by_path(op: &OperationSpec) -> TokenStream {
    let ty = op.ty.as_str();

    if op.case_sensitive.is_empty() {
        return quote! {
            fn set_str_path(
                &mut self,
                path: &mut ::dynprop::PropPath,
                _value: &str,
                _ignore_casing: bool,
            ) -> Result<(), ::dynprop::AccessError> {
                match path.pop_front() {
                    Some(name) => Err(::dynprop::AccessError::unknown_property(name, #ty)),
                    None => Err(::dynprop::AccessError::empty_path(#ty)),
                }
            }
        };
    }

    let insensitive = op
        .case_insensitive
        .iter()
        .map(|arm| assign_or_recurse_arm(arm, ty));
    let sensitive = op
        .case_sensitive
        .iter()
        .map(|arm| assign_or_recurse_arm(arm, ty));

    quote! {
        fn set_str_path(
            &mut self,
            path: &mut ::dynprop::PropPath,
            value: &str,
            ignore_casing: bool,
        ) -> Result<(), ::dynprop::AccessError> {
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

// from_object
pub(super) fn from_object(op: &OperationSpec) -> TokenStream {
    let ty = op.ty.as_str();

    if op.case_sensitive.is_empty() {
        return quote! {
            fn set_obj(
                &mut self,
                name: &str,
                _value: Box<dyn ::std::any::Any>,
                _ignore_casing: bool,
            ) -> Result<(), ::dynprop::AccessError> {
                Err(::dynprop::AccessError::unknown_property(name, #ty))
            }
        };
    }

    let insensitive = op.case_insensitive.iter().map(downcast_arm);
    let sensitive = op.case_sensitive.iter().map(downcast_arm);

    quote! {
        fn set_obj(
            &mut self,
            name: &str,
            value: Box<dyn ::std::any::Any>,
            ignore_casing: bool,
        ) -> Result<(), ::dynprop::AccessError> {
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

/// Coerce-and-assign; only string-settable arms reach this table.
fn assign_arm(arm: &DispatchArm) -> TokenStream {
    let key = &arm.key;
    let assign = assignment(arm);

    quote! {
        #key => {
            #assign
            Ok(())
        }
    }
}

/// Final segment assigns (string-settable only); any earlier segment
/// recurses into the nested value's own setter.
fn assign_or_recurse_arm(arm: &DispatchArm, ty: &str) -> TokenStream {
    let key = &arm.key;
    let prop = format_ident!("{}", arm.property.ident);

    let leaf = if arm.coercion.is_some() {
        let assign = assignment(arm);
        quote! {
            #assign
            Ok(())
        }
    } else {
        quote! {
            Err(::dynprop::AccessError::unknown_property(name.as_str(), #ty))
        }
    };

    quote! {
        #key => {
            if path.is_empty() {
                #leaf
            } else {
                ::dynprop::DynamicAccess::set_str_path(&mut self.#prop, path, value, ignore_casing)
            }
        }
    }
}

fn downcast_arm(arm: &DispatchArm) -> TokenStream {
    let key = &arm.key;
    let prop = format_ident!("{}", arm.property.ident);
    let prop_name = arm.property.ident.as_str();
    let prop_ty = &arm.property.ty;
    let expected = arm.property.ty.rust_name();

    quote! {
        #key => {
            self.#prop = *value
                .downcast::<#prop_ty>()
                .map_err(|_| ::dynprop::AccessError::type_mismatch(#prop_name, #expected))?;
            Ok(())
        }
    }
}

/// The coercion statement for one string-settable property.
fn assignment(arm: &DispatchArm) -> TokenStream {
    let prop = format_ident!("{}", arm.property.ident);
    let prop_name = arm.property.ident.as_str();

    match arm.coercion {
        Some(Coercion::Direct) => quote! {
            self.#prop = value.to_string();
        },
        Some(Coercion::Parse) => {
            let prop_ty = &arm.property.ty;
            quote! {
                self.#prop = value
                    .parse::<#prop_ty>()
                    .map_err(|err| ::dynprop::AccessError::parse(#prop_name, err))?;
            }
        }
        // the synthesizer never routes a non-coercible arm here
        None => unreachable!("assignment arm without coercion"),
    }
}
