//! Emission.
//!
//! Operation specs render into one `impl ::dynprop::DynamicAccess` block
//! per type. Specs are consumed uniformly; the only shape variation is
//! empty-table short-circuiting, so generated code never carries unused
//! bindings.

mod get;
mod set;

use crate::{
    Artifact,
    ops::{OpKind, OperationSpec},
};
use dynprop_schema::node::TypeDef;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_str;

// artifact
#[must_use]
pub(crate) fn artifact(def: &TypeDef, ops: &[OperationSpec]) -> Artifact {
    // the schema validated this path before emission started
    let ty_path: syn::Path = parse_str(def.path.as_str())
        .unwrap_or_else(|_| panic!("invalid type path: {}", def.path));

    let methods = ops.iter().map(method);

    let tokens = quote! {
        impl ::dynprop::DynamicAccess for #ty_path {
            #(#methods)*
        }
    };

    Artifact {
        name: artifact_name(def),
        tokens,
    }
}

fn method(op: &OperationSpec) -> TokenStream {
    match op.kind {
        OpKind::GetByName => get::by_name(op),
        OpKind::GetByPath => get::by_path(op),
        OpKind::SetFromString => set::from_string(op),
        OpKind::SetFromStringByPath => set::from_string_by_path(op),
        OpKind::SetFromObject => set::from_object(op),
    }
}

fn artifact_name(def: &TypeDef) -> String {
    format!("dynamic_access.{}", def.path.as_str().replace("::", "."))
}

// stub_artifact
/// Placeholder impl emitted when no usages were discovered: gets return
/// a neutral boxed unit, sets no-op, so dependents keep compiling.
#[must_use]
pub(crate) fn stub_artifact() -> Artifact {
    let tokens = quote! {
        /// Placeholder accessor target; emitted when no accessor usages
        /// were discovered in the scanned sources.
        pub struct AccessStub;

        impl ::dynprop::DynamicAccess for AccessStub {
            fn get(
                &self,
                _name: &str,
                _ignore_casing: bool,
            ) -> Result<Box<dyn ::std::any::Any>, ::dynprop::AccessError> {
                Ok(Box::new(()))
            }

            fn get_path(
                &self,
                _path: &mut ::dynprop::PropPath,
                _ignore_casing: bool,
            ) -> Result<Box<dyn ::std::any::Any>, ::dynprop::AccessError> {
                Ok(Box::new(()))
            }

            fn set_str(
                &mut self,
                _name: &str,
                _value: &str,
                _ignore_casing: bool,
            ) -> Result<(), ::dynprop::AccessError> {
                Ok(())
            }

            fn set_str_path(
                &mut self,
                _path: &mut ::dynprop::PropPath,
                _value: &str,
                _ignore_casing: bool,
            ) -> Result<(), ::dynprop::AccessError> {
                Ok(())
            }

            fn set_obj(
                &mut self,
                _name: &str,
                _value: Box<dyn ::std::any::Any>,
                _ignore_casing: bool,
            ) -> Result<(), ::dynprop::AccessError> {
                Ok(())
            }
        }
    };

    Artifact {
        name: "dynamic_access.stub".to_string(),
        tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::synthesize;
    use dynprop_schema::{
        node::{Property, Schema, TypeDef},
        types::Primitive,
    };

    fn emit(def: &TypeDef, schema: &Schema) -> String {
        let ops = synthesize(schema, def).unwrap();
        artifact(def, &ops).source()
    }

    #[test]
    fn artifact_names_are_path_qualified() {
        let def = TypeDef::new("crate::model::Person");
        assert_eq!(
            artifact_name(&def),
            "dynamic_access.crate.model.Person"
        );
    }

    #[test]
    fn emitted_impl_targets_the_full_path() {
        let mut schema = Schema::new();
        let def = TypeDef::new("crate::model::Person")
            .with_property(Property::prim("name", Primitive::Text));
        schema.insert(def.clone()).unwrap();

        let source = emit(&def, &schema);
        syn::parse_file(&source).expect("emitted impl must parse");
        assert!(source.contains("impl :: dynprop :: DynamicAccess for crate :: model :: Person"));
    }

    #[test]
    fn propertyless_type_emits_unknown_only_bodies() {
        let mut schema = Schema::new();
        let def = TypeDef::new("m::Empty");
        schema.insert(def.clone()).unwrap();

        let source = emit(&def, &schema);
        syn::parse_file(&source).expect("emitted impl must parse");
        assert!(source.contains("unknown_property"));
        // no dispatch tables, so the casing flag is never inspected
        assert!(source.contains("_ignore_casing"));
    }

    #[test]
    fn self_referential_type_emits_recursive_dispatch() {
        let mut schema = Schema::new();
        let def = TypeDef::new("m::Node")
            .with_property(Property::prim("label", Primitive::Text))
            .with_property(Property::path("next", "m::Node"));
        schema.insert(def.clone()).unwrap();

        let source = emit(&def, &schema);
        syn::parse_file(&source).expect("emitted impl must parse");
        assert!(source.contains("get_path"));
        assert!(source.contains("\"next\""));
    }

    #[test]
    fn stub_artifact_parses_and_names_the_stub() {
        let stub = stub_artifact();

        syn::parse_file(&stub.source()).expect("stub must parse");
        assert_eq!(stub.name, "dynamic_access.stub");
        assert!(stub.source().contains("AccessStub"));
    }
}
