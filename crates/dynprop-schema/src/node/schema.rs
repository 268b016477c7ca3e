use crate::{Error, prelude::*, validate::validate_schema};
use std::collections::BTreeMap;

///
/// Schema
/// Immutable-per-pass snapshot of every described type, keyed by path
/// identity. This is the descriptor provider the generator consumes;
/// nothing is cached across generation passes.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Schema {
    types: BTreeMap<TypePath, TypeDef>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Register a type. Identity is the path; defining it twice is an
    /// error, not a merge.
    pub fn insert(&mut self, def: TypeDef) -> Result<(), NodeError> {
        if self.types.contains_key(&def.path) {
            return Err(NodeError::DuplicateType { path: def.path });
        }
        self.types.insert(def.path.clone(), def);

        Ok(())
    }

    /// Descriptor lookup; an unknown path is a fail-fast generation error.
    pub fn describe(&self, path: &TypePath) -> Result<&TypeDef, NodeError> {
        self.types.get(path).ok_or_else(|| NodeError::UnknownType {
            path: path.clone(),
        })
    }

    #[must_use]
    pub fn get(&self, path: &TypePath) -> Option<&TypeDef> {
        self.types.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &TypePath) -> bool {
        self.types.contains_key(path)
    }

    /// All descriptors in path order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether a property reference is the string kind. Decided here, once,
    /// never re-derived from type names downstream.
    #[must_use]
    pub fn ref_is_text(&self, ty: &TypeRef) -> bool {
        ty.is_text()
    }

    /// Whether a property reference accepts a string through a parse
    /// factory: terminal leaves always do, path refs answer from the
    /// target descriptor.
    pub fn ref_has_parse(&self, ty: &TypeRef) -> Result<bool, NodeError> {
        match ty {
            TypeRef::Prim(prim) => Ok(prim.has_parse()),
            TypeRef::Path(path) => Ok(self.describe(path)?.has_parse),
        }
    }

    /// Validate the whole snapshot; generation refuses unvalidated input.
    pub fn validate(&self) -> Result<(), Error> {
        validate_schema(self).map_err(Error::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> TypeDef {
        TypeDef::new("crate::model::Person")
            .with_property(Property::prim("name", Primitive::Text))
            .with_property(Property::prim("age", Primitive::Nat32))
    }

    #[test]
    fn describe_unknown_type_fails() {
        let schema = Schema::new();
        let err = schema.describe(&TypePath::new("crate::model::Person"));

        assert!(matches!(err, Err(NodeError::UnknownType { .. })));
    }

    #[test]
    fn duplicate_definition_fails() {
        let mut schema = Schema::new();
        schema.insert(person()).unwrap();

        assert!(matches!(
            schema.insert(person()),
            Err(NodeError::DuplicateType { .. })
        ));
    }

    #[test]
    fn ref_flags_answer_from_the_descriptor() {
        let mut schema = Schema::new();
        schema.insert(person()).unwrap();
        schema
            .insert(TypeDef::new("crate::model::Money").with_parse())
            .unwrap();

        let text = TypeRef::Prim(Primitive::Text);
        let person = TypeRef::Path(TypePath::new("crate::model::Person"));
        let money = TypeRef::Path(TypePath::new("crate::model::Money"));

        assert!(schema.ref_is_text(&text));
        assert!(!schema.ref_is_text(&money));
        assert!(schema.ref_has_parse(&text).unwrap());
        assert!(!schema.ref_has_parse(&person).unwrap());
        assert!(schema.ref_has_parse(&money).unwrap());
    }

    #[test]
    fn dangling_ref_has_parse_fails() {
        let schema = Schema::new();
        let missing = TypeRef::Path(TypePath::new("crate::model::Missing"));

        assert!(schema.ref_has_parse(&missing).is_err());
    }
}
