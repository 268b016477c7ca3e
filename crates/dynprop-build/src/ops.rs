//! Accessor synthesis.
//!
//! For each discovered type the synthesizer produces one declarative
//! [`OperationSpec`] per operation, purely from that type's accessible
//! property list plus provider flag lookups. Emission consumes the specs
//! uniformly; no operation gets bespoke per-type control flow.

use crate::Error;
use dynprop_schema::node::{Property, Schema, TypeDef};
use dynprop_schema::types::TypePath;

///
/// OpKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OpKind {
    GetByName,
    GetByPath,
    SetFromString,
    SetFromStringByPath,
    SetFromObject,
}

impl OpKind {
    /// Emission order; fixed so artifacts are reproducible.
    pub const ALL: [Self; 5] = [
        Self::GetByName,
        Self::GetByPath,
        Self::SetFromString,
        Self::SetFromStringByPath,
        Self::SetFromObject,
    ];
}

///
/// Coercion
/// How a string value becomes the property's value, decided once from
/// descriptor flags at synthesis time.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coercion {
    /// The string kind; assigned directly.
    Direct,
    /// Routed through the declared type's parse factory.
    Parse,
}

///
/// DispatchArm
///

#[derive(Clone, Debug)]
pub struct DispatchArm {
    /// Match key; pre-lowered in the case-insensitive table.
    pub key: String,
    pub property: Property,
    /// `None` means the property is not string-settable.
    pub coercion: Option<Coercion>,
}

///
/// OperationSpec
/// One operation bound to one type: two independent dispatch tables (the
/// insensitive one with keys lowered here, not per call) and the owning
/// type identity for the unknown-name error.
///

#[derive(Clone, Debug)]
pub struct OperationSpec {
    pub kind: OpKind,
    pub ty: TypePath,
    pub case_sensitive: Vec<DispatchArm>,
    pub case_insensitive: Vec<DispatchArm>,
}

// synthesize
/// Produce the full operation set for one type, in emission order.
pub fn synthesize(schema: &Schema, def: &TypeDef) -> Result<Vec<OperationSpec>, Error> {
    OpKind::ALL
        .iter()
        .map(|kind| operation(schema, def, *kind))
        .collect()
}

fn operation(schema: &Schema, def: &TypeDef, kind: OpKind) -> Result<OperationSpec, Error> {
    let mut case_sensitive = Vec::new();

    for property in def.accessible() {
        let coercion = coercion(schema, property)?;

        // the name-form string setter offers only string-settable
        // properties; everything else is unreachable through it
        if kind == OpKind::SetFromString && coercion.is_none() {
            continue;
        }

        case_sensitive.push(DispatchArm {
            key: property.ident.clone(),
            property: property.clone(),
            coercion,
        });
    }

    // lowered keys may collide; the first declared property wins
    let mut case_insensitive: Vec<DispatchArm> = Vec::new();
    for arm in &case_sensitive {
        let key = arm.key.to_lowercase();
        if case_insensitive.iter().any(|a| a.key == key) {
            continue;
        }
        case_insensitive.push(DispatchArm {
            key,
            ..arm.clone()
        });
    }

    Ok(OperationSpec {
        kind,
        ty: def.path.clone(),
        case_sensitive,
        case_insensitive,
    })
}

fn coercion(schema: &Schema, property: &Property) -> Result<Option<Coercion>, Error> {
    if schema.ref_is_text(&property.ty) {
        return Ok(Some(Coercion::Direct));
    }
    if schema.ref_has_parse(&property.ty)? {
        return Ok(Some(Coercion::Parse));
    }

    Ok(None)
}
