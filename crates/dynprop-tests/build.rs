//! Generates the fixture accessors consumed by this crate's tests: scans
//! the fixture sources for usage markers, runs the generator over the
//! fixture schema, and writes the emitted impls under `OUT_DIR`.

use dynprop_build::{SourceScan, UsageDiscovery, generate_source};
use dynprop_schema::node::{Property, Schema, TypeDef};
use dynprop_schema::types::Primitive;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/fixtures.rs");

    let schema = fixture_schema();
    let seeds = SourceScan::new(["src/fixtures.rs"])
        .seeds()
        .expect("fixture sources must scan");

    let generated = generate_source(&schema, &seeds).expect("accessor generation must succeed");
    let stub = generate_source(&schema, &BTreeSet::new()).expect("stub generation must succeed");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("dynamic_access.rs"), generated)
        .expect("generated accessors must be written");
    fs::write(out_dir.join("dynamic_access_stub.rs"), stub)
        .expect("stub accessors must be written");
}

fn fixture_schema() -> Schema {
    let mut schema = Schema::new();

    schema
        .insert(
            TypeDef::new("crate::fixtures::Container")
                .with_property(Property::path("inner", "crate::fixtures::Person"))
                .with_property(Property::prim("label", Primitive::Text)),
        )
        .expect("container definition");

    schema
        .insert(
            TypeDef::new("crate::fixtures::Person")
                .with_property(Property::prim("name", Primitive::Text))
                .with_property(Property::prim("last_name", Primitive::Text))
                .with_property(Property::prim("age", Primitive::Nat32))
                .with_property(Property::path("address", "crate::fixtures::Address"))
                .with_property(Property::path("salary", "crate::fixtures::Money"))
                .with_property(Property::prim("legacy", Primitive::Text).exclude()),
        )
        .expect("person definition");

    schema
        .insert(
            TypeDef::new("crate::fixtures::Address")
                .with_property(Property::prim("street", Primitive::Text))
                .with_property(Property::prim("number", Primitive::Nat32)),
        )
        .expect("address definition");

    schema
        .insert(
            TypeDef::new("crate::fixtures::Money")
                .with_parse()
                .with_property(Property::prim("cents", Primitive::Nat64)),
        )
        .expect("money definition");

    schema
}
