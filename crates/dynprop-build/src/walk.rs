//! Type-graph discovery.
//!
//! FIFO worklist over the property graph: seeds first (in their sorted
//! set order), then every path-typed property target, breadth-first.
//! First discovery wins, so emission order is reproducible; the visited
//! set guarantees each identity is committed exactly once no matter how
//! many property edges point at it, which is also what makes
//! self-referential and cyclic graphs terminate.

use crate::Error;
use dynprop_schema::{node::Schema, types::TypePath};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Discover every type reachable from the seeds through accessible
/// property references. A path the schema cannot describe aborts the
/// pass. Terminal (primitive) property types are not enqueued; their
/// accessors exist statically in the runtime crate.
pub fn walk(schema: &Schema, seeds: &BTreeSet<TypePath>) -> Result<Vec<TypePath>, Error> {
    let mut queue: VecDeque<TypePath> = seeds.iter().cloned().collect();
    let mut visited: HashSet<TypePath> = HashSet::new();
    let mut order: Vec<TypePath> = Vec::new();

    while let Some(path) = queue.pop_front() {
        if !visited.insert(path.clone()) {
            continue;
        }

        let def = schema.describe(&path)?;
        order.push(path);

        for property in def.accessible() {
            if let Some(target) = property.ty.as_path() {
                // enqueue even when target == current; the visited check
                // above is the single dedup point
                queue.push_back(target.clone());
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynprop_schema::{
        node::{Property, TypeDef},
        types::Primitive,
    };

    fn seeds(paths: &[&str]) -> BTreeSet<TypePath> {
        paths.iter().map(|p| TypePath::new(*p)).collect()
    }

    fn paths(order: &[TypePath]) -> Vec<&str> {
        order.iter().map(TypePath::as_str).collect()
    }

    #[test]
    fn empty_seeds_discover_nothing() {
        let order = walk(&Schema::new(), &BTreeSet::new()).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn nested_types_are_discovered_breadth_first() {
        let mut schema = Schema::new();
        schema
            .insert(
                TypeDef::new("m::Container")
                    .with_property(Property::path("inner", "m::Person"))
                    .with_property(Property::prim("label", Primitive::Text)),
            )
            .unwrap();
        schema
            .insert(
                TypeDef::new("m::Person")
                    .with_property(Property::path("address", "m::Address")),
            )
            .unwrap();
        schema.insert(TypeDef::new("m::Address")).unwrap();

        let order = walk(&schema, &seeds(&["m::Container"])).unwrap();
        assert_eq!(paths(&order), ["m::Container", "m::Person", "m::Address"]);
    }

    #[test]
    fn self_referential_type_is_committed_once() {
        let mut schema = Schema::new();
        schema
            .insert(
                TypeDef::new("m::Node")
                    .with_property(Property::prim("label", Primitive::Text))
                    .with_property(Property::path("next", "m::Node")),
            )
            .unwrap();

        let order = walk(&schema, &seeds(&["m::Node"])).unwrap();
        assert_eq!(paths(&order), ["m::Node"]);
    }

    #[test]
    fn mutual_cycle_terminates() {
        let mut schema = Schema::new();
        schema
            .insert(TypeDef::new("m::A").with_property(Property::path("b", "m::B")))
            .unwrap();
        schema
            .insert(TypeDef::new("m::B").with_property(Property::path("a", "m::A")))
            .unwrap();

        let order = walk(&schema, &seeds(&["m::A"])).unwrap();
        assert_eq!(paths(&order), ["m::A", "m::B"]);
    }

    #[test]
    fn shared_target_is_discovered_once() {
        let mut schema = Schema::new();
        schema
            .insert(
                TypeDef::new("m::Pair")
                    .with_property(Property::path("left", "m::Leaf"))
                    .with_property(Property::path("right", "m::Leaf")),
            )
            .unwrap();
        schema.insert(TypeDef::new("m::Leaf")).unwrap();

        let order = walk(&schema, &seeds(&["m::Pair"])).unwrap();
        assert_eq!(paths(&order), ["m::Pair", "m::Leaf"]);
    }

    #[test]
    fn excluded_properties_do_not_pull_types_in() {
        let mut schema = Schema::new();
        schema
            .insert(
                TypeDef::new("m::Person")
                    .with_property(Property::path("old", "m::Gone").exclude()),
            )
            .unwrap();

        let order = walk(&schema, &seeds(&["m::Person"])).unwrap();
        assert_eq!(paths(&order), ["m::Person"]);
    }

    #[test]
    fn undescribable_type_aborts_the_pass() {
        let mut schema = Schema::new();
        schema
            .insert(
                TypeDef::new("m::Person")
                    .with_property(Property::path("inner", "m::Missing")),
            )
            .unwrap();

        assert!(walk(&schema, &seeds(&["m::Person"])).is_err());
    }

    #[test]
    fn multiple_seeds_walk_in_sorted_order() {
        let mut schema = Schema::new();
        schema.insert(TypeDef::new("m::Zeta")).unwrap();
        schema.insert(TypeDef::new("m::Alpha")).unwrap();

        let order = walk(&schema, &seeds(&["m::Zeta", "m::Alpha"])).unwrap();
        assert_eq!(paths(&order), ["m::Alpha", "m::Zeta"]);
    }
}
