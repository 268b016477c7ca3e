pub mod naming;

use crate::{error::ErrorTree, node::Schema};

///
/// ValidateNode
/// Implemented by every schema node; failures aggregate into an
/// [`ErrorTree`] instead of stopping at the first problem.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

/// Validate a whole snapshot: per-node rules plus cross-node referential
/// integrity (every path-typed property must resolve to a described type).
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    for def in schema.types() {
        if let Err(tree) = def.validate() {
            errs.merge(def.path.as_str(), tree);
        }

        for property in def.accessible() {
            if let Some(path) = property.ty.as_path() {
                if !schema.contains(path) {
                    errs.add_route(
                        def.path.as_str(),
                        format!(
                            "property '{}' references undefined type '{path}'",
                            property.ident
                        ),
                    );
                }
            }
        }
    }

    errs.result()
}
