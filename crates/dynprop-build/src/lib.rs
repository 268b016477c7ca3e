//! Build-time accessor generation.
//!
//! The pipeline runs strictly forward: usage discovery yields seed type
//! paths, [`walk`] discovers every type reachable through property
//! references, [`ops::synthesize`] turns each discovered type into
//! declarative operation specs, and emission renders one artifact per
//! type. A pass either returns every artifact or fails whole; nothing is
//! cached between passes.

mod discover;
mod emit;
mod ops;
mod walk;

pub use discover::{SourceScan, StaticSeeds, UsageDiscovery};
pub use ops::{Coercion, DispatchArm, OpKind, OperationSpec};
pub use walk::walk;

use dynprop_schema::{
    node::{NodeError, Schema},
    types::TypePath,
};
use proc_macro2::TokenStream;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] dynprop_schema::Error),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("failed to read source file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse source file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
}

///
/// Artifact
/// One emitted unit per discovered type, named from the full path
/// identity so regeneration is idempotent and same-ident types in
/// different modules never collide.
///

#[derive(Clone, Debug)]
pub struct Artifact {
    pub name: String,
    pub tokens: TokenStream,
}

impl Artifact {
    #[must_use]
    pub fn source(&self) -> String {
        self.tokens.to_string()
    }
}

// generate
/// Generate one accessor artifact per type reachable from the seeds.
/// An empty seed set yields the stub artifact so the generated contract
/// stays stable across builds where usage temporarily disappears.
pub fn generate(schema: &Schema, seeds: &BTreeSet<TypePath>) -> Result<Vec<Artifact>, Error> {
    schema.validate()?;

    if seeds.is_empty() {
        return Ok(vec![emit::stub_artifact()]);
    }

    let order = walk(schema, seeds)?;

    AccessorBuilder::new(schema, order).generate()
}

/// Generate and concatenate artifact sources into a single string, ready
/// to be written under `OUT_DIR` and `include!`d.
pub fn generate_source(schema: &Schema, seeds: &BTreeSet<TypePath>) -> Result<String, Error> {
    let artifacts = generate(schema, seeds)?;

    let mut out = String::new();
    for artifact in &artifacts {
        out.push_str("// ");
        out.push_str(&artifact.name);
        out.push('\n');
        out.push_str(&artifact.source());
        out.push_str("\n\n");
    }

    Ok(out)
}

///
/// AccessorBuilder
///

pub(crate) struct AccessorBuilder<'a> {
    schema: &'a Schema,
    order: Vec<TypePath>,
}

impl<'a> AccessorBuilder<'a> {
    #[must_use]
    pub(crate) const fn new(schema: &'a Schema, order: Vec<TypePath>) -> Self {
        Self { schema, order }
    }

    /// Emit one artifact per discovered type, in discovery order.
    pub(crate) fn generate(&self) -> Result<Vec<Artifact>, Error> {
        let mut artifacts = Vec::with_capacity(self.order.len());

        for path in &self.order {
            let def = self.schema.describe(path)?;
            let ops = ops::synthesize(self.schema, def)?;
            artifacts.push(emit::artifact(def, &ops));
        }

        Ok(artifacts)
    }
}
