//! Usage discovery.
//!
//! Seeds are the root types callers actually ask accessors for. The
//! source scan collects `dynamic_access!(path::To::Type)` marker
//! invocations wherever they appear; the walker and synthesizer never
//! call back in here.

use crate::Error;
use dynprop_schema::types::TypePath;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use syn::visit::Visit;

const MARKER: &str = "dynamic_access";

///
/// UsageDiscovery
///

pub trait UsageDiscovery {
    /// The seed set of root types requiring generated accessors; may be
    /// empty.
    fn seeds(&self) -> Result<BTreeSet<TypePath>, Error>;
}

///
/// StaticSeeds
/// A fixed seed set, for drivers that already know their roots.
///

#[derive(Clone, Debug, Default)]
pub struct StaticSeeds {
    seeds: BTreeSet<TypePath>,
}

impl StaticSeeds {
    #[must_use]
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            seeds: paths.into_iter().map(|p| TypePath::new(p)).collect(),
        }
    }
}

impl UsageDiscovery for StaticSeeds {
    fn seeds(&self) -> Result<BTreeSet<TypePath>, Error> {
        Ok(self.seeds.clone())
    }
}

///
/// SourceScan
/// Parses Rust sources and collects marker invocations. Files that fail
/// to read or parse abort discovery; a marker whose tokens are not a
/// type path is ignored (it belongs to some other macro).
///

#[derive(Clone, Debug, Default)]
pub struct SourceScan {
    files: Vec<PathBuf>,
}

impl SourceScan {
    #[must_use]
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Scan one source text for marker invocations.
    pub fn scan_str(source: &str) -> Result<BTreeSet<TypePath>, syn::Error> {
        let file = syn::parse_file(source)?;

        let mut visitor = MarkerVisitor {
            seeds: BTreeSet::new(),
        };
        visitor.visit_file(&file);

        Ok(visitor.seeds)
    }
}

impl UsageDiscovery for SourceScan {
    fn seeds(&self) -> Result<BTreeSet<TypePath>, Error> {
        let mut seeds = BTreeSet::new();

        for path in &self.files {
            let source = fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            let found = Self::scan_str(&source).map_err(|source| Error::Parse {
                path: path.clone(),
                source,
            })?;

            seeds.extend(found);
        }

        Ok(seeds)
    }
}

///
/// MarkerVisitor
///

struct MarkerVisitor {
    seeds: BTreeSet<TypePath>,
}

impl<'ast> Visit<'ast> for MarkerVisitor {
    fn visit_macro(&mut self, node: &'ast syn::Macro) {
        let is_marker = node
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == MARKER);

        if is_marker {
            if let Ok(path) = syn::parse2::<syn::Path>(node.tokens.clone()) {
                self.seeds.insert(TypePath::new(path_to_string(&path)));
            }
        }

        syn::visit::visit_macro(self, node);
    }
}

fn path_to_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(seeds: &BTreeSet<TypePath>) -> Vec<&str> {
        seeds.iter().map(TypePath::as_str).collect()
    }

    #[test]
    fn finds_markers_in_item_position() {
        let seeds = SourceScan::scan_str(
            "dynprop::dynamic_access!(crate::model::Person);\n\
             pub struct Unrelated;",
        )
        .unwrap();

        assert_eq!(paths(&seeds), ["crate::model::Person"]);
    }

    #[test]
    fn finds_markers_inside_functions() {
        let seeds = SourceScan::scan_str(
            "fn main() {\n\
                 dynamic_access!(crate::model::Container);\n\
                 let _ = 1 + 1;\n\
             }",
        )
        .unwrap();

        assert_eq!(paths(&seeds), ["crate::model::Container"]);
    }

    #[test]
    fn duplicate_markers_collapse_to_one_seed() {
        let seeds = SourceScan::scan_str(
            "dynamic_access!(m::Person);\n\
             fn f() { dynamic_access!(m::Person); }",
        )
        .unwrap();

        assert_eq!(paths(&seeds), ["m::Person"]);
    }

    #[test]
    fn non_path_marker_tokens_are_ignored() {
        let seeds = SourceScan::scan_str("fn f() { dynamic_access!(1 + 1); }").unwrap();
        assert!(seeds.is_empty());
    }

    #[test]
    fn other_macros_are_ignored() {
        let seeds = SourceScan::scan_str("fn f() { println!(\"hi\"); }").unwrap();
        assert!(seeds.is_empty());
    }

    #[test]
    fn invalid_source_fails_discovery() {
        assert!(SourceScan::scan_str("fn main( {").is_err());
    }

    #[test]
    fn static_seeds_pass_through() {
        let discovery = StaticSeeds::new(["m::B", "m::A"]);
        let seeds = discovery.seeds().unwrap();

        assert_eq!(paths(&seeds), ["m::A", "m::B"]);
    }
}
