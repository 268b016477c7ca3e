//! ## Crate layout
//! - `build`: the build-time accessor generator (discovery, graph walk,
//!   synthesis, emission).
//! - `schema`: descriptor model consumed by the generator.
//! - `error`: runtime error type raised by generated accessor code.
//! - `path`: the canonical property-path queue.
//! - `traits`: the generated accessor surface plus terminal leaf impls.
//!
//! Consumers mark root types with [`dynamic_access!`], run
//! `build::generate_source` from a build script over a schema snapshot,
//! and `include!` the emitted impls.

pub use dynprop_build as build;
pub use dynprop_schema as schema;

pub mod error;
pub mod path;
pub mod traits;

pub use error::AccessError;
pub use path::PropPath;
pub use traits::DynamicAccess;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// dynamic_access
/// Usage marker. Expands to nothing; the generator's source scan collects
/// the named type as a seed for accessor generation.
///

#[macro_export]
macro_rules! dynamic_access {
    ($ty:path) => {};
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{AccessError, DynamicAccess, PropPath};
}
