//! Descriptor model for build-time accessor generation.
//!
//! A [`node::Schema`] is an immutable snapshot of every type that may need
//! generated accessors: one [`node::TypeDef`] per type, each carrying an
//! ordered [`node::PropertyList`]. The generator consumes the snapshot
//! through [`node::Schema::describe`]; nothing here touches a live type
//! system.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for a full type path identity.
pub const MAX_TYPE_PATH_LEN: usize = 256;

/// Maximum length for property identifiers.
pub const MAX_PROPERTY_NAME_LEN: usize = 64;

use crate::{error::ErrorTree, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::ErrorTree,
        node::{NodeError, Property, PropertyList, Schema, TypeDef},
        types::{Primitive, TypePath, TypeRef},
        validate::ValidateNode,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    NodeError(#[from] NodeError),

    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}
