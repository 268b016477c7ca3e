mod property;
mod schema;
mod ty;

pub use property::{Property, PropertyList};
pub use schema::Schema;
pub use ty::TypeDef;

use crate::types::TypePath;
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("type '{path}' is already defined")]
    DuplicateType { path: TypePath },

    #[error("type '{path}' is not defined in the schema")]
    UnknownType { path: TypePath },
}
