use crate::prelude::*;
use derive_more::{Display, FromStr};
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

///
/// TypePath
/// Full-path identity of a type (`crate::model::Person`). Two descriptors
/// with equal paths are the same node; equality is identity, never
/// structure.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct TypePath(String);

impl TypePath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, the short type name.
    #[must_use]
    pub fn ident(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split("::")
    }
}

impl From<&str> for TypePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl ToTokens for TypePath {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let path: TokenStream = self
            .0
            .parse()
            .unwrap_or_else(|_| panic!("invalid type path: {}", self.0));

        tokens.extend(path);
    }
}

///
/// Primitive
/// Terminal leaf types generated code can reach but never traverse
/// through. Accessor impls for these live in the runtime crate.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Char,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Nat8,
    Nat16,
    Nat32,
    Nat64,
    Nat128,
    Text,
}

impl Primitive {
    /// The string kind; assigned directly, never parsed.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Every terminal leaf accepts a string through `FromStr`.
    #[must_use]
    pub const fn has_parse(self) -> bool {
        true
    }

    #[must_use]
    pub const fn rust_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Int128 => "i128",
            Self::Nat8 => "u8",
            Self::Nat16 => "u16",
            Self::Nat32 => "u32",
            Self::Nat64 => "u64",
            Self::Nat128 => "u128",
            Self::Text => "String",
        }
    }
}

impl ToTokens for Primitive {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        if self.is_text() {
            tokens.extend(quote!(::std::string::String));
        } else {
            let ident = format_ident!("{}", self.rust_name());
            tokens.extend(quote!(#ident));
        }
    }
}

///
/// TypeRef
/// A property's declared type: a terminal primitive or a path into the
/// schema.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TypeRef {
    Prim(Primitive),
    Path(TypePath),
}

impl TypeRef {
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Prim(Primitive::Text))
    }

    #[must_use]
    pub const fn as_path(&self) -> Option<&TypePath> {
        match self {
            Self::Path(path) => Some(path),
            Self::Prim(_) => None,
        }
    }

    /// Rust-facing spelling, used in diagnostics.
    #[must_use]
    pub fn rust_name(&self) -> &str {
        match self {
            Self::Prim(prim) => prim.rust_name(),
            Self::Path(path) => path.as_str(),
        }
    }
}

impl ToTokens for TypeRef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Prim(prim) => prim.to_tokens(tokens),
            Self::Path(path) => path.to_tokens(tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_path_ident_is_last_segment() {
        let path = TypePath::new("crate::model::Person");
        assert_eq!(path.ident(), "Person");
        assert_eq!(path.segments().count(), 3);
    }

    #[test]
    fn bare_ident_path_is_its_own_ident() {
        assert_eq!(TypePath::new("Person").ident(), "Person");
    }

    #[test]
    fn type_path_renders_as_rust_path() {
        let path = TypePath::new("crate::model::Person");
        let tokens = quote!(#path);
        assert_eq!(tokens.to_string(), "crate :: model :: Person");
    }

    #[test]
    fn primitive_renders_rust_type() {
        let nat = Primitive::Nat32;
        let text = Primitive::Text;
        assert_eq!(quote!(#nat).to_string(), "u32");
        assert_eq!(quote!(#text).to_string(), ":: std :: string :: String");
    }

    #[test]
    fn text_is_the_only_string_kind() {
        assert!(Primitive::Text.is_text());
        assert!(!Primitive::Nat64.is_text());
        assert!(TypeRef::Prim(Primitive::Text).is_text());
        assert!(!TypeRef::Path(TypePath::new("x::Y")).is_text());
    }

    #[test]
    fn primitive_round_trips_through_display() {
        let prim: Primitive = "Nat32".parse().unwrap();
        assert_eq!(prim, Primitive::Nat32);
        assert_eq!(prim.to_string(), "Nat32");
    }
}
