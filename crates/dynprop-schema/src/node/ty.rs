use crate::{prelude::*, validate::naming::validate_type_path};

///
/// TypeDef
/// Synthesis-time record of one type: its path identity, whether it
/// exposes a `FromStr` factory, and its ordered property list.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TypeDef {
    pub path: TypePath,

    /// The type parses from a string (`FromStr`), so string-form setters
    /// may target properties declared with this type.
    #[serde(default)]
    pub has_parse: bool,

    pub properties: PropertyList,
}

impl TypeDef {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: TypePath::new(path),
            has_parse: false,
            properties: PropertyList::new(),
        }
    }

    #[must_use]
    pub const fn with_parse(mut self) -> Self {
        self.has_parse = true;
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn ident(&self) -> &str {
        self.path.ident()
    }

    /// Accessible properties in declaration order.
    pub fn accessible(&self) -> impl Iterator<Item = &Property> {
        self.properties.accessible()
    }
}

impl ValidateNode for TypeDef {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(err) = validate_type_path(self.path.as_str()) {
            errs.add(err);
        }

        for property in self.properties.iter() {
            if let Err(tree) = property.validate() {
                errs.merge(&property.ident, tree);
            }
            if let Some(path) = property.ty.as_path() {
                if let Err(err) = validate_type_path(path.as_str()) {
                    errs.add_route(&property.ident, err);
                }
            }
        }

        if let Err(tree) = self.properties.validate() {
            errs.merge(self.path.as_str(), tree);
        }

        errs.result()
    }
}
