use crate::{prelude::*, validate::naming::validate_ident};

///
/// PropertyList
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PropertyList {
    properties: Vec<Property>,
}

impl PropertyList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.ident == ident)
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// All properties in declaration order, excluded ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// Properties the provider serves: declaration order, excluded dropped.
    pub fn accessible(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| !p.excluded)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<Property> for PropertyList {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl ValidateNode for PropertyList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for (i, property) in self.properties.iter().enumerate() {
            if self.properties[..i].iter().any(|p| p.ident == property.ident) {
                errs.add(format!("duplicate property '{}'", property.ident));
            }
        }

        errs.result()
    }
}

///
/// Property
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Property {
    pub ident: String,
    pub ty: TypeRef,

    #[serde(default)]
    pub excluded: bool,
}

impl Property {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            ident: ident.into(),
            ty,
            excluded: false,
        }
    }

    /// Terminal-typed property.
    #[must_use]
    pub fn prim(ident: impl Into<String>, prim: Primitive) -> Self {
        Self::new(ident, TypeRef::Prim(prim))
    }

    /// Property whose type is another schema node.
    #[must_use]
    pub fn path(ident: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(ident, TypeRef::Path(TypePath::new(path)))
    }

    /// Mark the property deprecated/hidden; it is never served.
    #[must_use]
    pub const fn exclude(mut self) -> Self {
        self.excluded = true;
        self
    }
}

impl ValidateNode for Property {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(err) = validate_ident(&self.ident) {
            errs.add(err);
        }

        errs.result()
    }
}
