use serde::Serialize;
use std::fmt;

///
/// ErrorTree
/// Flat aggregate of validation failures, each prefixed with the route of
/// the node that produced it.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    errors: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, err: impl fmt::Display) {
        self.errors.push(err.to_string());
    }

    /// Add an error under a node route, `route: message`.
    pub fn add_route(&mut self, route: &str, err: impl fmt::Display) {
        self.errors.push(format!("{route}: {err}"));
    }

    /// Fold another tree into this one under a route prefix.
    pub fn merge(&mut self, route: &str, other: Self) {
        for err in other.errors {
            self.errors.push(format!("{route}: {err}"));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Ok if no errors were collected, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn routes_prefix_messages() {
        let mut errs = ErrorTree::new();
        errs.add_route("Person.name", "ident is empty");

        let err = errs.result().unwrap_err();
        assert_eq!(err.to_string(), "Person.name: ident is empty");
    }

    #[test]
    fn merge_nests_routes() {
        let mut inner = ErrorTree::new();
        inner.add("bad ident");

        let mut outer = ErrorTree::new();
        outer.merge("Person", inner);

        assert_eq!(outer.to_string(), "Person: bad ident");
    }
}
