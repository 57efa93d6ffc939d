/// A single pending erratum for a system.
///
/// `category` keeps the advisory type exactly as the API reports it
/// (e.g. "Security Advisory") so unknown advisory kinds are still reported
/// under the "all" filter. Equality and hashing cover all three fields,
/// which is the identity used for de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpdateRecord {
    category: String,
    identifier: String,
    synopsis: String,
}

impl UpdateRecord {
    pub fn new(
        category: impl Into<String>,
        identifier: impl Into<String>,
        synopsis: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            identifier: identifier.into(),
            synopsis: synopsis.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    /// True when `term` occurs anywhere in the type, synopsis or id
    pub fn mentions(&self, term: &str) -> bool {
        self.category.contains(term)
            || self.synopsis.contains(term)
            || self.identifier.contains(term)
    }
}
