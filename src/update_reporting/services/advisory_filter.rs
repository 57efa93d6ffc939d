use crate::update_reporting::domain::{UpdateCategory, UpdateRecord};
use std::collections::HashSet;

/// AdvisoryFilter - Selects errata for a report section
///
/// A record is kept when the search term occurs anywhere in its type,
/// synopsis or id. It is a substring match over all three fields, not a
/// comparison on the type alone: "Advisory" therefore selects
/// every advisory kind, and a synopsis mentioning "Security Advisory" is
/// selected by the security filter.
///
/// Surviving records are de-duplicated by (type, id, synopsis), keeping the
/// first occurrence so output follows feed order.
#[derive(Debug, Clone)]
pub struct AdvisoryFilter {
    term: String,
}

impl AdvisoryFilter {
    pub fn new(category: UpdateCategory) -> Self {
        Self::with_term(category.search_term())
    }

    pub fn with_term(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn apply(&self, records: &[UpdateRecord]) -> Vec<UpdateRecord> {
        let mut seen: HashSet<&UpdateRecord> = HashSet::new();

        records
            .iter()
            .filter(|record| record.mentions(&self.term))
            .filter(|record| seen.insert(*record))
            .cloned()
            .collect()
    }
}
