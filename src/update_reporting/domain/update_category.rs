use std::fmt;

/// The class of errata a run reports on. Exactly one is active per run.
///
/// Each category maps to the search term used by
/// [`AdvisoryFilter`](crate::update_reporting::services::AdvisoryFilter).
/// `All` uses the bare word "Advisory", which is a substring of every
/// advisory type the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateCategory {
    All,
    Security,
    BugFix,
    Enhancement,
}

impl UpdateCategory {
    pub fn search_term(&self) -> &'static str {
        match self {
            UpdateCategory::All => "Advisory",
            UpdateCategory::Security => "Security Advisory",
            UpdateCategory::BugFix => "Bug Fix Advisory",
            UpdateCategory::Enhancement => "Product Enhancement Advisory",
        }
    }

    /// Human readable name used in progress messages
    pub fn label(&self) -> &'static str {
        match self {
            UpdateCategory::All => "all",
            UpdateCategory::Security => "security",
            UpdateCategory::BugFix => "bug fix",
            UpdateCategory::Enhancement => "performance enhancement",
        }
    }
}

impl fmt::Display for UpdateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.search_term())
    }
}
