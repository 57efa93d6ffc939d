use clap::Parser;
use rhsm_updates::shared::error::ReportError;
use rhsm_updates::update_reporting::domain::UpdateCategory;
use std::path::PathBuf;

const MISSING_CATEGORY: &str = "Did you specify the type of updates you would like to check?";
const CONFLICTING_CATEGORIES: &str = "Please only list one method of checking updates at a time";

/// Report available updates for systems registered with Red Hat Subscription Management
#[derive(Parser, Debug)]
#[command(name = "rhsm-updates")]
#[command(version)]
#[command(about = "Report available updates for systems registered with Red Hat Subscription Management", long_about = None)]
#[command(after_help = "Exactly one of -a, -b, -p or -s must be given.")]
pub struct Args {
    /// Offline token from https://access.redhat.com/management/api.
    /// It lasts 30 days and is exchanged for an access token that lasts 900 seconds
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    pub token: String,

    /// List all available updates for every system matching DEVICE.
    /// The match is a wildcard: 'foo' matches '*foo*'
    #[arg(short = 'a', long = "all-updates", value_name = "DEVICE")]
    pub all_updates: Option<String>,

    /// Like -a, but only bug fix updates
    #[arg(short = 'b', long = "bug-updates", value_name = "DEVICE")]
    pub bug_updates: Option<String>,

    /// Like -a, but only performance enhancement updates
    #[arg(short = 'p', long = "performance-updates", value_name = "DEVICE")]
    pub performance_updates: Option<String>,

    /// Like -a, but only security updates
    #[arg(short = 's', long = "security-updates", value_name = "DEVICE")]
    pub security_updates: Option<String>,

    /// Repeat errata of earlier systems in every later system's section
    /// (output of the original script)
    #[arg(long)]
    pub cumulative: bool,

    /// Config file path (defaults to ./rhsm-updates.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// The category flag chosen on the command line and its device pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    pub category: UpdateCategory,
    pub device_pattern: String,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    fn category_flags(&self) -> [(UpdateCategory, Option<&str>); 4] {
        [
            (UpdateCategory::All, self.all_updates.as_deref()),
            (UpdateCategory::Security, self.security_updates.as_deref()),
            (UpdateCategory::BugFix, self.bug_updates.as_deref()),
            (UpdateCategory::Enhancement, self.performance_updates.as_deref()),
        ]
    }

    /// Validates that exactly one category flag was given
    ///
    /// A flag with a blank DEVICE counts as given for the conflict check but
    /// does not select a category.
    pub fn category_selection(&self) -> Result<CategorySelection, ReportError> {
        let flags = self.category_flags();

        let (category, pattern) = flags
            .iter()
            .find_map(|(category, pattern)| {
                pattern
                    .filter(|p| !p.trim().is_empty())
                    .map(|p| (*category, p))
            })
            .ok_or_else(|| ReportError::validation(MISSING_CATEGORY))?;

        let supplied = flags.iter().filter(|(_, pattern)| pattern.is_some()).count();
        if supplied > 1 {
            return Err(ReportError::validation(CONFLICTING_CATEGORIES));
        }

        Ok(CategorySelection {
            category,
            device_pattern: pattern.to_string(),
        })
    }
}
