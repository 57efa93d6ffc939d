use crate::shared::error::ReportError;
use crate::shared::Result;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Lifetime the SSO endpoint grants an access token when it does not say otherwise
pub const DEFAULT_ACCESS_TOKEN_LIFETIME_SECS: i64 = 900;

/// Upper bound accepted for a reported `expires_in`
const MAX_ACCESS_TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// Long-lived (30 day) token generated on the customer portal.
///
/// Only ever sent to the SSO endpoint. `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct OfflineCredential(String);

impl OfflineCredential {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ReportError::validation(
                "The offline token (-t/--token) must not be empty",
            )
            .into());
        }
        Ok(Self(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OfflineCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OfflineCredential(***)")
    }
}

/// Short-lived bearer token obtained by exchanging an [`OfflineCredential`].
///
/// Held in memory for a single run and never renewed.
#[derive(Clone)]
pub struct AccessCredential {
    token: String,
    obtained_at: DateTime<Utc>,
    lifetime: Duration,
}

impl AccessCredential {
    /// Creates a credential obtained now.
    ///
    /// `expires_in` is the server-reported lifetime in seconds; values that
    /// are missing, non-positive or implausibly large fall back to
    /// [`DEFAULT_ACCESS_TOKEN_LIFETIME_SECS`].
    pub fn new(token: impl Into<String>, expires_in: Option<i64>) -> Self {
        Self::obtained_at(token, Utc::now(), expires_in)
    }

    pub fn obtained_at(
        token: impl Into<String>,
        obtained_at: DateTime<Utc>,
        expires_in: Option<i64>,
    ) -> Self {
        let secs = expires_in
            .filter(|s| *s > 0 && *s <= MAX_ACCESS_TOKEN_LIFETIME_SECS)
            .unwrap_or(DEFAULT_ACCESS_TOKEN_LIFETIME_SECS);

        Self {
            token: token.into(),
            obtained_at,
            lifetime: Duration::seconds(secs),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.obtained_at + self.lifetime
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for AccessCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessCredential")
            .field("token", &"***")
            .field("expires_at", &self.expires_at())
            .finish()
    }
}
