use crate::shared::Result;
use crate::update_reporting::domain::{AccessCredential, OfflineCredential};

/// CredentialExchanger port for obtaining an access token
///
/// This port abstracts the SSO token endpoint that trades the long-lived
/// offline token for a short-lived bearer token.
pub trait CredentialExchanger {
    /// Exchanges an offline token for an access token
    ///
    /// Performs exactly one request and never retries.
    ///
    /// # Errors
    /// Returns [`ReportError::Authentication`](crate::shared::error::ReportError::Authentication)
    /// if:
    /// - The endpoint cannot be reached
    /// - The endpoint answers with a non-success status (the raw body is kept)
    /// - The response does not contain an `access_token`
    fn exchange(&self, offline: &OfflineCredential) -> Result<AccessCredential>;
}
