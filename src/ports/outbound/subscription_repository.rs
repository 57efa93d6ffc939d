use crate::shared::Result;
use crate::update_reporting::domain::{AccessCredential, DeviceRecord, UpdateRecord};

/// SubscriptionRepository port for reading registered systems and their errata
///
/// This port abstracts the subscription-management systems API. All calls
/// are authorised with the access token obtained for the run.
pub trait SubscriptionRepository {
    /// Lists the identifiers of systems whose name matches `pattern`
    ///
    /// Matching happens server-side: `web` selects every system whose name
    /// contains `web`. Identifiers are returned in response order, including
    /// any duplicates the server sends.
    ///
    /// # Errors
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body cannot be parsed
    fn find_device_ids(&self, access: &AccessCredential, pattern: &str) -> Result<Vec<String>>;

    /// Fetches the detail record of one system
    ///
    /// # Errors
    /// Returns an error if the request fails or the body has no `name`
    fn fetch_device(&self, access: &AccessCredential, device_id: &str) -> Result<DeviceRecord>;

    /// Fetches every pending erratum for one system, unfiltered
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be parsed
    fn fetch_errata(&self, access: &AccessCredential, device_id: &str)
        -> Result<Vec<UpdateRecord>>;
}
