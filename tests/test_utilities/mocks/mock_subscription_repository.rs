use rhsm_updates::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock SubscriptionRepository for testing
///
/// Serves a fixed listing plus per-system names and errata, and records
/// every call so tests can assert which requests a run made.
#[derive(Default, Clone)]
pub struct MockSubscriptionRepository {
    listing: Vec<String>,
    names: HashMap<String, String>,
    errata: HashMap<String, Vec<UpdateRecord>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a system to the listing along with its name and errata
    pub fn with_device(mut self, id: &str, name: &str, errata: Vec<UpdateRecord>) -> Self {
        self.listing.push(id.to_string());
        self.names.insert(id.to_string(), name.to_string());
        self.errata.insert(id.to_string(), errata);
        self
    }

    /// Lists an already known system again
    pub fn with_listed_again(mut self, id: &str) -> Self {
        self.listing.push(id.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SubscriptionRepository for MockSubscriptionRepository {
    fn find_device_ids(&self, access: &AccessCredential, pattern: &str) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("list {} as {}", pattern, access.token()));
        Ok(self.listing.clone())
    }

    fn fetch_device(&self, _access: &AccessCredential, device_id: &str) -> Result<DeviceRecord> {
        self.calls.lock().unwrap().push(format!("detail {}", device_id));
        match self.names.get(device_id) {
            Some(name) => Ok(DeviceRecord::new(device_id, name.clone())),
            None => Err(ReportError::fetch(
                format!("system {}", device_id),
                "API returned HTTP 404 Not Found",
            )
            .into()),
        }
    }

    fn fetch_errata(
        &self,
        _access: &AccessCredential,
        device_id: &str,
    ) -> Result<Vec<UpdateRecord>> {
        self.calls.lock().unwrap().push(format!("errata {}", device_id));
        Ok(self.errata.get(device_id).cloned().unwrap_or_default())
    }
}
