use crate::ports::outbound::SubscriptionRepository;
use crate::shared::error::ReportError;
use crate::shared::security::validate_path_segment;
use crate::shared::Result;
use crate::update_reporting::domain::{AccessCredential, DeviceRecord, UpdateRecord};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Longest slice of an error response body kept in a fetch error
const MAX_ERROR_BODY_CHARS: usize = 512;

/// RhsmApiClient adapter for the RHSM systems API
///
/// Implements the SubscriptionRepository port over three endpoints:
/// - `GET {api_url}?filter=<pattern>` lists matching systems
/// - `GET {api_url}/<uuid>` returns a system's detail
/// - `GET {api_url}/<uuid>/errata` returns its pending errata
///
/// Every response wraps its payload in a top-level `body` field. Listing
/// pagination is not followed; only the first page the API returns is used.
pub struct RhsmApiClient {
    client: Client,
    api_url: String,
}

impl RhsmApiClient {
    pub const DEFAULT_API_URL: &'static str = "https://api.access.redhat.com/management/v1/systems";

    /// Creates a client for the production systems API
    pub fn new() -> Result<Self> {
        Self::with_api_url(Self::DEFAULT_API_URL)
    }

    /// Creates a client for an alternative systems endpoint
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("rhsm-updates/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        let api_url: String = api_url.into();
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn listing_url(&self, pattern: &str) -> String {
        format!("{}?filter={}", self.api_url, urlencoding::encode(pattern))
    }

    fn system_url(&self, device_id: &str) -> Result<String> {
        validate_path_segment(device_id, "System UUID")
            .map_err(|e| ReportError::fetch(format!("system {}", device_id), e))?;

        Ok(format!(
            "{}/{}",
            self.api_url,
            urlencoding::encode(device_id)
        ))
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        access: &AccessCredential,
        resource: &str,
    ) -> Result<T> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(access.token())
            .send()
            .map_err(|e| ReportError::fetch(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReportError::fetch(
                resource,
                format!("API returned HTTP {}: {}", status, truncate(body.trim())),
            )
            .into());
        }

        let parsed = response
            .json::<T>()
            .map_err(|e| ReportError::fetch(resource, format!("malformed response: {}", e)))?;

        Ok(parsed)
    }
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", head)
    }
}

impl SubscriptionRepository for RhsmApiClient {
    fn find_device_ids(&self, access: &AccessCredential, pattern: &str) -> Result<Vec<String>> {
        let url = self.listing_url(pattern);
        let resource = format!("systems matching '{}'", pattern);

        let listing: Envelope<Vec<SystemSummary>> = self.get_json(&url, access, &resource)?;

        Ok(listing.body.into_iter().map(|system| system.uuid).collect())
    }

    fn fetch_device(&self, access: &AccessCredential, device_id: &str) -> Result<DeviceRecord> {
        let url = self.system_url(device_id)?;
        let resource = format!("system {}", device_id);

        let detail: Envelope<SystemDetail> = self.get_json(&url, access, &resource)?;

        Ok(DeviceRecord::new(device_id, detail.body.name))
    }

    fn fetch_errata(
        &self,
        access: &AccessCredential,
        device_id: &str,
    ) -> Result<Vec<UpdateRecord>> {
        let url = format!("{}/errata", self.system_url(device_id)?);
        let resource = format!("errata for system {}", device_id);

        let errata: Envelope<Vec<Erratum>> = self.get_json(&url, access, &resource)?;

        Ok(errata
            .body
            .into_iter()
            .map(|e| UpdateRecord::new(e.advisory_type, e.id, e.synopsis))
            .collect())
    }
}

// Systems API response structures

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    body: T,
}

#[derive(Debug, Deserialize)]
struct SystemSummary {
    uuid: String,
}

#[derive(Debug, Deserialize)]
struct SystemDetail {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Erratum {
    id: String,
    synopsis: String,
    #[serde(rename = "type")]
    advisory_type: String,
}
