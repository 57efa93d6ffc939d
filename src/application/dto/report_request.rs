use crate::shared::error::ReportError;
use crate::shared::Result;
use crate::update_reporting::domain::{OfflineCredential, UpdateCategory};
use crate::update_reporting::services::AccumulationMode;

/// ReportRequest - Internal request DTO for the update report use case
///
/// Carries everything a run needs; nothing is read from process-wide state.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Offline token exchanged once at the start of the run
    pub offline_credential: OfflineCredential,
    /// Wildcard pattern passed to the systems listing as `filter`
    pub device_pattern: String,
    /// The single category filter active for this run
    pub category: UpdateCategory,
    /// Whether errata are collected per system or across the whole run
    pub accumulation_mode: AccumulationMode,
}

impl ReportRequest {
    pub fn new(
        offline_credential: OfflineCredential,
        device_pattern: String,
        category: UpdateCategory,
        accumulation_mode: AccumulationMode,
    ) -> Self {
        Self {
            offline_credential,
            device_pattern,
            category,
            accumulation_mode,
        }
    }

    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }
}

/// Builder for [`ReportRequest`]
///
/// `offline_credential`, `device_pattern` and `category` are required;
/// `accumulation_mode` defaults to [`AccumulationMode::PerDevice`].
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    offline_credential: Option<OfflineCredential>,
    device_pattern: Option<String>,
    category: Option<UpdateCategory>,
    accumulation_mode: AccumulationMode,
}

impl ReportRequestBuilder {
    pub fn offline_credential(mut self, credential: OfflineCredential) -> Self {
        self.offline_credential = Some(credential);
        self
    }

    pub fn device_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.device_pattern = Some(pattern.into());
        self
    }

    pub fn category(mut self, category: UpdateCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn accumulation_mode(mut self, mode: AccumulationMode) -> Self {
        self.accumulation_mode = mode;
        self
    }

    pub fn build(self) -> Result<ReportRequest> {
        let offline_credential = self
            .offline_credential
            .ok_or_else(|| ReportError::validation("An offline token is required"))?;

        let device_pattern = self
            .device_pattern
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ReportError::validation("A device pattern is required"))?;

        let category = self
            .category
            .ok_or_else(|| ReportError::validation("An update category is required"))?;

        Ok(ReportRequest::new(
            offline_credential,
            device_pattern,
            category,
            self.accumulation_mode,
        ))
    }
}
