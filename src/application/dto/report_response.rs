use crate::update_reporting::domain::{DeviceReport, UpdateCategory};

/// ReportResponse - Result of the update report use case
///
/// Holds every section of the report. It is only produced when every
/// request of the run succeeded, so presenting it never yields a partial
/// report.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Category the errata were filtered by
    pub category: UpdateCategory,
    /// One section per resolved system, in resolution order
    pub device_reports: Vec<DeviceReport>,
}

impl ReportResponse {
    pub fn new(category: UpdateCategory, device_reports: Vec<DeviceReport>) -> Self {
        Self {
            category,
            device_reports,
        }
    }

    pub fn device_count(&self) -> usize {
        self.device_reports.len()
    }

    /// Number of report lines across all sections
    pub fn total_updates(&self) -> usize {
        self.device_reports.iter().map(|r| r.updates.len()).sum()
    }
}
