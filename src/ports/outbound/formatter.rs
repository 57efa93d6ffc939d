use crate::update_reporting::domain::DeviceReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a finished report
///
/// This port abstracts how the per-system sections are turned into text.
pub trait ReportFormatter {
    /// Formats the report sections in the order given
    ///
    /// # Arguments
    /// * `reports` - One section per resolved system, in resolution order
    ///
    /// # Returns
    /// The rendered report as a string
    ///
    /// # Errors
    /// Returns an error if formatting fails
    fn format(&self, reports: &[DeviceReport]) -> Result<String>;
}
