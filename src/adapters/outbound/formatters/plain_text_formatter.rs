use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::update_reporting::domain::DeviceReport;
use std::fmt::Write;

/// PlainTextFormatter adapter for the console report
///
/// Each section is a blank line, the system name, then one line per erratum:
///
/// ```text
///
/// web01
///  [+] Security Advisory - RHSA-2024:0001 - Important: openssl security update
/// ```
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format(&self, reports: &[DeviceReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            writeln!(output)?;
            writeln!(output, "{}", report.device.display_name())?;
            for update in &report.updates {
                writeln!(
                    output,
                    " [+] {} - {} - {}",
                    update.category(),
                    update.identifier(),
                    update.synopsis()
                )?;
            }
        }

        Ok(output)
    }
}
