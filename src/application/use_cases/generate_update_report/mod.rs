use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::outbound::{CredentialExchanger, ProgressReporter, SubscriptionRepository};
use crate::shared::Result;
use crate::update_reporting::domain::{AccessCredential, DeviceReport};
use crate::update_reporting::services::{AdvisoryFilter, UpdateAccumulator};


/// GenerateUpdateReportUseCase - Core use case for update reporting
///
/// Runs the three dependent steps of a report strictly in sequence:
/// token exchange, system resolution, then detail + errata fetch for each
/// system. The first failure aborts the run; no section of the report is
/// returned unless every request succeeded.
///
/// # Type Parameters
/// * `CE` - CredentialExchanger implementation
/// * `SR` - SubscriptionRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateUpdateReportUseCase<CE, SR, PR> {
    credential_exchanger: CE,
    subscription_repository: SR,
    progress_reporter: PR,
}

impl<CE, SR, PR> GenerateUpdateReportUseCase<CE, SR, PR>
where
    CE: CredentialExchanger,
    SR: SubscriptionRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateUpdateReportUseCase with injected dependencies
    pub fn new(
        credential_exchanger: CE,
        subscription_repository: SR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            credential_exchanger,
            subscription_repository,
            progress_reporter,
        }
    }

    /// Executes the update report use case
    ///
    /// # Arguments
    /// * `request` - Offline token, device pattern, category and accumulation mode
    ///
    /// # Returns
    /// ReportResponse with one section per resolved system
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Exchange the offline token
        let access = self.obtain_access_credential(&request)?;

        // Step 2: Resolve matching systems
        let device_ids = self.resolve_devices(&access, &request)?;

        // Step 3: Fetch, filter and de-duplicate errata per system
        let device_reports = self.aggregate_updates(&access, &device_ids, &request)?;

        if access.is_expired() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Access token expired at {} before the report finished",
                access.expires_at()
            ));
        }

        let response = ReportResponse::new(request.category, device_reports);
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} {} update(s) across {} system(s)",
            response.total_updates(),
            request.category.label(),
            response.device_count()
        ));

        Ok(response)
    }

    fn obtain_access_credential(&self, request: &ReportRequest) -> Result<AccessCredential> {
        self.progress_reporter
            .report("🔑 Exchanging offline token for an access token...");

        let access = self
            .credential_exchanger
            .exchange(&request.offline_credential)?;

        log::debug!("Access token valid until {}", access.expires_at());
        Ok(access)
    }

    fn resolve_devices(
        &self,
        access: &AccessCredential,
        request: &ReportRequest,
    ) -> Result<Vec<String>> {
        self.progress_reporter.report(&format!(
            "🔍 Looking up systems matching '{}'...",
            request.device_pattern
        ));

        let device_ids = self
            .subscription_repository
            .find_device_ids(access, &request.device_pattern)?;

        self.progress_reporter
            .report(&format!("✅ Matched {} system(s)", device_ids.len()));

        Ok(device_ids)
    }

    /// Builds one report section per system, in resolution order
    ///
    /// Duplicated identifiers are processed again, producing a repeated
    /// section, as the listing is not de-duplicated.
    fn aggregate_updates(
        &self,
        access: &AccessCredential,
        device_ids: &[String],
        request: &ReportRequest,
    ) -> Result<Vec<DeviceReport>> {
        let filter = AdvisoryFilter::new(request.category);
        let mut accumulator = UpdateAccumulator::new(request.accumulation_mode);
        let mut reports = Vec::with_capacity(device_ids.len());
        let total = device_ids.len();

        for (index, device_id) in device_ids.iter().enumerate() {
            let report = self
                .build_device_report(access, device_id, index, total, &filter, &mut accumulator)
                .inspect_err(|_| {
                    self.progress_reporter.report_error(&format!(
                        "❌ Report aborted at system {} ({}/{})",
                        device_id,
                        index + 1,
                        total
                    ));
                })?;
            reports.push(report);
        }

        if total > 0 {
            self.progress_reporter.report_progress(total, total, None);
        }

        Ok(reports)
    }

    fn build_device_report(
        &self,
        access: &AccessCredential,
        device_id: &str,
        index: usize,
        total: usize,
        filter: &AdvisoryFilter,
        accumulator: &mut UpdateAccumulator,
    ) -> Result<DeviceReport> {
        let device = self.subscription_repository.fetch_device(access, device_id)?;
        self.progress_reporter
            .report_progress(index, total, Some(device.display_name()));

        let errata = self.subscription_repository.fetch_errata(access, device_id)?;
        log::debug!(
            "{} ({}) has {} pending erratum/errata",
            device.display_name(),
            device_id,
            errata.len()
        );

        accumulator.begin_device();
        accumulator.extend(errata);

        let updates = filter.apply(accumulator.records());
        Ok(DeviceReport::new(device, updates))
    }
}
