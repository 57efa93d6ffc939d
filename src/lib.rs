//! rhsm-updates - pending errata reports for RHSM-registered systems
//!
//! This library exchanges a Red Hat offline token for an access token,
//! resolves registered systems by a wildcard name, fetches each system's
//! pending errata and reports those matching one update category. It is
//! organized as a hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`update_reporting`): value types, the advisory filter
//!   and the errata accumulator
//! - **Application Layer** (`application`): the report use case and its DTOs
//! - **Ports** (`ports`): interfaces for SSO, the systems API and the console
//! - **Adapters** (`adapters`): reqwest clients, the text formatter, console output
//! - **Shared** (`shared`): error types, Result alias, input validation
//!
//! # Example
//!
//! ```no_run
//! use rhsm_updates::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateUpdateReportUseCase::new(
//!     SsoTokenClient::new()?,
//!     RhsmApiClient::new()?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ReportRequest::builder()
//!     .offline_credential(OfflineCredential::new("<offline token>")?)
//!     .device_pattern("web")
//!     .category(UpdateCategory::Security)
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = PlainTextFormatter::new().format(&response.device_reports)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod update_reporting;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::PlainTextFormatter;
    pub use crate::adapters::outbound::network::{RhsmApiClient, SsoTokenClient};
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::use_cases::GenerateUpdateReportUseCase;
    pub use crate::config::Settings;
    pub use crate::ports::outbound::{
        CredentialExchanger, OutputPresenter, ProgressReporter, ReportFormatter,
        SubscriptionRepository,
    };
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
    pub use crate::update_reporting::domain::{
        AccessCredential, DeviceRecord, DeviceReport, OfflineCredential, UpdateCategory,
        UpdateRecord,
    };
    pub use crate::update_reporting::services::{
        AccumulationMode, AdvisoryFilter, UpdateAccumulator,
    };
}
