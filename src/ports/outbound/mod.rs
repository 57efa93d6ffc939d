/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the network and the console.
pub mod credential_exchanger;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod subscription_repository;

pub use credential_exchanger::CredentialExchanger;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use subscription_repository::SubscriptionRepository;
