/// Mock implementations for testing
mod mock_credential_exchanger;
mod mock_progress_reporter;
mod mock_subscription_repository;

pub use mock_credential_exchanger::MockCredentialExchanger;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_subscription_repository::MockSubscriptionRepository;
