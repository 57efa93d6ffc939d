/// Network adapters for external API calls
mod rhsm_client;
mod sso_client;

pub use rhsm_client::RhsmApiClient;
pub use sso_client::SsoTokenClient;
