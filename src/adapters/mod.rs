/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with SSO, the systems API and the console.
pub mod outbound;
