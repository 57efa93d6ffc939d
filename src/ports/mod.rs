/// Ports module defining the interfaces between the application core and
/// the outside world (SSO, the subscription API, the console).
pub mod outbound;
