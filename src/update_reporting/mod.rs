/// Update reporting domain - value types and pure services
///
/// Nothing in this module performs I/O; network access lives behind the
/// ports in `crate::ports::outbound`.
pub mod domain;
pub mod services;
