/// Crate-wide Result alias.
///
/// Every layer propagates `anyhow::Error`; typed failures are raised as
/// [`ReportError`](crate::shared::error::ReportError) and converted on `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
