/// Use cases module containing application business logic orchestration
mod generate_update_report;

pub use generate_update_report::GenerateUpdateReportUseCase;
