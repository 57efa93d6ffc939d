/// Domain services for selecting which errata end up in a report
pub mod advisory_filter;
pub mod update_accumulator;

pub use advisory_filter::AdvisoryFilter;
pub use update_accumulator::{AccumulationMode, UpdateAccumulator};
