use crate::update_reporting::domain::UpdateRecord;

/// How errata are collected as systems are processed in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccumulationMode {
    /// Each system's section contains only that system's errata
    #[default]
    PerDevice,
    /// Errata collected for earlier systems are carried into every later
    /// system's section. Reproduces the output of the legacy script, which
    /// never cleared its collection between systems.
    Cumulative,
}

/// UpdateAccumulator - Holds the errata a report section is filtered from
///
/// Owned by a single report run. Call [`begin_device`](Self::begin_device)
/// before adding a system's errata; in `PerDevice` mode this discards the
/// previous system's records, in `Cumulative` mode it keeps them.
#[derive(Debug, Default)]
pub struct UpdateAccumulator {
    mode: AccumulationMode,
    records: Vec<UpdateRecord>,
}

impl UpdateAccumulator {
    pub fn new(mode: AccumulationMode) -> Self {
        Self {
            mode,
            records: Vec::new(),
        }
    }

    pub fn mode(&self) -> AccumulationMode {
        self.mode
    }

    pub fn begin_device(&mut self) {
        if self.mode == AccumulationMode::PerDevice {
            self.records.clear();
        }
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = UpdateRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[UpdateRecord] {
        &self.records
    }
}
