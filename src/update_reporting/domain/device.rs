use super::UpdateRecord;

/// A system registered with subscription management
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    identifier: String,
    display_name: String,
}

impl DeviceRecord {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// One section of the final report: a system and the errata selected for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceReport {
    pub device: DeviceRecord,
    pub updates: Vec<UpdateRecord>,
}

impl DeviceReport {
    pub fn new(device: DeviceRecord, updates: Vec<UpdateRecord>) -> Self {
        Self { device, updates }
    }
}
