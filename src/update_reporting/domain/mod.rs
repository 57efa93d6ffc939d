pub mod credentials;
pub mod device;
pub mod update_category;
pub mod update_record;

pub use credentials::{AccessCredential, OfflineCredential, DEFAULT_ACCESS_TOKEN_LIFETIME_SECS};
pub use device::{DeviceRecord, DeviceReport};
pub use update_category::UpdateCategory;
pub use update_record::UpdateRecord;
